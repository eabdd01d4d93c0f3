use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::error::{DomainError, Result};

/// Coordinate is a position on the square grid.
/// Both axes are non-negative by construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Coordinate {
    x: usize,
    y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Build a coordinate from signed input, rejecting negative axes
    pub fn try_new(x: i64, y: i64) -> Result<Self> {
        if x < 0 || y < 0 {
            return Err(DomainError::invalid_value(format!(
                "coordinates must be non-negative, got ({x}, {y})"
            )));
        }
        let x = usize::try_from(x).map_err(|_| DomainError::invalid_value("x out of range"))?;
        let y = usize::try_from(y).map_err(|_| DomainError::invalid_value("y out of range"))?;
        Ok(Self { x, y })
    }

    pub const fn x(&self) -> usize {
        self.x
    }

    pub const fn y(&self) -> usize {
        self.y
    }

    /// Canonical "x:y" key
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Apply a signed offset, returning None when either axis would go negative
    pub fn offset(&self, dx: isize, dy: isize) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

/// Row-major ordering: primary y, secondary x.
impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.x, self.y)
    }
}

impl FromStr for Coordinate {
    type Err = DomainError;

    fn from_str(key: &str) -> Result<Self> {
        let (x, y) = key
            .split_once(':')
            .ok_or_else(|| DomainError::invalid_value(format!("malformed coordinate key '{key}'")))?;
        let parse = |part: &str| {
            part.parse::<i64>()
                .map_err(|_| DomainError::invalid_value(format!("malformed coordinate key '{key}'")))
        };
        Self::try_new(parse(x)?, parse(y)?)
    }
}

/// GridSize is the side length of the square world, always positive.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct GridSize(usize);

impl GridSize {
    pub fn new(cells: usize) -> Result<Self> {
        if cells == 0 {
            return Err(DomainError::invalid_value(
                "value of element 'cells' must be positive number",
            ));
        }
        Ok(Self(cells))
    }

    pub const fn cells(&self) -> usize {
        self.0
    }

    /// Whether the coordinate lies inside the grid
    pub const fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.x < self.0 && coordinate.y < self.0
    }

    /// Every coordinate of the grid in row-major order
    pub fn coordinates(self) -> impl Iterator<Item = Coordinate> {
        let n = self.0;
        (0..n).flat_map(move |y| (0..n).map(move |x| Coordinate::new(x, y)))
    }
}

impl TryFrom<i64> for GridSize {
    type Error = DomainError;

    fn try_from(cells: i64) -> Result<Self> {
        if cells <= 0 {
            return Err(DomainError::invalid_value(
                "value of element 'cells' must be positive number",
            ));
        }
        let cells = usize::try_from(cells)
            .map_err(|_| DomainError::invalid_value("grid size out of range"))?;
        Self::new(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_coordinates_rejected() {
        assert!(matches!(Coordinate::try_new(-1, 0), Err(DomainError::InvalidValue(_))));
        assert!(matches!(Coordinate::try_new(0, -1), Err(DomainError::InvalidValue(_))));
        assert_eq!(Coordinate::try_new(2, 3).unwrap(), Coordinate::new(2, 3));
    }

    #[test]
    fn test_key_round_trip() {
        let c = Coordinate::new(12, 7);
        assert_eq!(c.key(), "12:7");
        assert_eq!(c.key().parse::<Coordinate>().unwrap(), c);
        assert!("12".parse::<Coordinate>().is_err());
        assert!("-1:3".parse::<Coordinate>().is_err());
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut coords = vec![
            Coordinate::new(2, 1),
            Coordinate::new(0, 2),
            Coordinate::new(1, 1),
            Coordinate::new(5, 0),
        ];
        coords.sort();
        assert_eq!(
            coords,
            vec![
                Coordinate::new(5, 0),
                Coordinate::new(1, 1),
                Coordinate::new(2, 1),
                Coordinate::new(0, 2),
            ]
        );
    }

    #[test]
    fn test_offset_stops_at_zero() {
        let origin = Coordinate::new(0, 0);
        assert_eq!(origin.offset(-1, 0), None);
        assert_eq!(origin.offset(1, 1), Some(Coordinate::new(1, 1)));
    }

    #[test]
    fn test_grid_size_must_be_positive() {
        assert!(GridSize::new(0).is_err());
        assert!(GridSize::try_from(-4).is_err());
        assert_eq!(GridSize::try_from(4).unwrap().cells(), 4);
    }

    #[test]
    fn test_grid_coordinates_row_major() {
        let size = GridSize::new(2).unwrap();
        let coords: Vec<_> = size.coordinates().collect();
        assert_eq!(
            coords,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(1, 0),
                Coordinate::new(0, 1),
                Coordinate::new(1, 1),
            ]
        );
        assert!(size.contains(Coordinate::new(1, 1)));
        assert!(!size.contains(Coordinate::new(2, 0)));
    }
}
