use std::collections::{BTreeMap, BTreeSet};

use super::{Coordinate, GridSize, SpeciesId, World};

/// Trait for multi-species evolution rules.
/// Keeps topology and thresholds swappable without touching EvolutionService.
pub trait EvolutionRule: Send + Sync {
    /// Valid neighbor coordinates of a cell on a grid of the given size
    fn neighbors(&self, coordinate: Coordinate, size: GridSize) -> Box<dyn Iterator<Item = Coordinate>>;

    /// Species the cell will have next generation, None if it will be dead
    fn will_be_alive(&self, world: &World, coordinate: Coordinate) -> Option<SpeciesId>;
}

/// Moore neighborhood offsets, center excluded
static MOORE: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Species held by most neighbors. Ties go to the lowest species id.
fn majority(tally: &BTreeMap<SpeciesId, u8>) -> Option<SpeciesId> {
    tally
        .iter()
        .max_by(|(a_id, a_count), (b_id, b_count)| a_count.cmp(b_count).then(b_id.cmp(a_id)))
        .map(|(species, _)| *species)
}

/// B3/S23 with majority species, shared by every topology:
/// 1. Live cell with 2-3 live neighbors survives, taking the majority species
/// 2. Dead cell with exactly 3 live neighbors is born with the majority species
/// 3. All other cases result in death
fn evolve_b3s23(
    world: &World,
    coordinate: Coordinate,
    neighbors: impl Iterator<Item = Coordinate>,
) -> Option<SpeciesId> {
    let mut alive = 0u8;
    let mut tally: BTreeMap<SpeciesId, u8> = BTreeMap::new();

    for species in neighbors.filter_map(|n| world.species_at(n)) {
        alive += 1;
        *tally.entry(species).or_insert(0) += 1;
    }

    match (world.species_at(coordinate), alive) {
        (Some(current), 2 | 3) => Some(majority(&tally).unwrap_or(current)),
        (None, 3) => Some(majority(&tally).unwrap_or_default()),
        _ => None,
    }
}

/// Conway's Game of Life (B3/S23) on a bounded grid, multi-species.
/// Neighbors past the edge are simply missing, there is no wraparound.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayMultiSpeciesRule;

impl EvolutionRule for ConwayMultiSpeciesRule {
    fn neighbors(&self, coordinate: Coordinate, size: GridSize) -> Box<dyn Iterator<Item = Coordinate>> {
        Box::new(
            MOORE
                .iter()
                .filter_map(move |&(dx, dy)| coordinate.offset(dx, dy))
                .filter(move |&n| size.contains(n)),
        )
    }

    fn will_be_alive(&self, world: &World, coordinate: Coordinate) -> Option<SpeciesId> {
        evolve_b3s23(world, coordinate, self.neighbors(coordinate, world.size()))
    }
}

/// Same thresholds as ConwayMultiSpeciesRule, but the grid wraps like a torus.
/// On grids smaller than 3 the wrapped offsets collapse, so neighbors are
/// deduplicated and the cell itself is never its own neighbor.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToroidalMultiSpeciesRule;

impl EvolutionRule for ToroidalMultiSpeciesRule {
    fn neighbors(&self, coordinate: Coordinate, size: GridSize) -> Box<dyn Iterator<Item = Coordinate>> {
        let n = size.cells() as isize;
        let wrapped: BTreeSet<Coordinate> = MOORE
            .iter()
            .map(|&(dx, dy)| {
                let x = ((coordinate.x() as isize + dx) % n + n) % n;
                let y = ((coordinate.y() as isize + dy) % n + n) % n;
                Coordinate::new(x as usize, y as usize)
            })
            .filter(|&c| c != coordinate)
            .collect();
        Box::new(wrapped.into_iter())
    }

    fn will_be_alive(&self, world: &World, coordinate: Coordinate) -> Option<SpeciesId> {
        evolve_b3s23(world, coordinate, self.neighbors(coordinate, world.size()))
    }
}

/// Selectable rule variants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RuleKind {
    /// Bounded grid, B3/S23
    #[default]
    Conway,
    /// Wrapping grid, B3/S23
    Toroidal,
}

impl RuleKind {
    pub fn build(self) -> Box<dyn EvolutionRule> {
        match self {
            RuleKind::Conway => Box::new(ConwayMultiSpeciesRule),
            RuleKind::Toroidal => Box::new(ToroidalMultiSpeciesRule),
        }
    }
}

/// Get default rule (bounded multi-species Conway)
pub fn default_rule() -> Box<dyn EvolutionRule> {
    RuleKind::default().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    fn world(n: usize, species: u32, cells: &[(usize, usize, u32)]) -> World {
        World::new(
            GridSize::new(n).unwrap(),
            species,
            cells
                .iter()
                .map(|&(x, y, s)| Cell::alive(Coordinate::new(x, y), SpeciesId::new(s))),
        )
        .unwrap()
    }

    #[test]
    fn test_corner_has_three_neighbors() {
        let rule = ConwayMultiSpeciesRule;
        let size = GridSize::new(5).unwrap();
        let mut corner: Vec<_> = rule.neighbors(Coordinate::new(0, 0), size).collect();
        corner.sort();
        assert_eq!(
            corner,
            vec![Coordinate::new(1, 0), Coordinate::new(0, 1), Coordinate::new(1, 1)]
        );
        assert_eq!(rule.neighbors(Coordinate::new(4, 4), size).count(), 3);
        assert_eq!(rule.neighbors(Coordinate::new(2, 0), size).count(), 5);
        assert_eq!(rule.neighbors(Coordinate::new(2, 2), size).count(), 8);
    }

    #[test]
    fn test_neighbors_restartable() {
        let rule = ConwayMultiSpeciesRule;
        let size = GridSize::new(1).unwrap();
        assert_eq!(rule.neighbors(Coordinate::new(0, 0), size).count(), 0);
        assert_eq!(rule.neighbors(Coordinate::new(0, 0), size).count(), 0);
    }

    #[test]
    fn test_toroidal_neighbors_wrap() {
        let rule = ToroidalMultiSpeciesRule;
        let size = GridSize::new(5).unwrap();
        let corner: BTreeSet<_> = rule.neighbors(Coordinate::new(0, 0), size).collect();
        assert_eq!(corner.len(), 8);
        assert!(corner.contains(&Coordinate::new(4, 4)));
        assert!(corner.contains(&Coordinate::new(4, 0)));

        // Tiny grids collapse to the distinct other cells
        let tiny = GridSize::new(2).unwrap();
        assert_eq!(rule.neighbors(Coordinate::new(0, 0), tiny).count(), 3);
        let single = GridSize::new(1).unwrap();
        assert_eq!(rule.neighbors(Coordinate::new(0, 0), single).count(), 0);
    }

    #[test]
    fn test_underpopulation() {
        let rule = ConwayMultiSpeciesRule;
        let w = world(5, 1, &[(2, 2, 0), (3, 2, 0)]);
        assert_eq!(rule.will_be_alive(&w, Coordinate::new(2, 2)), None);
        let lonely = world(5, 1, &[(2, 2, 0)]);
        assert_eq!(rule.will_be_alive(&lonely, Coordinate::new(2, 2)), None);
    }

    #[test]
    fn test_survival_takes_majority() {
        let rule = ConwayMultiSpeciesRule;
        // center is species 0, both neighbors species 1
        let w = world(5, 2, &[(2, 2, 0), (1, 2, 1), (3, 2, 1)]);
        assert_eq!(rule.will_be_alive(&w, Coordinate::new(2, 2)), Some(SpeciesId::new(1)));
    }

    #[test]
    fn test_overpopulation() {
        let rule = ConwayMultiSpeciesRule;
        let w = world(5, 1, &[(2, 2, 0), (1, 1, 0), (2, 1, 0), (3, 1, 0), (1, 2, 0)]);
        assert_eq!(rule.will_be_alive(&w, Coordinate::new(2, 2)), None);
    }

    #[test]
    fn test_reproduction_majority() {
        let rule = ConwayMultiSpeciesRule;
        let w = world(5, 3, &[(1, 1, 2), (2, 1, 2), (3, 1, 0)]);
        assert_eq!(rule.will_be_alive(&w, Coordinate::new(2, 2)), Some(SpeciesId::new(2)));
        // two neighbors are not enough for a birth
        let w = world(5, 3, &[(1, 1, 2), (2, 1, 2)]);
        assert_eq!(rule.will_be_alive(&w, Coordinate::new(2, 2)), None);
    }

    #[test]
    fn test_tie_goes_to_lowest_species() {
        let rule = ConwayMultiSpeciesRule;
        let w = world(5, 4, &[(1, 1, 3), (2, 1, 1), (3, 1, 2)]);
        assert_eq!(rule.will_be_alive(&w, Coordinate::new(2, 2)), Some(SpeciesId::new(1)));

        let w = world(5, 4, &[(2, 2, 0), (1, 2, 3), (3, 2, 2)]);
        assert_eq!(rule.will_be_alive(&w, Coordinate::new(2, 2)), Some(SpeciesId::new(2)));
    }

    #[test]
    fn test_toroidal_birth_across_edge() {
        let rule = ToroidalMultiSpeciesRule;
        let w = world(5, 1, &[(4, 0, 0), (4, 1, 0), (4, 4, 0)]);
        assert_eq!(rule.will_be_alive(&w, Coordinate::new(0, 0)), Some(SpeciesId::new(0)));
        assert_eq!(
            ConwayMultiSpeciesRule.will_be_alive(&w, Coordinate::new(0, 0)),
            None
        );
    }

    #[test]
    fn test_rule_kind_builds_matching_rule() {
        let size = GridSize::new(5).unwrap();
        let corner = Coordinate::new(0, 0);
        assert_eq!(RuleKind::Conway.build().neighbors(corner, size).count(), 3);
        assert_eq!(RuleKind::Toroidal.build().neighbors(corner, size).count(), 8);
        assert_eq!(default_rule().neighbors(corner, size).count(), 3);
    }
}
