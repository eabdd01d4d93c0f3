use std::fmt;

use super::error::{DomainError, Result};

/// Identifier of a species. Unsigned, so it can never be negative.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct SpeciesId(u32);

impl SpeciesId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for SpeciesId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self> {
        if value < 0 {
            return Err(DomainError::invalid_value(format!(
                "species id must be >= 0, got {value}"
            )));
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| DomainError::invalid_value(format!("species id {value} out of range")))
    }
}

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_species_rejected() {
        assert!(matches!(SpeciesId::try_from(-1), Err(DomainError::InvalidValue(_))));
        assert!(SpeciesId::try_from(i64::MAX).is_err());
        assert_eq!(SpeciesId::try_from(3).unwrap(), SpeciesId::new(3));
    }
}
