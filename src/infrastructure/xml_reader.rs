//! Reads a simulation from the `<life>` XML document.
//!
//! ```xml
//! <life>
//!     <world>
//!         <cells>3</cells>
//!         <species>1</species>
//!         <iterations>2</iterations>
//!     </world>
//!     <organisms>
//!         <organism><x_pos>1</x_pos><y_pos>0</y_pos><species>0</species></organism>
//!     </organisms>
//! </life>
//! ```

use std::collections::HashMap;
use std::path::Path;

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::{InputError, InputReader, SimulationConfig};
use crate::domain::{Cell, Coordinate, DomainError, GridSize, SpeciesId, World};

#[derive(Debug, Deserialize)]
struct LifeDocument {
    world: Option<WorldElement>,
    organisms: Option<OrganismsElement>,
}

#[derive(Debug, Deserialize)]
struct WorldElement {
    cells: Option<i64>,
    species: Option<i64>,
    iterations: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct OrganismsElement {
    #[serde(default, rename = "organism")]
    organisms: Vec<OrganismElement>,
}

#[derive(Debug, Deserialize)]
struct OrganismElement {
    x_pos: Option<i64>,
    y_pos: Option<i64>,
    species: Option<i64>,
}

/// How two organisms claiming the same coordinate are merged
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// The organism listed later replaces the earlier one
    #[default]
    LastWins,
    /// Pick between the held and the incoming species with a seeded coin flip
    Random { seed: u64 },
}

/// XmlInputReader validates the document and converts organisms
/// into the initial World.
#[derive(Clone, Copy, Debug, Default)]
pub struct XmlInputReader {
    policy: ConflictPolicy,
}

impl OrganismElement {
    /// (x_pos, y_pos, species), failing on the first absent element
    fn present(&self) -> Result<(i64, i64, i64), InputError> {
        Ok((
            self.x_pos.ok_or_else(|| missing_in_organism("x_pos"))?,
            self.y_pos.ok_or_else(|| missing_in_organism("y_pos"))?,
            self.species.ok_or_else(|| missing_in_organism("species"))?,
        ))
    }
}

fn missing(element: &str) -> InputError {
    InputError::MissingElement(element.to_string())
}

fn missing_in_organism(element: &str) -> InputError {
    InputError::MissingElement(format!("{element}' in some of the element 'organism"))
}

/// Check `value` lies in `[0, bound)`
fn in_range(element: &'static str, value: i64, bound: i64, bound_name: &str) -> Result<i64, InputError> {
    if (0..bound).contains(&value) {
        Ok(value)
    } else {
        Err(InputError::OutOfRange {
            element,
            value,
            bound: format!("{bound_name} ({bound})"),
        })
    }
}

impl XmlInputReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ConflictPolicy) -> Self {
        Self { policy }
    }

    /// Parse an in-memory document
    pub fn parse(&self, xml: &str) -> Result<(SimulationConfig, World), InputError> {
        let document: LifeDocument =
            quick_xml::de::from_str(xml).map_err(|e| InputError::Malformed(e.to_string()))?;

        let world = document.world.ok_or_else(|| missing("world"))?;
        let iterations = world.iterations.ok_or_else(|| missing("iterations"))?;
        let cells = world.cells.ok_or_else(|| missing("cells"))?;
        let species = world.species.ok_or_else(|| missing("species"))?;
        let organisms = document.organisms.ok_or_else(|| missing("organisms"))?.organisms;
        // Presence of every element is checked before any value is.
        let organisms = organisms
            .iter()
            .map(OrganismElement::present)
            .collect::<Result<Vec<_>, _>>()?;

        let iterations =
            u64::try_from(iterations).map_err(|_| InputError::NegativeIterations(iterations))?;
        let size = GridSize::try_from(cells)?;
        let species_count = u32::try_from(species)
            .ok()
            .filter(|&count| count > 0)
            .ok_or_else(|| {
                DomainError::invalid_value("value of element 'species' must be positive number")
            })?;

        let placed = self.place_organisms(&organisms, cells, species)?;
        let world = World::new(
            size,
            species_count,
            placed.into_iter().map(|(c, s)| Cell::alive(c, s)),
        )?;

        debug!(
            size = size.cells(),
            species = species_count,
            population = world.population(),
            "input parsed"
        );
        Ok((SimulationConfig::new(size, iterations), world))
    }

    /// Validate every organism and merge duplicates into one species per coordinate
    fn place_organisms(
        &self,
        organisms: &[(i64, i64, i64)],
        cells: i64,
        species: i64,
    ) -> Result<HashMap<Coordinate, SpeciesId>, InputError> {
        let mut rng = match self.policy {
            ConflictPolicy::Random { seed } => Some(StdRng::seed_from_u64(seed)),
            ConflictPolicy::LastWins => None,
        };

        let mut placed = HashMap::new();
        for &(x, y, s) in organisms {
            let x = in_range("x_pos", x, cells, "number of cells")?;
            let y = in_range("y_pos", y, cells, "number of cells")?;
            let s = in_range("species", s, species, "maximal number of species")?;

            let coordinate = Coordinate::try_new(x, y)?;
            let incoming = SpeciesId::try_from(s)?;

            let resolved = match (placed.get(&coordinate).copied(), rng.as_mut()) {
                (Some(held), Some(rng)) if held != incoming => {
                    let chosen = if rng.random_bool(0.5) { incoming } else { held };
                    warn!(%coordinate, %held, %incoming, %chosen, "conflicting organisms, picked at random");
                    chosen
                }
                (Some(held), None) if held != incoming => {
                    warn!(%coordinate, %held, %incoming, "conflicting organisms, keeping the later one");
                    incoming
                }
                _ => incoming,
            };
            placed.insert(coordinate, resolved);
        }
        Ok(placed)
    }
}

impl InputReader for XmlInputReader {
    fn read(&self, path: &Path) -> Result<(SimulationConfig, World), InputError> {
        if !path.exists() {
            return Err(InputError::Missing(path.to_path_buf()));
        }
        let xml = std::fs::read_to_string(path)?;
        self.parse(&xml)
    }
}
