use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::application::{OutputError, OutputWriter};
use crate::domain::World;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

#[derive(Debug, Serialize)]
#[serde(rename = "life")]
struct LifeOutput {
    world: WorldOutput,
    organisms: OrganismsOutput,
}

#[derive(Debug, Serialize)]
struct WorldOutput {
    cells: usize,
    species: u32,
}

#[derive(Debug, Serialize)]
struct OrganismsOutput {
    organism: Vec<OrganismOutput>,
}

#[derive(Debug, Serialize)]
struct OrganismOutput {
    x_pos: usize,
    y_pos: usize,
    species: u32,
}

impl From<&World> for LifeOutput {
    fn from(world: &World) -> Self {
        let organism = world
            .sorted_alive_cells()
            .into_iter()
            .map(|cell| OrganismOutput {
                x_pos: cell.coordinate().x(),
                y_pos: cell.coordinate().y(),
                species: cell.species().map(|s| s.value()).unwrap_or_default(),
            })
            .collect();

        Self {
            world: WorldOutput {
                cells: world.size().cells(),
                species: world.species_count(),
            },
            organisms: OrganismsOutput { organism },
        }
    }
}

/// XmlOutputWriter writes the final generation as a `<life>` document,
/// organisms sorted by (y, x), indented by four spaces.
#[derive(Clone, Copy, Debug, Default)]
pub struct XmlOutputWriter;

impl XmlOutputWriter {
    pub fn new() -> Self {
        Self
    }

    /// Render a single world to XML text
    pub fn render(&self, world: &World) -> Result<String, OutputError> {
        let mut xml = String::from(XML_DECLARATION);
        let mut serializer = quick_xml::se::Serializer::new(&mut xml);
        serializer.indent(' ', 4);
        LifeOutput::from(world)
            .serialize(serializer)
            .map_err(|e| OutputError::Serialize(e.to_string()))?;
        xml.push('\n');
        Ok(xml)
    }
}

impl OutputWriter for XmlOutputWriter {
    fn write(&self, path: &Path, generations: &[World]) -> Result<(), OutputError> {
        let last = generations.last().ok_or(OutputError::NoGenerations)?;
        let xml = self.render(last)?;
        std::fs::write(path, xml)?;
        debug!(path = %path.display(), population = last.population(), "output written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, Coordinate, GridSize, SpeciesId};

    fn world() -> World {
        World::new(
            GridSize::new(4).unwrap(),
            3,
            vec![
                Cell::alive(Coordinate::new(3, 2), SpeciesId::new(2)),
                Cell::alive(Coordinate::new(0, 3), SpeciesId::new(0)),
                Cell::alive(Coordinate::new(2, 0), SpeciesId::new(1)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_render_metadata() {
        let xml = XmlOutputWriter::new().render(&world()).unwrap();
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<life>"));
        assert!(xml.contains("<cells>4</cells>"));
        assert!(xml.contains("<species>3</species>"));
        assert_eq!(xml.matches("<organism>").count(), 3);
    }

    #[test]
    fn test_render_sorted_by_row_then_column() {
        let xml = XmlOutputWriter::new().render(&world()).unwrap();
        let first = xml.find("<y_pos>0</y_pos>").unwrap();
        let second = xml.find("<y_pos>2</y_pos>").unwrap();
        let third = xml.find("<y_pos>3</y_pos>").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_write_requires_generations() {
        let dir = tempfile::tempdir().unwrap();
        let err = XmlOutputWriter::new()
            .write(&dir.path().join("out.xml"), &[])
            .unwrap_err();
        assert!(matches!(err, OutputError::NoGenerations));
    }

    #[test]
    fn test_write_uses_last_generation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xml");
        let empty = World::empty(GridSize::new(4).unwrap(), 3).unwrap();

        XmlOutputWriter::new().write(&path, &[world(), empty]).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("<organism>"));
        assert!(written.contains("<cells>4</cells>"));
    }
}
