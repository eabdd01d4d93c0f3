// XML adapters for the application ports
mod xml_reader;
mod xml_writer;

pub use xml_reader::{ConflictPolicy, XmlInputReader};
pub use xml_writer::XmlOutputWriter;
