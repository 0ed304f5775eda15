//! Reference data layer for City Budgeter
//!
//! Provides the city cost table and read-only JSON/YAML file loading.

pub mod cities;
pub mod file_io;

pub use cities::CityTable;
pub use file_io::{read_json_required, read_structured, read_yaml_required, FileFormat};
