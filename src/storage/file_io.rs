//! File reading utilities
//!
//! Reference data files are read-only: nothing in City Budgeter writes back
//! to disk except explicit exports.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::BudgeterError;

/// Supported reference file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

fn open_required(path: &Path) -> Result<BufReader<File>, BudgeterError> {
    if !path.exists() {
        return Err(BudgeterError::Io(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| BudgeterError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    Ok(BufReader::new(file))
}

/// Read JSON from a file, returning an error if file doesn't exist
pub fn read_json_required<T, P>(path: P) -> Result<T, BudgeterError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let reader = open_required(path)?;

    serde_json::from_reader(reader)
        .map_err(|e| BudgeterError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Read YAML from a file, returning an error if file doesn't exist
pub fn read_yaml_required<T, P>(path: P) -> Result<T, BudgeterError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let reader = open_required(path)?;

    serde_yaml::from_reader(reader)
        .map_err(|e| BudgeterError::Yaml(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Read a JSON or YAML file, choosing the parser by extension
pub fn read_structured<T, P>(path: P) -> Result<T, BudgeterError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    match FileFormat::from_path(path) {
        Some(FileFormat::Json) => read_json_required(path),
        Some(FileFormat::Yaml) => read_yaml_required(path),
        None => Err(BudgeterError::Config(format!(
            "Unsupported file type for {} (expected .json, .yaml or .yml)",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestData {
        value: i32,
        name: String,
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(FileFormat::from_path(Path::new("a.json")), Some(FileFormat::Json));
        assert_eq!(FileFormat::from_path(Path::new("a.YML")), Some(FileFormat::Yaml));
        assert_eq!(FileFormat::from_path(Path::new("a.toml")), None);
        assert_eq!(FileFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_read_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");
        std::fs::write(&path, r#"{"value": 42, "name": "test"}"#).unwrap();

        let read: TestData = read_structured(&path).unwrap();
        assert_eq!(read.value, 42);
        assert_eq!(read.name, "test");
    }

    #[test]
    fn test_read_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.yaml");
        std::fs::write(&path, "value: 7\nname: seven\n").unwrap();

        let read: TestData = read_structured(&path).unwrap();
        assert_eq!(read, TestData { value: 7, name: "seven".into() });
    }

    #[test]
    fn test_missing_file() {
        let path = PathBuf::from("/nonexistent/cities.json");
        let result: Result<TestData, _> = read_json_required(&path);
        assert!(matches!(result, Err(BudgeterError::Io(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cities.toml");
        std::fs::write(&path, "value = 1").unwrap();

        let result: Result<TestData, _> = read_structured(&path);
        assert!(matches!(result, Err(BudgeterError::Config(_))));
    }

    #[test]
    fn test_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result: Result<TestData, _> = read_structured(&path);
        assert!(matches!(result, Err(BudgeterError::Json(_))));
    }
}
