//! City reference table
//!
//! The immutable table of monthly living costs. It is built once at startup,
//! either from the built-in German cities or from a JSON/YAML file, and only
//! read afterwards.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BudgeterError, BudgeterResult};
use crate::models::{city_name_key, same_city_name, CityCost, Money};

use super::file_io::read_structured;

/// Built-in cities: (name, rent, food, transport) in euros per month
const BUILTIN_CITIES: [(&str, i64, i64, i64); 15] = [
    ("Berlin", 1000, 300, 80),
    ("Munich", 1300, 320, 90),
    ("Frankfurt", 1100, 310, 85),
    ("Hamburg", 1150, 290, 85),
    ("Cologne", 950, 280, 80),
    ("Leipzig", 750, 270, 70),
    ("Stuttgart", 1200, 310, 90),
    ("Heidelberg", 850, 270, 75),
    ("Mainz", 800, 260, 70),
    ("Freiburg", 900, 275, 75),
    ("Gießen", 700, 250, 65),
    ("Mannheim", 850, 265, 75),
    ("Bonn", 800, 260, 70),
    ("Dresden", 750, 255, 65),
    ("Erlangen", 770, 250, 60),
];

/// A city as written in a reference file, with costs in euros
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CityRecord {
    name: String,
    rent: f64,
    food: f64,
    transport: f64,
}

impl TryFrom<CityRecord> for CityCost {
    type Error = BudgeterError;

    fn try_from(record: CityRecord) -> BudgeterResult<Self> {
        let amount = |field: &str, euros: f64| {
            Money::try_from_euros_f64(euros).ok_or_else(|| {
                BudgeterError::InvalidInput(format!(
                    "{} cost for {} is not a valid amount: {}",
                    field, record.name, euros
                ))
            })
        };

        Ok(Self {
            rent: amount("rent", record.rent)?,
            food: amount("food", record.food)?,
            transport: amount("transport", record.transport)?,
            name: record.name,
        })
    }
}

/// Serializable reference file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CityData {
    cities: Vec<CityRecord>,
}

/// Read-only lookup of city costs, in table order
#[derive(Debug, Clone)]
pub struct CityTable {
    cities: Vec<CityCost>,
}

impl CityTable {
    /// The built-in table of 15 German cities
    pub fn builtin() -> Self {
        let cities = BUILTIN_CITIES
            .iter()
            .map(|(name, rent, food, transport)| CityCost::new(*name, *rent, *food, *transport))
            .collect();
        Self { cities }
    }

    /// Build a table from a list of cities, rejecting negative costs and
    /// duplicate names
    pub fn from_cities(cities: Vec<CityCost>) -> BudgeterResult<Self> {
        if cities.is_empty() {
            return Err(BudgeterError::Config(
                "City table must contain at least one city".into(),
            ));
        }

        let mut seen = HashSet::new();
        for city in &cities {
            city.validate()
                .map_err(|e| BudgeterError::InvalidInput(e.to_string()))?;

            if !seen.insert(city_name_key(&city.name)) {
                return Err(BudgeterError::duplicate_city(&city.name));
            }
        }

        Ok(Self { cities })
    }

    /// Load a table from a `.json`, `.yaml` or `.yml` file
    ///
    /// The file holds a `cities` list whose entries have `name`, `rent`,
    /// `food` and `transport` fields in euros.
    pub fn load(path: impl AsRef<Path>) -> BudgeterResult<Self> {
        let path = path.as_ref();
        let data: CityData = read_structured(path)?;
        let cities = data
            .cities
            .into_iter()
            .map(CityCost::try_from)
            .collect::<BudgeterResult<Vec<_>>>()?;
        let table = Self::from_cities(cities)?;

        tracing::info!(
            path = %path.display(),
            cities = table.len(),
            "Loaded city reference table"
        );

        Ok(table)
    }

    /// Use the file at `path` when given, otherwise the built-in table
    pub fn load_or_builtin(path: Option<&Path>) -> BudgeterResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Look up a city by name
    ///
    /// Exact matches win; otherwise the first case-insensitive match is used.
    pub fn get(&self, name: &str) -> BudgeterResult<&CityCost> {
        let name = name.trim();
        self.cities
            .iter()
            .find(|c| c.name == name)
            .or_else(|| {
                self.cities
                    .iter()
                    .find(|c| same_city_name(&c.name, name))
            })
            .ok_or_else(|| BudgeterError::UnknownCity(name.to_string()))
    }

    /// Check whether a city is in the table
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    /// City names in table order
    pub fn names(&self) -> Vec<&str> {
        self.cities.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CityCost> {
        self.cities.iter()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl Default for CityTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_table() {
        let table = CityTable::builtin();
        assert_eq!(table.len(), 15);
        assert_eq!(table.names()[0], "Berlin");
        assert_eq!(table.names()[14], "Erlangen");

        // Names are unique
        let unique: HashSet<_> = table.names().into_iter().collect();
        assert_eq!(unique.len(), 15);
    }

    #[test]
    fn test_builtin_costs() {
        let table = CityTable::builtin();
        let berlin = table.get("Berlin").unwrap();
        assert_eq!(berlin.total_expenses(), Money::from_euros(1380));

        let giessen = table.get("Gießen").unwrap();
        assert_eq!(giessen.rent, Money::from_euros(700));
        assert_eq!(giessen.transport, Money::from_euros(65));
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let table = CityTable::builtin();
        assert_eq!(table.get("leipzig").unwrap().name, "Leipzig");
        assert_eq!(table.get(" MUNICH ").unwrap().name, "Munich");
    }

    #[test]
    fn test_unknown_city() {
        let table = CityTable::builtin();
        let err = table.get("Atlantis").unwrap_err();
        assert!(err.is_unknown_city());
        assert!(!table.contains("Atlantis"));
    }

    #[test]
    fn test_from_cities_rejects_duplicates() {
        let result = CityTable::from_cities(vec![
            CityCost::new("Bonn", 800, 260, 70),
            CityCost::new("bonn", 810, 260, 70),
        ]);
        assert!(matches!(result, Err(BudgeterError::Duplicate { .. })));
    }

    #[test]
    fn test_from_cities_rejects_negative_costs() {
        let result = CityTable::from_cities(vec![CityCost::new("Bonn", -800, 260, 70)]);
        assert!(result.unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_from_cities_rejects_empty() {
        assert!(CityTable::from_cities(Vec::new()).is_err());
    }

    #[test]
    fn test_load_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cities.json");
        std::fs::write(
            &path,
            r#"{"cities": [
                {"name": "Vienna", "rent": 700, "food": 280.5, "transport": 40},
                {"name": "Graz", "rent": 550, "food": 260, "transport": 30}
            ]}"#,
        )
        .unwrap();

        let table = CityTable::load(&path).unwrap();
        assert_eq!(table.names(), vec!["Vienna", "Graz"]);
        assert_eq!(
            table.get("Vienna").unwrap().total_expenses(),
            Money::from_cents(102_050)
        );
    }

    #[test]
    fn test_load_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cities.yaml");
        std::fs::write(
            &path,
            "cities:\n  - name: Linz\n    rent: 500\n    food: 250\n    transport: 35\n",
        )
        .unwrap();

        let table = CityTable::load(&path).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("Linz").unwrap().total_expenses(), Money::from_euros(785));
    }

    #[test]
    fn test_load_rejects_huge_costs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cities.json");
        std::fs::write(
            &path,
            r#"{"cities":[{"name":"Rich","rent":1e300,"food":1e300,"transport":0}]}"#,
        )
        .unwrap();

        let err = CityTable::load(&path).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("rent cost for Rich"));
    }

    #[test]
    fn test_load_rejects_costs_above_limit() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cities.json");
        // Representable in cents, but above the per-field limit
        std::fs::write(
            &path,
            r#"{"cities":[{"name":"Rich","rent":5e16,"food":5e16,"transport":0}]}"#,
        )
        .unwrap();

        let err = CityTable::load(&path).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn test_load_rejects_non_finite_costs() {
        let temp_dir = TempDir::new().unwrap();

        for value in [".nan", ".inf", "-.inf"] {
            let path = temp_dir.path().join("cities.yaml");
            std::fs::write(
                &path,
                format!(
                    "cities:\n  - name: Linz\n    rent: 500\n    food: {}\n    transport: 35\n",
                    value
                ),
            )
            .unwrap();

            let err = CityTable::load(&path).unwrap_err();
            assert!(err.is_invalid_input(), "{} should be rejected", value);
            assert!(err.to_string().contains("food cost for Linz"));
        }
    }

    #[test]
    fn test_non_ascii_names_match_case_insensitively() {
        let table = CityTable::from_cities(vec![
            CityCost::new("Überlingen", 650, 250, 60),
            CityCost::new("Gießen", 700, 250, 65),
        ])
        .unwrap();

        assert_eq!(table.get("überlingen").unwrap().name, "Überlingen");
        assert_eq!(table.get("ÜBERLINGEN").unwrap().name, "Überlingen");

        let result = CityTable::from_cities(vec![
            CityCost::new("Überlingen", 650, 250, 60),
            CityCost::new("überlingen", 650, 250, 60),
        ]);
        assert!(matches!(result, Err(BudgeterError::Duplicate { .. })));
    }

    #[test]
    fn test_load_or_builtin() {
        let table = CityTable::load_or_builtin(None).unwrap();
        assert_eq!(table.len(), 15);
    }
}
