//! City cost model
//!
//! A city's monthly cost of living for a student, broken down into rent,
//! food and transport.

use std::fmt;

use super::money::Money;

/// Monthly living costs for one city
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityCost {
    /// City name, unique within a table
    pub name: String,
    /// Monthly rent
    pub rent: Money,
    /// Monthly food costs
    pub food: Money,
    /// Monthly transport costs
    pub transport: Money,
}

/// Compare city names the way tables and selections do: trimmed, case-insensitive
pub fn same_city_name(a: &str, b: &str) -> bool {
    city_name_key(a) == city_name_key(b)
}

/// Normalized form of a city name used for duplicate detection
pub fn city_name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl CityCost {
    /// Largest accepted monthly amount for a single cost field
    pub const MAX_MONTHLY_COST: Money = Money::from_euros(1_000_000_000);

    /// Create a city from whole-euro costs
    pub fn new(name: impl Into<String>, rent: i64, food: i64, transport: i64) -> Self {
        Self {
            name: name.into(),
            rent: Money::from_euros(rent),
            food: Money::from_euros(food),
            transport: Money::from_euros(transport),
        }
    }

    /// Total monthly expenses (rent + food + transport)
    pub fn total_expenses(&self) -> Money {
        self.rent.saturating_add(self.food).saturating_add(self.transport)
    }

    pub fn validate(&self) -> Result<(), CityValidationError> {
        if self.name.trim().is_empty() {
            return Err(CityValidationError::EmptyName);
        }

        for (field, amount) in [
            ("rent", self.rent),
            ("food", self.food),
            ("transport", self.transport),
        ] {
            if amount.is_negative() {
                return Err(CityValidationError::NegativeCost {
                    city: self.name.clone(),
                    field,
                });
            }
            if amount > Self::MAX_MONTHLY_COST {
                return Err(CityValidationError::CostTooLarge {
                    city: self.name.clone(),
                    field,
                });
            }
        }

        Ok(())
    }
}

impl fmt::Display for CityCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/month)", self.name, self.total_expenses())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CityValidationError {
    EmptyName,
    NegativeCost { city: String, field: &'static str },
    CostTooLarge { city: String, field: &'static str },
}

impl fmt::Display for CityValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "City name cannot be empty"),
            Self::NegativeCost { city, field } => {
                write!(f, "{} cost for {} cannot be negative", field, city)
            }
            Self::CostTooLarge { city, field } => write!(
                f,
                "{} cost for {} exceeds {} per month",
                field,
                city,
                CityCost::MAX_MONTHLY_COST
            ),
        }
    }
}

impl std::error::Error for CityValidationError {}
