//! Budget input model
//!
//! Holds what the student enters: income, a savings goal and the number of
//! months to save for it. A fresh `BudgetInput` is built for every evaluation.

use std::fmt;

use super::money::Money;

/// Preset savings goals offered by the input form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoalPreset {
    Bike,
    Smartphone,
    Laptop,
    TripToSpain,
    Car,
}

impl GoalPreset {
    /// All presets in the order the form lists them
    pub const ALL: [GoalPreset; 5] = [
        Self::Bike,
        Self::Smartphone,
        Self::Laptop,
        Self::TripToSpain,
        Self::Car,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bike => "Bike",
            Self::Smartphone => "Smartphone",
            Self::Laptop => "Laptop",
            Self::TripToSpain => "Trip to Spain",
            Self::Car => "Car",
        }
    }

    pub fn amount(&self) -> Money {
        match self {
            Self::Bike => Money::from_euros(400),
            Self::Smartphone => Money::from_euros(800),
            Self::Laptop => Money::from_euros(1200),
            Self::TripToSpain => Money::from_euros(600),
            Self::Car => Money::from_euros(5000),
        }
    }

    /// Parse a preset from its display name or a dashed/underscored form
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c })
            .collect();

        match normalized.as_str() {
            "bike" => Some(Self::Bike),
            "smartphone" | "phone" => Some(Self::Smartphone),
            "laptop" => Some(Self::Laptop),
            "trip to spain" | "spain" => Some(Self::TripToSpain),
            "car" => Some(Self::Car),
            _ => None,
        }
    }

    pub fn goal(&self) -> SavingsGoal {
        SavingsGoal {
            name: self.name().to_string(),
            amount: self.amount(),
        }
    }
}

impl fmt::Display for GoalPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A named savings goal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsGoal {
    pub name: String,
    pub amount: Money,
}

impl SavingsGoal {
    /// Name used when a custom goal is left unnamed
    pub const DEFAULT_CUSTOM_NAME: &'static str = "My Goal";

    /// Amount suggested for a new custom goal
    pub const DEFAULT_CUSTOM_AMOUNT: Money = Money::from_euros(300);

    pub fn custom(name: impl Into<String>, amount: Money) -> Self {
        let name = name.into();
        let name = if name.trim().is_empty() {
            Self::DEFAULT_CUSTOM_NAME.to_string()
        } else {
            name
        };
        Self { name, amount }
    }
}

impl From<GoalPreset> for SavingsGoal {
    fn from(preset: GoalPreset) -> Self {
        preset.goal()
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.amount)
    }
}

/// Everything needed to evaluate a city
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetInput {
    /// Monthly base budget
    pub base_income: Money,
    /// Additional monthly income (side job, family support)
    pub extra_income: Money,
    /// The goal being saved for
    pub goal: SavingsGoal,
    /// Savings horizon in months
    pub goal_months: u32,
}

impl BudgetInput {
    pub fn new(
        base_income: Money,
        extra_income: Money,
        goal: impl Into<SavingsGoal>,
        goal_months: u32,
    ) -> Self {
        Self {
            base_income,
            extra_income,
            goal: goal.into(),
            goal_months,
        }
    }

    /// Total monthly income (base + extra)
    pub fn total_income(&self) -> Money {
        self.base_income.saturating_add(self.extra_income)
    }

    pub fn validate(&self) -> Result<(), InputValidationError> {
        if self.base_income.is_negative() {
            return Err(InputValidationError::NegativeAmount("base income"));
        }

        if self.extra_income.is_negative() {
            return Err(InputValidationError::NegativeAmount("extra income"));
        }

        if self.goal.amount.is_negative() {
            return Err(InputValidationError::NegativeAmount("goal amount"));
        }

        if self.goal_months == 0 {
            return Err(InputValidationError::ZeroMonths);
        }

        Ok(())
    }
}

impl Default for BudgetInput {
    /// The values the input form starts with
    fn default() -> Self {
        Self::new(
            Money::from_euros(InputLimits::STUDENT_VISA_MONTHLY_MINIMUM),
            Money::zero(),
            GoalPreset::Bike,
            3,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputValidationError {
    NegativeAmount(&'static str),
    ZeroMonths,
}

impl fmt::Display for InputValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(field) => write!(f, "{} cannot be negative", field),
            Self::ZeroMonths => write!(f, "goal months must be at least 1"),
        }
    }
}

impl std::error::Error for InputValidationError {}

/// Inclusive bounds and step size for one form control, in whole euros or months
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
    pub step: i64,
}

impl Bounds {
    pub const fn new(min: i64, max: i64, step: i64) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Move `value` by `steps` increments, staying within bounds
    pub fn nudge(&self, value: i64, steps: i64) -> i64 {
        value
            .saturating_add(steps.saturating_mul(self.step))
            .clamp(self.min, self.max)
    }

    /// Render the bounds as an interval, e.g. "[700, 3000]"
    pub fn describe(&self) -> String {
        if self.max == i64::MAX {
            format!("[{}, ∞)", self.min)
        } else {
            format!("[{}, {}]", self.min, self.max)
        }
    }
}

/// Ranges the input form constrains values to
pub struct InputLimits;

impl InputLimits {
    /// Minimum funds for a German student visa: 11,904 € per year
    pub const STUDENT_VISA_YEARLY_MINIMUM: i64 = 11_904;
    pub const STUDENT_VISA_MONTHLY_MINIMUM: i64 = 992;

    pub const INCOME: Bounds = Bounds::new(700, 3000, 50);
    pub const EXTRA_INCOME: Bounds = Bounds::new(0, 1500, 50);
    pub const CUSTOM_GOAL_AMOUNT: Bounds = Bounds::new(0, i64::MAX, 50);
    pub const GOAL_MONTHS: Bounds = Bounds::new(1, 24, 1);
}
