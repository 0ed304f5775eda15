//! Application state for the TUI
//!
//! The App struct holds the budget form, the city selection and the latest
//! comparison. Every change to an input re-runs the comparison.

use crate::config::Settings;
use crate::models::{BudgetInput, GoalPreset, InputLimits, Money, SavingsGoal};
use crate::services::{Comparison, ComparisonService, Selection, MAX_SELECTED_CITIES};
use crate::storage::CityTable;

/// Which form field currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Income,
    ExtraIncome,
    Goal,
    CustomName,
    CustomAmount,
    Months,
    Cities,
}

impl Field {
    const ORDER: [Field; 7] = [
        Field::Income,
        Field::ExtraIncome,
        Field::Goal,
        Field::CustomName,
        Field::CustomAmount,
        Field::Months,
        Field::Cities,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Monthly budget",
            Self::ExtraIncome => "Additional income",
            Self::Goal => "Savings goal",
            Self::CustomName => "Goal name",
            Self::CustomAmount => "Goal amount",
            Self::Months => "Months to save",
            Self::Cities => "Cities",
        }
    }

    fn is_custom_only(&self) -> bool {
        matches!(self, Self::CustomName | Self::CustomAmount)
    }
}

/// Largest custom goal amount that can be typed into the form, in euros
pub const MAX_TYPED_AMOUNT: i64 = 999_999_999;

/// A preset goal or the custom one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalChoice {
    Preset(GoalPreset),
    Custom,
}

impl GoalChoice {
    fn options() -> Vec<GoalChoice> {
        GoalPreset::ALL
            .iter()
            .copied()
            .map(GoalChoice::Preset)
            .chain(std::iter::once(GoalChoice::Custom))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Preset(preset) => preset.name(),
            Self::Custom => "Custom",
        }
    }
}

/// Main application state
pub struct App<'a> {
    /// City reference data
    pub table: &'a CityTable,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Focused form field
    pub focus: Field,

    /// Monthly budget in euros
    pub income: i64,

    /// Additional income in euros
    pub extra_income: i64,

    pub goal: GoalChoice,

    pub custom_name: String,

    /// Custom goal amount in euros
    pub custom_amount: i64,

    pub months: u32,

    /// Cursor in the city list
    pub city_cursor: usize,

    /// Cities chosen for comparison
    pub selection: Selection,

    /// Result of the last evaluation
    pub comparison: Comparison,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance seeded from settings
    pub fn new(table: &'a CityTable, settings: &'a Settings) -> Self {
        let defaults = settings.default_input();

        // Keep only configured cities that exist, up to the selection limit
        let names: Vec<&str> = settings
            .default_cities
            .iter()
            .map(String::as_str)
            .filter(|name| table.contains(name))
            .take(MAX_SELECTED_CITIES)
            .collect();
        let selection = Selection::new(names).unwrap_or_default();

        let mut app = Self {
            table,
            settings,
            should_quit: false,
            focus: Field::default(),
            income: defaults.base_income.euros(),
            extra_income: defaults.extra_income.euros(),
            goal: GoalChoice::Preset(settings.goal_preset()),
            custom_name: SavingsGoal::DEFAULT_CUSTOM_NAME.to_string(),
            custom_amount: SavingsGoal::DEFAULT_CUSTOM_AMOUNT.euros(),
            months: defaults.goal_months,
            city_cursor: 0,
            selection,
            comparison: Comparison::NoSelection,
            status_message: None,
        };
        app.recompute();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// The budget input described by the form
    pub fn input(&self) -> BudgetInput {
        let goal = match self.goal {
            GoalChoice::Preset(preset) => preset.goal(),
            GoalChoice::Custom => {
                SavingsGoal::custom(self.custom_name.clone(), Money::from_euros(self.custom_amount))
            }
        };
        BudgetInput::new(
            Money::from_euros(self.income),
            Money::from_euros(self.extra_income),
            goal,
            self.months,
        )
    }

    /// Re-evaluate every selected city against the current form
    pub fn recompute(&mut self) {
        let input = self.input();
        self.comparison = ComparisonService::new(self.table).compare(&self.selection, &input);
    }

    /// Fields shown for the current goal choice
    pub fn visible_fields(&self) -> Vec<Field> {
        Field::ORDER
            .iter()
            .copied()
            .filter(|field| self.goal == GoalChoice::Custom || !field.is_custom_only())
            .collect()
    }

    /// Move focus forwards (positive) or backwards (negative)
    pub fn move_focus(&mut self, delta: isize) {
        let fields = self.visible_fields();
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        let len = fields.len() as isize;
        let next = (current as isize + delta).rem_euclid(len) as usize;
        self.focus = fields[next];
    }

    /// Step the focused field by a number of slider steps
    pub fn adjust(&mut self, steps: i64) {
        match self.focus {
            Field::Income => self.income = InputLimits::INCOME.nudge(self.income, steps),
            Field::ExtraIncome => {
                self.extra_income = InputLimits::EXTRA_INCOME.nudge(self.extra_income, steps)
            }
            Field::Goal => self.cycle_goal(steps),
            Field::CustomName => return,
            Field::CustomAmount => {
                self.custom_amount = InputLimits::CUSTOM_GOAL_AMOUNT.nudge(self.custom_amount, steps)
            }
            Field::Months => {
                self.months = InputLimits::GOAL_MONTHS.nudge(i64::from(self.months), steps) as u32
            }
            Field::Cities => return,
        }
        self.recompute();
    }

    fn cycle_goal(&mut self, steps: i64) {
        let options = GoalChoice::options();
        let current = options.iter().position(|g| *g == self.goal).unwrap_or(0) as i64;
        let next = (current + steps).rem_euclid(options.len() as i64) as usize;
        self.goal = options[next];
    }

    /// Type a character into the custom goal name
    pub fn push_name_char(&mut self, c: char) {
        self.custom_name.push(c);
        self.recompute();
    }

    /// Delete the last character of the custom goal name
    pub fn pop_name_char(&mut self) {
        self.custom_name.pop();
        self.recompute();
    }

    /// Append a typed digit to the custom goal amount
    pub fn push_amount_digit(&mut self, digit: u32) {
        let next = self
            .custom_amount
            .checked_mul(10)
            .and_then(|amount| amount.checked_add(i64::from(digit)))
            .filter(|amount| digit < 10 && *amount <= MAX_TYPED_AMOUNT);

        match next {
            Some(amount) => {
                self.custom_amount = amount;
                self.status_message = None;
                self.recompute();
            }
            None => self.set_status(format!(
                "Goal amount can be at most {}",
                Money::from_euros(MAX_TYPED_AMOUNT)
            )),
        }
    }

    /// Delete the last digit of the custom goal amount
    pub fn pop_amount_digit(&mut self) {
        self.custom_amount /= 10;
        self.recompute();
    }

    /// Move the city list cursor
    pub fn move_cursor(&mut self, delta: isize) {
        if self.table.is_empty() {
            return;
        }
        let len = self.table.len() as isize;
        self.city_cursor = (self.city_cursor as isize + delta).rem_euclid(len) as usize;
    }

    /// Select or deselect the city under the cursor
    pub fn toggle_city(&mut self) {
        let Some(city) = self.table.iter().nth(self.city_cursor) else {
            return;
        };
        let name = city.name.clone();

        if self.selection.toggle(&name) {
            self.status_message = None;
        } else {
            self.set_status(format!(
                "You can compare up to {} cities",
                MAX_SELECTED_CITIES
            ));
        }
        self.recompute();
    }
}
