//! Evaluation result model
//!
//! The affordability verdict for one city under one `BudgetInput`. Results are
//! derived values: they are created per evaluation and never stored.

use std::fmt;

use super::money::Money;

/// Advice shown alongside a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advice {
    /// Projected savings cover the goal
    GoalAchievable,
    /// The student needs this much more income each month
    EarnMore { extra_per_month: Money },
}

impl Advice {
    pub fn is_achievable(&self) -> bool {
        matches!(self, Self::GoalAchievable)
    }

    /// Extra monthly income needed, zero when the goal is already achievable
    pub fn extra_per_month(&self) -> Money {
        match self {
            Self::GoalAchievable => Money::zero(),
            Self::EarnMore { extra_per_month } => *extra_per_month,
        }
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GoalAchievable => write!(f, "Goal achievable with your current budget"),
            Self::EarnMore { extra_per_month } => write!(
                f,
                "Earn at least {} more per month to reach the goal",
                extra_per_month
            ),
        }
    }
}

/// Affordability of one city for one budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    pub city: String,
    /// rent + food + transport
    pub total_expenses: Money,
    /// Monthly income minus expenses; negative when the city is unaffordable
    pub leftover: Money,
    /// Leftover accumulated over the goal horizon, never below zero
    pub projected_savings: Money,
    pub goal_reached: bool,
    pub advice: Advice,
}

impl EvaluationResult {
    /// Whether income covers the monthly expenses on its own
    pub fn is_affordable(&self) -> bool {
        !self.leftover.is_negative()
    }

    /// "Yes" / "No" label for the verdict column
    pub fn verdict_label(&self) -> &'static str {
        if self.goal_reached {
            "Yes"
        } else {
            "No"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advice_display() {
        assert_eq!(
            Advice::GoalAchievable.to_string(),
            "Goal achievable with your current budget"
        );
        let advice = Advice::EarnMore {
            extra_per_month: Money::from_euros(134),
        };
        assert_eq!(
            advice.to_string(),
            "Earn at least €134 more per month to reach the goal"
        );
        assert_eq!(advice.extra_per_month(), Money::from_euros(134));
        assert!(!advice.is_achievable());
    }

    #[test]
    fn test_verdict_label() {
        let result = EvaluationResult {
            city: "Leipzig".into(),
            total_expenses: Money::from_euros(1090),
            leftover: Money::from_euros(402),
            projected_savings: Money::from_euros(1206),
            goal_reached: true,
            advice: Advice::GoalAchievable,
        };
        assert_eq!(result.verdict_label(), "Yes");
        assert!(result.is_affordable());
    }
}
