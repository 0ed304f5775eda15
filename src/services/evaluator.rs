//! Budget evaluator
//!
//! Maps one city's costs and one budget input to an affordability verdict.
//! Evaluation is pure: the same inputs always give the same result.

use crate::error::{BudgeterError, BudgeterResult};
use crate::models::{Advice, BudgetInput, CityCost, EvaluationResult};

/// Evaluate whether `input` affords `city` and reaches the savings goal
///
/// Fails with `InvalidInput` when any amount is negative, the goal horizon
/// is zero months, or the amounts are too large to combine.
pub fn evaluate(city: &CityCost, input: &BudgetInput) -> BudgeterResult<EvaluationResult> {
    city.validate()
        .map_err(|e| BudgeterError::InvalidInput(e.to_string()))?;
    input
        .validate()
        .map_err(|e| BudgeterError::InvalidInput(e.to_string()))?;

    let too_large = || BudgeterError::InvalidInput("amounts are too large to evaluate".into());

    let total_income = input
        .base_income
        .checked_add(input.extra_income)
        .ok_or_else(too_large)?;
    let total_expenses = city
        .rent
        .checked_add(city.food)
        .and_then(|sum| sum.checked_add(city.transport))
        .ok_or_else(too_large)?;
    let leftover = total_income
        .checked_sub(total_expenses)
        .ok_or_else(too_large)?;
    let projected_savings = leftover
        .checked_mul(input.goal_months)
        .ok_or_else(too_large)?
        .floor_zero();
    let goal_reached = projected_savings >= input.goal.amount;

    let advice = if goal_reached {
        Advice::GoalAchievable
    } else {
        // Both sides are non-negative here, so the difference cannot overflow
        let shortfall = input.goal.amount - projected_savings;
        Advice::EarnMore {
            extra_per_month: shortfall.ceil_whole_euros_per(input.goal_months),
        }
    };

    tracing::debug!(
        city = %city.name,
        %total_expenses,
        %leftover,
        %projected_savings,
        goal_reached,
        "Evaluated city"
    );

    Ok(EvaluationResult {
        city: city.name.clone(),
        total_expenses,
        leftover,
        projected_savings,
        goal_reached,
        advice,
    })
}
