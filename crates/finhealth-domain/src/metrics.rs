//! Derived financial metrics and the composite health score.

use serde::{Deserialize, Serialize};

/// Point budget of each health-score component.
pub const PROTECTION_COVERAGE_MAX: u32 = 25;
pub const SAVINGS_RATE_MAX: u32 = 25;
pub const EMERGENCY_FUND_MAX: u32 = 20;
pub const DEBT_TO_INCOME_MAX: u32 = 15;
pub const NET_WORTH_GROWTH_MAX: u32 = 15;

/// Per-component health points, each rounded for display.
///
/// The sum of these values may differ by a point from
/// [`FinancialMetrics::health_score`], which is rounded once from the raw components.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HealthScoreBreakdown {
    pub protection_coverage: u32,
    pub savings_rate: u32,
    pub emergency_fund: u32,
    pub debt_to_income: u32,
    pub net_worth_growth: u32,
}

impl HealthScoreBreakdown {
    /// Label, points and point budget for every component, in display order.
    pub fn components(&self) -> [(&'static str, u32, u32); 5] {
        [
            (
                "Protection coverage",
                self.protection_coverage,
                PROTECTION_COVERAGE_MAX,
            ),
            ("Savings rate", self.savings_rate, SAVINGS_RATE_MAX),
            ("Emergency fund", self.emergency_fund, EMERGENCY_FUND_MAX),
            ("Debt-to-income", self.debt_to_income, DEBT_TO_INCOME_MAX),
            (
                "Net-worth growth",
                self.net_worth_growth,
                NET_WORTH_GROWTH_MAX,
            ),
        ]
    }

    pub fn displayed_total(&self) -> u32 {
        self.components().iter().map(|(_, points, _)| points).sum()
    }
}

/// Read-only snapshot derived from a [`crate::ClientData`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialMetrics {
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,
    pub total_income: f64,
    pub total_monthly_expenses: f64,
    pub annual_expenses: f64,

    /// Liabilities as a multiple of annual income.
    pub debt_to_income_ratio: f64,
    /// Percentage of income left after annualized expenses; may be negative.
    pub savings_rate: f64,
    pub emergency_fund_months: f64,

    pub life_insurance_gap: f64,
    pub life_insurance_needed: f64,
    pub disability_insurance_gap: f64,
    pub disability_insurance_needed: f64,

    pub health_score: u32,
    pub health_score_breakdown: HealthScoreBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_components_carry_budgets() {
        let breakdown = HealthScoreBreakdown {
            protection_coverage: 21,
            savings_rate: 25,
            emergency_fund: 10,
            debt_to_income: 15,
            net_worth_growth: 3,
        };
        let budgets: u32 = breakdown.components().iter().map(|(_, _, max)| max).sum();

        assert_eq!(budgets, 100);
        assert_eq!(breakdown.displayed_total(), 74);
    }

    #[test]
    fn serializes_camel_case() {
        let metrics = FinancialMetrics {
            net_worth: 10.0,
            health_score: 42,
            ..FinancialMetrics::default()
        };
        let json = serde_json::to_string(&metrics).expect("serialize metrics");

        assert!(json.contains("\"netWorth\":10.0"));
        assert!(json.contains("\"healthScore\":42"));
        assert!(json.contains("\"healthScoreBreakdown\""));
    }
}
