use std::fmt;

use finhealth_domain::{
    ClientData, FinancialMetrics, HealthScoreBreakdown, DEBT_TO_INCOME_MAX, EMERGENCY_FUND_MAX,
    NET_WORTH_GROWTH_MAX, PROTECTION_COVERAGE_MAX, SAVINGS_RATE_MAX,
};
use tracing::debug;

use crate::ladder::{Bound, Floor, Ladder};

/// Life cover sized at ten times annual household income.
pub const LIFE_INSURANCE_INCOME_MULTIPLE: f64 = 10.0;
/// Disability cover sized at 60% income replacement.
pub const DISABILITY_INCOME_REPLACEMENT: f64 = 0.6;

const UMBRELLA_POINTS: f64 = 7.0;
const DISABILITY_POINTS: f64 = 6.0;
const LIFE_COVERED_POINTS: f64 = 8.0;
const ESTATE_PLAN_POINTS: f64 = 4.0;

const SAVINGS_RATE_RUNGS: &[(Bound, f64)] = &[
    (Bound::AtLeast(20.0), 25.0),
    (Bound::AtLeast(15.0), 20.0),
    (Bound::AtLeast(10.0), 15.0),
    (Bound::AtLeast(5.0), 10.0),
];

const EMERGENCY_FUND_RUNGS: &[(Bound, f64)] = &[
    (Bound::AtLeast(6.0), 20.0),
    (Bound::AtLeast(3.0), 15.0),
    (Bound::AtLeast(1.0), 10.0),
];

const DEBT_TO_INCOME_RUNGS: &[(Bound, f64)] = &[
    (Bound::AtMost(2.0), 15.0),
    (Bound::AtMost(3.0), 12.0),
    (Bound::AtMost(4.0), 8.0),
    (Bound::AtMost(5.0), 4.0),
];

const NET_WORTH_GROWTH_RUNGS: &[(Bound, f64)] = &[
    (Bound::AtLeast(5.0), 15.0),
    (Bound::AtLeast(3.0), 12.0),
    (Bound::AtLeast(1.0), 8.0),
];

pub const SAVINGS_RATE_POINTS: Ladder<'static, f64> =
    Ladder::new(SAVINGS_RATE_RUNGS, Floor::Scaled(partial_savings_credit));
pub const EMERGENCY_FUND_POINTS: Ladder<'static, f64> =
    Ladder::new(EMERGENCY_FUND_RUNGS, Floor::Scaled(five_points_per_unit));
pub const DEBT_TO_INCOME_POINTS: Ladder<'static, f64> =
    Ladder::new(DEBT_TO_INCOME_RUNGS, Floor::Fixed(0.0));
pub const NET_WORTH_GROWTH_POINTS: Ladder<'static, f64> =
    Ladder::new(NET_WORTH_GROWTH_RUNGS, Floor::Scaled(five_points_per_unit));

fn partial_savings_credit(rate: f64) -> f64 {
    rate.max(0.0)
}

fn five_points_per_unit(value: f64) -> f64 {
    value * 5.0
}

/// Rounds half toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

fn whole_points(value: f64) -> u32 {
    round_half_up(value).max(0.0) as u32
}

fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Un-rounded health points per component, each clamped to its budget.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HealthComponents {
    pub protection_coverage: f64,
    pub savings_rate: f64,
    pub emergency_fund: f64,
    pub debt_to_income: f64,
    pub net_worth_growth: f64,
}

impl HealthComponents {
    pub fn evaluate(data: &ClientData, ratios: &HealthInputs) -> Self {
        let mut protection = 0.0;
        if data.has_umbrella_policy {
            protection += UMBRELLA_POINTS;
        }
        if data.has_disability_insurance {
            protection += DISABILITY_POINTS;
        }
        if ratios.life_insurance_gap == 0.0 {
            protection += LIFE_COVERED_POINTS;
        }
        if data.has_estate_plan {
            protection += ESTATE_PLAN_POINTS;
        }

        let net_worth_ratio = ratio_or_zero(data.investable_assets(), ratios.total_income);

        Self {
            protection_coverage: capped(protection, PROTECTION_COVERAGE_MAX),
            savings_rate: capped(
                SAVINGS_RATE_POINTS.evaluate(ratios.savings_rate),
                SAVINGS_RATE_MAX,
            ),
            emergency_fund: capped(
                EMERGENCY_FUND_POINTS.evaluate(ratios.emergency_fund_months),
                EMERGENCY_FUND_MAX,
            ),
            debt_to_income: capped(
                DEBT_TO_INCOME_POINTS.evaluate(ratios.debt_to_income_ratio),
                DEBT_TO_INCOME_MAX,
            ),
            net_worth_growth: capped(
                NET_WORTH_GROWTH_POINTS.evaluate(net_worth_ratio),
                NET_WORTH_GROWTH_MAX,
            ),
        }
    }

    /// Rounded once from the raw sum.
    pub fn total(&self) -> u32 {
        whole_points(
            self.protection_coverage
                + self.savings_rate
                + self.emergency_fund
                + self.debt_to_income
                + self.net_worth_growth,
        )
    }

    /// Each component rounded on its own for display.
    pub fn breakdown(&self) -> HealthScoreBreakdown {
        HealthScoreBreakdown {
            protection_coverage: whole_points(self.protection_coverage),
            savings_rate: whole_points(self.savings_rate),
            emergency_fund: whole_points(self.emergency_fund),
            debt_to_income: whole_points(self.debt_to_income),
            net_worth_growth: whole_points(self.net_worth_growth),
        }
    }
}

fn capped(points: f64, max: u32) -> f64 {
    points.clamp(0.0, f64::from(max))
}

/// Ratios the health score is computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthInputs {
    pub savings_rate: f64,
    pub emergency_fund_months: f64,
    pub debt_to_income_ratio: f64,
    pub life_insurance_gap: f64,
    pub total_income: f64,
}

/// Derives totals, ratios, insurance gaps and the health score from a snapshot.
pub fn calculate_financial_metrics(data: &ClientData) -> FinancialMetrics {
    let total_assets = data.total_assets();
    let total_liabilities = data.total_liabilities();
    let net_worth = total_assets - total_liabilities;
    let total_income = data.total_income();
    let total_monthly_expenses = data.total_monthly_expenses();
    let annual_expenses = total_monthly_expenses * 12.0;

    let debt_to_income_ratio = ratio_or_zero(total_liabilities, total_income);
    let annual_savings = total_income - annual_expenses;
    let savings_rate = ratio_or_zero(annual_savings, total_income) * 100.0;
    let emergency_fund_months = ratio_or_zero(data.liquid_assets(), total_monthly_expenses);

    let life_insurance_needed = total_income * LIFE_INSURANCE_INCOME_MULTIPLE;
    let life_insurance_gap = (life_insurance_needed - data.life_insurance_coverage).max(0.0);
    let disability_insurance_needed = total_income * DISABILITY_INCOME_REPLACEMENT;
    let disability_insurance_gap =
        (disability_insurance_needed - data.disability_insurance_coverage).max(0.0);

    let components = HealthComponents::evaluate(
        data,
        &HealthInputs {
            savings_rate,
            emergency_fund_months,
            debt_to_income_ratio,
            life_insurance_gap,
            total_income,
        },
    );
    let health_score = components.total();

    debug!(
        client = %data.name,
        net_worth,
        savings_rate,
        emergency_fund_months,
        health_score,
        "calculated financial metrics"
    );

    FinancialMetrics {
        total_assets,
        total_liabilities,
        net_worth,
        total_income,
        total_monthly_expenses,
        annual_expenses,
        debt_to_income_ratio,
        savings_rate,
        emergency_fund_months,
        life_insurance_gap,
        life_insurance_needed,
        disability_insurance_gap,
        disability_insurance_needed,
        health_score,
        health_score_breakdown: components.breakdown(),
    }
}

/// Dashboard label for a health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthRating {
    Excellent,
    Good,
    NeedsImprovement,
    Critical,
}

impl HealthRating {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => HealthRating::Excellent,
            s if s >= 60 => HealthRating::Good,
            s if s >= 40 => HealthRating::NeedsImprovement,
            _ => HealthRating::Critical,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthRating::Excellent => "Excellent",
            HealthRating::Good => "Good",
            HealthRating::NeedsImprovement => "Needs Improvement",
            HealthRating::Critical => "Critical",
        }
    }
}

impl fmt::Display for HealthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_up_matches_display_rounding() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(0.0), 0.0);
    }

    #[test]
    fn savings_ladder_gives_partial_credit_below_five_percent() {
        assert_eq!(SAVINGS_RATE_POINTS.evaluate(25.0), 25.0);
        assert_eq!(SAVINGS_RATE_POINTS.evaluate(15.0), 20.0);
        assert_eq!(SAVINGS_RATE_POINTS.evaluate(12.0), 15.0);
        assert_eq!(SAVINGS_RATE_POINTS.evaluate(5.0), 10.0);
        assert_eq!(SAVINGS_RATE_POINTS.evaluate(3.5), 3.5);
        assert_eq!(SAVINGS_RATE_POINTS.evaluate(-40.0), 0.0);
    }

    #[test]
    fn emergency_and_net_worth_ladders_scale_below_one() {
        assert_eq!(EMERGENCY_FUND_POINTS.evaluate(6.0), 20.0);
        assert_eq!(EMERGENCY_FUND_POINTS.evaluate(3.0), 15.0);
        assert_eq!(EMERGENCY_FUND_POINTS.evaluate(1.0), 10.0);
        assert_eq!(EMERGENCY_FUND_POINTS.evaluate(0.5), 2.5);
        assert_eq!(NET_WORTH_GROWTH_POINTS.evaluate(5.0), 15.0);
        assert_eq!(NET_WORTH_GROWTH_POINTS.evaluate(3.2), 12.0);
        assert_eq!(NET_WORTH_GROWTH_POINTS.evaluate(1.0), 8.0);
        assert_eq!(NET_WORTH_GROWTH_POINTS.evaluate(0.2), 1.0);
    }

    #[test]
    fn debt_ladder_uses_upper_bounds() {
        assert_eq!(DEBT_TO_INCOME_POINTS.evaluate(0.0), 15.0);
        assert_eq!(DEBT_TO_INCOME_POINTS.evaluate(2.0), 15.0);
        assert_eq!(DEBT_TO_INCOME_POINTS.evaluate(2.5), 12.0);
        assert_eq!(DEBT_TO_INCOME_POINTS.evaluate(4.0), 8.0);
        assert_eq!(DEBT_TO_INCOME_POINTS.evaluate(5.0), 4.0);
        assert_eq!(DEBT_TO_INCOME_POINTS.evaluate(5.01), 0.0);
    }

    #[test]
    fn protection_flags_are_additive() {
        let data = ClientData {
            has_umbrella_policy: true,
            has_disability_insurance: true,
            has_estate_plan: true,
            ..ClientData::default()
        };
        let inputs = HealthInputs {
            savings_rate: 0.0,
            emergency_fund_months: 0.0,
            debt_to_income_ratio: 10.0,
            life_insurance_gap: 0.0,
            total_income: 0.0,
        };
        let components = HealthComponents::evaluate(&data, &inputs);
        assert_eq!(components.protection_coverage, 25.0);

        let uncovered = HealthInputs {
            life_insurance_gap: 1.0,
            ..inputs
        };
        let components = HealthComponents::evaluate(&data, &uncovered);
        assert_eq!(components.protection_coverage, 17.0);
    }

    #[test]
    fn total_is_rounded_from_raw_components() {
        let components = HealthComponents {
            protection_coverage: 0.0,
            savings_rate: 2.5,
            emergency_fund: 2.5,
            debt_to_income: 15.0,
            net_worth_growth: 0.0,
        };
        // 2.5 + 2.5 + 15 = 20 while the displayed parts add up to 3 + 3 + 15 = 21.
        assert_eq!(components.total(), 20);
        assert_eq!(components.breakdown().displayed_total(), 21);
    }

    #[test]
    fn health_rating_bands() {
        assert_eq!(HealthRating::from_score(100), HealthRating::Excellent);
        assert_eq!(HealthRating::from_score(80), HealthRating::Excellent);
        assert_eq!(HealthRating::from_score(79), HealthRating::Good);
        assert_eq!(HealthRating::from_score(60), HealthRating::Good);
        assert_eq!(HealthRating::from_score(40), HealthRating::NeedsImprovement);
        assert_eq!(HealthRating::from_score(39), HealthRating::Critical);
        assert_eq!(HealthRating::NeedsImprovement.to_string(), "Needs Improvement");
    }
}
