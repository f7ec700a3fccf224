//! Eight independent risk category assessments and their aggregate.
//!
//! Each category runs its input through a [`Ladder`] of [`Grade`]s and then renders
//! the narrative for the chosen status. Grades and narratives are kept apart so the
//! thresholds can be tested without string formatting.
//!
//! Dollar amounts in recommendations are written as a literal `$` followed by
//! [`format_currency`] output, so they read `$$1,200,000`. Saved reports and any
//! consumer matching on the text depend on that exact form.

use finhealth_domain::{
    ClientData, FinancialMetrics, RiskAssessment, RiskCategories, RiskCategory,
    RiskCategoryKind, RiskStatus,
};
use tracing::debug;

use crate::format::{format_currency, format_multiple};
use crate::ladder::{Bound, Floor, Ladder};
use crate::metrics_service::round_half_up;

/// Status and risk score a ladder rung resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grade {
    pub status: RiskStatus,
    pub score: u32,
}

impl Grade {
    pub const fn new(status: RiskStatus, score: u32) -> Self {
        Self { status, score }
    }
}

use RiskStatus::{Critical, Excellent, Good, Warning};

const LIFE_INSURANCE_RUNGS: &[(Bound, Grade)] = &[
    (Bound::AtLeast(1.0), Grade::new(Excellent, 10)),
    (Bound::AtLeast(0.7), Grade::new(Good, 40)),
    (Bound::AtLeast(0.3), Grade::new(Warning, 70)),
];
const DISABILITY_RUNGS: &[(Bound, Grade)] = &[(Bound::AtLeast(0.6), Grade::new(Good, 20))];
const EMERGENCY_FUND_RUNGS: &[(Bound, Grade)] = &[
    (Bound::AtLeast(6.0), Grade::new(Excellent, 10)),
    (Bound::AtLeast(3.0), Grade::new(Good, 40)),
    (Bound::AtLeast(1.0), Grade::new(Warning, 70)),
];
const DEBT_RUNGS: &[(Bound, Grade)] = &[
    (Bound::AtMost(2.0), Grade::new(Excellent, 15)),
    (Bound::AtMost(3.0), Grade::new(Good, 45)),
    (Bound::AtMost(4.0), Grade::new(Warning, 70)),
];
const SAVINGS_RUNGS: &[(Bound, Grade)] = &[
    (Bound::AtLeast(20.0), Grade::new(Excellent, 10)),
    (Bound::AtLeast(10.0), Grade::new(Good, 40)),
    (Bound::AtLeast(5.0), Grade::new(Warning, 65)),
];

pub const LIFE_INSURANCE_LADDER: Ladder<'static, Grade> =
    Ladder::new(LIFE_INSURANCE_RUNGS, Floor::Fixed(Grade::new(Critical, 95)));
pub const DISABILITY_LADDER: Ladder<'static, Grade> =
    Ladder::new(DISABILITY_RUNGS, Floor::Fixed(Grade::new(Warning, 60)));
pub const EMERGENCY_FUND_LADDER: Ladder<'static, Grade> =
    Ladder::new(EMERGENCY_FUND_RUNGS, Floor::Fixed(Grade::new(Critical, 95)));
pub const DEBT_LADDER: Ladder<'static, Grade> =
    Ladder::new(DEBT_RUNGS, Floor::Fixed(Grade::new(Critical, 90)));
pub const SAVINGS_LADDER: Ladder<'static, Grade> =
    Ladder::new(SAVINGS_RUNGS, Floor::Fixed(Grade::new(Critical, 90)));

const NO_DISABILITY_COVER: Grade = Grade::new(Critical, 90);
const ESTATE_PLANNED: Grade = Grade::new(Excellent, 10);
const ESTATE_MISSING: Grade = Grade::new(Warning, 75);
const UMBRELLA_HELD: Grade = Grade::new(Excellent, 15);
const UMBRELLA_MISSING: Grade = Grade::new(Warning, 70);

/// Coverage over need, treating "nothing needed" as fully covered.
fn coverage_ratio(coverage: f64, needed: f64) -> f64 {
    if needed > 0.0 {
        coverage / needed
    } else {
        1.0
    }
}

/// Retirement savings benchmark, in multiples of annual income, for an age.
pub fn retirement_target_multiple(age: u32) -> f64 {
    match age {
        a if a >= 60 => 8.0,
        a if a >= 50 => 6.0,
        a if a >= 40 => 3.0,
        a if a >= 30 => 1.0,
        _ => 0.0,
    }
}

pub fn grade_life_insurance(data: &ClientData, metrics: &FinancialMetrics) -> Grade {
    let ratio = coverage_ratio(data.life_insurance_coverage, metrics.life_insurance_needed);
    LIFE_INSURANCE_LADDER.evaluate(ratio)
}

pub fn grade_disability(data: &ClientData, metrics: &FinancialMetrics) -> Grade {
    if !data.has_disability_insurance {
        return NO_DISABILITY_COVER;
    }
    let ratio = coverage_ratio(
        data.disability_insurance_coverage,
        metrics.disability_insurance_needed,
    );
    DISABILITY_LADDER.evaluate(ratio)
}

pub fn grade_emergency_fund(metrics: &FinancialMetrics) -> Grade {
    EMERGENCY_FUND_LADDER.evaluate(metrics.emergency_fund_months)
}

pub fn grade_debt(metrics: &FinancialMetrics) -> Grade {
    DEBT_LADDER.evaluate(metrics.debt_to_income_ratio)
}

/// Savings as a multiple of income, 0 without income.
pub fn retirement_income_multiple(data: &ClientData, metrics: &FinancialMetrics) -> f64 {
    if metrics.total_income > 0.0 {
        data.retirement_savings() / metrics.total_income
    } else {
        0.0
    }
}

pub fn grade_retirement(data: &ClientData, metrics: &FinancialMetrics) -> Grade {
    let target = retirement_target_multiple(data.age);
    let rungs = [
        (Bound::AtLeast(target), Grade::new(Excellent, 15)),
        (Bound::AtLeast(target * 0.7), Grade::new(Good, 40)),
        (Bound::AtLeast(target * 0.4), Grade::new(Warning, 65)),
    ];
    Ladder::new(&rungs, Floor::Fixed(Grade::new(Critical, 85)))
        .evaluate(retirement_income_multiple(data, metrics))
}

pub fn grade_estate(data: &ClientData) -> Grade {
    if data.has_estate_plan {
        ESTATE_PLANNED
    } else {
        ESTATE_MISSING
    }
}

pub fn grade_liability(data: &ClientData) -> Grade {
    if data.has_umbrella_policy {
        UMBRELLA_HELD
    } else {
        UMBRELLA_MISSING
    }
}

pub fn grade_savings(metrics: &FinancialMetrics) -> Grade {
    SAVINGS_LADDER.evaluate(metrics.savings_rate)
}

fn category(kind: RiskCategoryKind, grade: Grade, message: &str, recs: Vec<String>) -> RiskCategory {
    RiskCategory {
        name: kind.display_name().to_string(),
        score: grade.score,
        status: grade.status,
        message: message.to_string(),
        recommendations: recs,
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub fn assess_life_insurance(data: &ClientData, metrics: &FinancialMetrics) -> RiskCategory {
    let grade = grade_life_insurance(data, metrics);
    let message = match grade.status {
        Excellent => "Excellent life insurance coverage",
        Good => "Good life insurance coverage, minor gap exists",
        Warning => "Significant life insurance gap detected",
        Critical => "CRITICAL: Severe life insurance protection gap",
    };
    category(
        RiskCategoryKind::LifeInsurance,
        grade,
        message,
        vec![
            format!(
                "Recommended coverage: ${}",
                format_currency(metrics.life_insurance_needed)
            ),
            format!(
                "Current gap: ${}",
                format_currency(metrics.life_insurance_gap)
            ),
            "Consider term life insurance for cost-effective protection".to_string(),
        ],
    )
}

pub fn assess_disability(data: &ClientData, metrics: &FinancialMetrics) -> RiskCategory {
    let grade = grade_disability(data, metrics);
    let needed = format_currency(metrics.disability_insurance_needed);
    if !data.has_disability_insurance {
        return category(
            RiskCategoryKind::Disability,
            grade,
            "No disability insurance coverage",
            vec![
                "Get disability insurance to protect income".to_string(),
                format!("Recommended: ${} annual coverage", needed),
                "Aim for 60% income replacement".to_string(),
            ],
        );
    }
    match grade.status {
        Good | Excellent => category(
            RiskCategoryKind::Disability,
            grade,
            "Adequate disability coverage",
            lines(&["Maintain current coverage", "Review annually"]),
        ),
        Warning | Critical => category(
            RiskCategoryKind::Disability,
            grade,
            "Disability coverage below recommended level",
            vec![
                format!("Recommended: ${} annual coverage", needed),
                format!(
                    "Current gap: ${}",
                    format_currency(metrics.disability_insurance_gap)
                ),
            ],
        ),
    }
}

pub fn assess_emergency_fund(metrics: &FinancialMetrics) -> RiskCategory {
    let grade = grade_emergency_fund(metrics);
    let kind = RiskCategoryKind::EmergencyFund;
    match grade.status {
        Excellent => category(
            kind,
            grade,
            "Excellent emergency fund reserves",
            lines(&["Maintain current level", "Keep in high-yield savings"]),
        ),
        Good => category(
            kind,
            grade,
            "Good emergency fund, could be stronger",
            lines(&[
                "Build to 6 months of expenses",
                "Automate monthly contributions",
            ]),
        ),
        Warning => category(
            kind,
            grade,
            "Insufficient emergency reserves",
            lines(&[
                "Priority: Build to 3-6 months expenses",
                "Start with $1,000 starter fund",
            ]),
        ),
        Critical => category(
            kind,
            grade,
            "CRITICAL: No emergency fund",
            vec![
                "URGENT: Build emergency fund immediately".to_string(),
                "Target: 3-6 months of expenses".to_string(),
                format!(
                    "Goal amount: ${}",
                    format_currency(metrics.total_monthly_expenses * 6.0)
                ),
            ],
        ),
    }
}

pub fn assess_debt(metrics: &FinancialMetrics) -> RiskCategory {
    let grade = grade_debt(metrics);
    let (message, recs): (&str, &[&str]) = match grade.status {
        Excellent => (
            "Excellent debt-to-income ratio",
            &["Maintain low debt levels", "Continue debt paydown"],
        ),
        Good => (
            "Manageable debt levels",
            &["Consider accelerated debt payoff", "Avoid new debt"],
        ),
        Warning => (
            "High debt burden",
            &["Create debt reduction plan", "Consider debt consolidation"],
        ),
        Critical => (
            "CRITICAL: Excessive debt levels",
            &[
                "URGENT: Debt reduction required",
                "Seek credit counseling",
                "Stop accumulating new debt",
            ],
        ),
    };
    category(RiskCategoryKind::Debt, grade, message, lines(recs))
}

pub fn assess_retirement(data: &ClientData, metrics: &FinancialMetrics) -> RiskCategory {
    let grade = grade_retirement(data, metrics);
    let multiple = retirement_income_multiple(data, metrics);
    let target = retirement_target_multiple(data.age);
    category(
        RiskCategoryKind::Retirement,
        grade,
        &format!("Retirement savings at {} income", format_multiple(multiple)),
        vec![
            format!("Target for age {}: {}x annual income", data.age, target),
            "Maximize employer 401(k) match".to_string(),
            "Consider increasing contribution rate by 1-2%".to_string(),
        ],
    )
}

pub fn assess_estate(data: &ClientData) -> RiskCategory {
    let grade = grade_estate(data);
    if data.has_estate_plan {
        category(
            RiskCategoryKind::Estate,
            grade,
            "Estate plan in place",
            lines(&["Review every 3-5 years", "Update after major life events"]),
        )
    } else {
        category(
            RiskCategoryKind::Estate,
            grade,
            "No estate plan",
            lines(&[
                "Create will and healthcare directives",
                "Consider living trust",
                "Designate beneficiaries on all accounts",
            ]),
        )
    }
}

pub fn assess_liability(data: &ClientData) -> RiskCategory {
    let grade = grade_liability(data);
    if data.has_umbrella_policy {
        category(
            RiskCategoryKind::Liability,
            grade,
            "Umbrella policy in place",
            lines(&["Maintain coverage", "Review limits annually"]),
        )
    } else {
        category(
            RiskCategoryKind::Liability,
            grade,
            "No umbrella liability coverage",
            lines(&[
                "Consider $1-2M umbrella policy",
                "Protects assets from lawsuits",
                "Very cost-effective coverage",
            ]),
        )
    }
}

pub fn assess_savings(metrics: &FinancialMetrics) -> RiskCategory {
    let grade = grade_savings(metrics);
    let (message, recs): (&str, &[&str]) = match grade.status {
        Excellent => (
            "Excellent savings rate",
            &[
                "Maintain current discipline",
                "Maximize tax-advantaged accounts",
            ],
        ),
        Good => (
            "Good savings rate",
            &["Aim to increase to 15-20%", "Automate savings"],
        ),
        Warning => (
            "Low savings rate",
            &["Increase to minimum 10%", "Review budget for opportunities"],
        ),
        Critical => (
            "CRITICAL: Very low savings",
            &[
                "URGENT: Start saving immediately",
                "Target: Save at least 10% of income",
                "Create and follow a budget",
            ],
        ),
    };
    category(RiskCategoryKind::Savings, grade, message, lines(recs))
}

/// Assesses every category and aggregates the overall score and critical gaps.
pub fn generate_risk_assessment(data: &ClientData, metrics: &FinancialMetrics) -> RiskAssessment {
    let categories = RiskCategories {
        life_insurance: assess_life_insurance(data, metrics),
        disability: assess_disability(data, metrics),
        emergency: assess_emergency_fund(metrics),
        debt: assess_debt(metrics),
        retirement: assess_retirement(data, metrics),
        estate: assess_estate(data),
        liability: assess_liability(data),
        savings: assess_savings(metrics),
    };

    let scores: Vec<u32> = categories.iter().map(|cat| cat.score).collect();
    let mean = f64::from(scores.iter().sum::<u32>()) / scores.len() as f64;
    let overall_risk_score = round_half_up(mean) as u32;

    let critical_gaps: Vec<String> = categories
        .iter()
        .filter(|cat| cat.is_critical())
        .map(|cat| cat.name.clone())
        .collect();

    debug!(
        client = %data.name,
        overall_risk_score,
        critical = critical_gaps.len(),
        "generated risk assessment"
    );

    RiskAssessment {
        categories,
        overall_risk_score,
        critical_gaps,
    }
}
