//! Categorized risk assessment model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a risk category, from most to least urgent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RiskStatus {
    Critical,
    Warning,
    Good,
    Excellent,
}

impl RiskStatus {
    pub fn label(self) -> &'static str {
        match self {
            RiskStatus::Critical => "critical",
            RiskStatus::Warning => "warning",
            RiskStatus::Good => "good",
            RiskStatus::Excellent => "excellent",
        }
    }
}

impl fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The eight assessed categories in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskCategoryKind {
    LifeInsurance,
    Disability,
    EmergencyFund,
    Debt,
    Retirement,
    Estate,
    Liability,
    Savings,
}

impl RiskCategoryKind {
    pub const ALL: [RiskCategoryKind; 8] = [
        RiskCategoryKind::LifeInsurance,
        RiskCategoryKind::Disability,
        RiskCategoryKind::EmergencyFund,
        RiskCategoryKind::Debt,
        RiskCategoryKind::Retirement,
        RiskCategoryKind::Estate,
        RiskCategoryKind::Liability,
        RiskCategoryKind::Savings,
    ];

    /// Name shown to the user and reported in critical gaps.
    pub fn display_name(self) -> &'static str {
        match self {
            RiskCategoryKind::LifeInsurance => "Life Insurance",
            RiskCategoryKind::Disability => "Disability Insurance",
            RiskCategoryKind::EmergencyFund => "Emergency Fund",
            RiskCategoryKind::Debt => "Debt Level",
            RiskCategoryKind::Retirement => "Retirement Savings",
            RiskCategoryKind::Estate => "Estate Planning",
            RiskCategoryKind::Liability => "Liability Protection",
            RiskCategoryKind::Savings => "Savings Rate",
        }
    }
}

impl fmt::Display for RiskCategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Assessment of a single category. `score` runs 0-100, higher is riskier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskCategory {
    pub name: String,
    pub score: u32,
    pub status: RiskStatus,
    pub message: String,
    pub recommendations: Vec<String>,
}

impl RiskCategory {
    pub fn is_critical(&self) -> bool {
        self.status == RiskStatus::Critical
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RiskCategories {
    pub life_insurance: RiskCategory,
    pub disability: RiskCategory,
    pub emergency: RiskCategory,
    pub debt: RiskCategory,
    pub retirement: RiskCategory,
    pub estate: RiskCategory,
    pub liability: RiskCategory,
    pub savings: RiskCategory,
}

impl RiskCategories {
    pub fn get(&self, kind: RiskCategoryKind) -> &RiskCategory {
        match kind {
            RiskCategoryKind::LifeInsurance => &self.life_insurance,
            RiskCategoryKind::Disability => &self.disability,
            RiskCategoryKind::EmergencyFund => &self.emergency,
            RiskCategoryKind::Debt => &self.debt,
            RiskCategoryKind::Retirement => &self.retirement,
            RiskCategoryKind::Estate => &self.estate,
            RiskCategoryKind::Liability => &self.liability,
            RiskCategoryKind::Savings => &self.savings,
        }
    }

    /// Categories in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &RiskCategory> + '_ {
        RiskCategoryKind::ALL.into_iter().map(move |kind| self.get(kind))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub categories: RiskCategories,
    /// Rounded mean of the category scores; higher is riskier.
    pub overall_risk_score: u32,
    pub critical_gaps: Vec<String>,
}
