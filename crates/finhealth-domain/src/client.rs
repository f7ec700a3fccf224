//! Household financial snapshot entered by the user.

use std::fmt;

use serde::{Deserialize, Serialize};

/// States with dedicated presentation content.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ResidenceState {
    Hawaii,
    California,
    Nevada,
    Texas,
    Florida,
    #[serde(rename = "New York")]
    NewYork,
}

impl ResidenceState {
    pub const ALL: [ResidenceState; 6] = [
        ResidenceState::Hawaii,
        ResidenceState::California,
        ResidenceState::Nevada,
        ResidenceState::Texas,
        ResidenceState::Florida,
        ResidenceState::NewYork,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ResidenceState::Hawaii => "Hawaii",
            ResidenceState::California => "California",
            ResidenceState::Nevada => "Nevada",
            ResidenceState::Texas => "Texas",
            ResidenceState::Florida => "Florida",
            ResidenceState::NewYork => "New York",
        }
    }

    /// Case-insensitive lookup by label.
    pub fn parse(input: &str) -> Option<Self> {
        let needle = input.trim();
        Self::ALL
            .into_iter()
            .find(|state| state.label().eq_ignore_ascii_case(needle))
    }
}

impl fmt::Display for ResidenceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Flat snapshot of a household's finances.
///
/// Currency amounts are annual for income, balances for assets and liabilities,
/// and monthly for the `monthly_*` expense fields. Absent JSON keys default to zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientData {
    pub name: String,
    pub age: u32,
    pub dependents: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse_age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ResidenceState>,

    pub income: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse_income: Option<f64>,

    pub checking: f64,
    pub savings: f64,
    #[serde(rename = "retirement401k")]
    pub retirement_401k: f64,
    #[serde(rename = "retirementIRA")]
    pub retirement_ira: f64,
    pub brokerage: f64,
    pub home_value: f64,
    pub other_assets: f64,
    pub life_insurance_coverage: f64,
    pub disability_insurance_coverage: f64,

    pub mortgage: f64,
    pub student_loans: f64,
    pub car_loans: f64,
    pub credit_cards: f64,
    pub other_debts: f64,

    pub monthly_housing: f64,
    pub monthly_transportation: f64,
    pub monthly_food: f64,
    pub monthly_utilities: f64,
    pub monthly_insurance: f64,
    pub monthly_entertainment: f64,
    pub monthly_other: f64,

    pub has_life_insurance: bool,
    pub has_disability_insurance: bool,
    pub has_umbrella_policy: bool,
    pub has_estate_plan: bool,
}

/// Reads one currency amount out of a [`ClientData`].
pub type FieldAccessor = fn(&ClientData) -> f64;

/// A labelled currency field, used to drive grouped sums and balance-sheet listings.
#[derive(Clone, Copy)]
pub struct CurrencyField {
    pub label: &'static str,
    pub read: FieldAccessor,
}

impl CurrencyField {
    const fn new(label: &'static str, read: FieldAccessor) -> Self {
        Self { label, read }
    }
}

impl fmt::Debug for CurrencyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrencyField")
            .field("label", &self.label)
            .finish()
    }
}

pub const ASSET_FIELDS: [CurrencyField; 7] = [
    CurrencyField::new("Checking", |c| c.checking),
    CurrencyField::new("Savings", |c| c.savings),
    CurrencyField::new("401(k)", |c| c.retirement_401k),
    CurrencyField::new("IRA", |c| c.retirement_ira),
    CurrencyField::new("Brokerage", |c| c.brokerage),
    CurrencyField::new("Home value", |c| c.home_value),
    CurrencyField::new("Other assets", |c| c.other_assets),
];

pub const LIABILITY_FIELDS: [CurrencyField; 5] = [
    CurrencyField::new("Mortgage", |c| c.mortgage),
    CurrencyField::new("Student loans", |c| c.student_loans),
    CurrencyField::new("Car loans", |c| c.car_loans),
    CurrencyField::new("Credit cards", |c| c.credit_cards),
    CurrencyField::new("Other debts", |c| c.other_debts),
];

pub const MONTHLY_EXPENSE_FIELDS: [CurrencyField; 7] = [
    CurrencyField::new("Housing", |c| c.monthly_housing),
    CurrencyField::new("Transportation", |c| c.monthly_transportation),
    CurrencyField::new("Food", |c| c.monthly_food),
    CurrencyField::new("Utilities", |c| c.monthly_utilities),
    CurrencyField::new("Insurance", |c| c.monthly_insurance),
    CurrencyField::new("Entertainment", |c| c.monthly_entertainment),
    CurrencyField::new("Other", |c| c.monthly_other),
];

/// Assets counted toward the net-worth growth benchmark (everything but home and other).
pub const INVESTABLE_FIELDS: [CurrencyField; 5] = [
    ASSET_FIELDS[0],
    ASSET_FIELDS[1],
    ASSET_FIELDS[2],
    ASSET_FIELDS[3],
    ASSET_FIELDS[4],
];

fn sum_fields(data: &ClientData, fields: &[CurrencyField]) -> f64 {
    fields.iter().map(|field| (field.read)(data)).sum()
}

impl ClientData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn total_assets(&self) -> f64 {
        sum_fields(self, &ASSET_FIELDS)
    }

    pub fn total_liabilities(&self) -> f64 {
        sum_fields(self, &LIABILITY_FIELDS)
    }

    pub fn total_monthly_expenses(&self) -> f64 {
        sum_fields(self, &MONTHLY_EXPENSE_FIELDS)
    }

    pub fn investable_assets(&self) -> f64 {
        sum_fields(self, &INVESTABLE_FIELDS)
    }

    /// Checking plus savings.
    pub fn liquid_assets(&self) -> f64 {
        self.checking + self.savings
    }

    pub fn retirement_savings(&self) -> f64 {
        self.retirement_401k + self.retirement_ira
    }

    pub fn total_income(&self) -> f64 {
        self.income + self.spouse_income.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_sums_follow_field_tables() {
        let client = ClientData {
            checking: 1.0,
            savings: 2.0,
            retirement_401k: 4.0,
            retirement_ira: 8.0,
            brokerage: 16.0,
            home_value: 32.0,
            other_assets: 64.0,
            mortgage: 100.0,
            credit_cards: 5.0,
            monthly_food: 300.0,
            monthly_other: 20.0,
            ..ClientData::default()
        };

        assert_eq!(client.total_assets(), 127.0);
        assert_eq!(client.investable_assets(), 31.0);
        assert_eq!(client.liquid_assets(), 3.0);
        assert_eq!(client.total_liabilities(), 105.0);
        assert_eq!(client.total_monthly_expenses(), 320.0);
    }

    #[test]
    fn spouse_income_is_optional() {
        let mut client = ClientData::new("Kai");
        client.income = 50_000.0;
        assert_eq!(client.total_income(), 50_000.0);
        client.spouse_income = Some(25_000.0);
        assert_eq!(client.total_income(), 75_000.0);
    }

    #[test]
    fn deserializes_camel_case_with_defaults() {
        let json = r#"{
            "name": "Lee",
            "age": 41,
            "income": 90000,
            "retirement401k": 12000,
            "retirementIRA": 3000,
            "hasEstatePlan": true,
            "state": "New York"
        }"#;
        let client: ClientData = serde_json::from_str(json).expect("parse client");

        assert_eq!(client.name, "Lee");
        assert_eq!(client.retirement_401k, 12_000.0);
        assert_eq!(client.retirement_ira, 3_000.0);
        assert!(client.has_estate_plan);
        assert_eq!(client.state, Some(ResidenceState::NewYork));
        assert_eq!(client.spouse_income, None);
        assert_eq!(client.monthly_housing, 0.0);
    }

    #[test]
    fn residence_state_parses_labels() {
        assert_eq!(ResidenceState::parse("new york"), Some(ResidenceState::NewYork));
        assert_eq!(ResidenceState::parse("Texas"), Some(ResidenceState::Texas));
        assert_eq!(ResidenceState::parse("Ohio"), None);
    }
}
