//! Client fields editable from the shell with `set <field> <value>`.

use finhealth_core::format_currency;
use finhealth_domain::{ClientData, ResidenceState};

#[derive(Clone, Copy)]
pub enum FieldSlot {
    Text(fn(&mut ClientData) -> &mut String),
    OptionalText(fn(&mut ClientData) -> &mut Option<String>),
    Count(fn(&mut ClientData) -> &mut u32),
    OptionalCount(fn(&mut ClientData) -> &mut Option<u32>),
    Currency(fn(&mut ClientData) -> &mut f64),
    OptionalCurrency(fn(&mut ClientData) -> &mut Option<f64>),
    Flag(fn(&mut ClientData) -> &mut bool),
    State,
}

impl FieldSlot {
    pub fn value_hint(self) -> &'static str {
        match self {
            FieldSlot::Text(_) => "text",
            FieldSlot::OptionalText(_) => "text | none",
            FieldSlot::Count(_) => "whole number",
            FieldSlot::OptionalCount(_) => "whole number | none",
            FieldSlot::Currency(_) => "amount",
            FieldSlot::OptionalCurrency(_) => "amount | none",
            FieldSlot::Flag(_) => "yes | no",
            FieldSlot::State => "Hawaii | California | Nevada | Texas | Florida | New York | none",
        }
    }
}

#[derive(Clone, Copy)]
pub struct SettableField {
    /// JSON key, matched case-insensitively.
    pub key: &'static str,
    pub slot: FieldSlot,
}

const fn field(key: &'static str, slot: FieldSlot) -> SettableField {
    SettableField { key, slot }
}

pub const SETTABLE_FIELDS: &[SettableField] = &[
    field("name", FieldSlot::Text(|c| &mut c.name)),
    field("age", FieldSlot::Count(|c| &mut c.age)),
    field("dependents", FieldSlot::Count(|c| &mut c.dependents)),
    field("spouseName", FieldSlot::OptionalText(|c| &mut c.spouse_name)),
    field("spouseAge", FieldSlot::OptionalCount(|c| &mut c.spouse_age)),
    field("state", FieldSlot::State),
    field("income", FieldSlot::Currency(|c| &mut c.income)),
    field("spouseIncome", FieldSlot::OptionalCurrency(|c| &mut c.spouse_income)),
    field("checking", FieldSlot::Currency(|c| &mut c.checking)),
    field("savings", FieldSlot::Currency(|c| &mut c.savings)),
    field("retirement401k", FieldSlot::Currency(|c| &mut c.retirement_401k)),
    field("retirementIRA", FieldSlot::Currency(|c| &mut c.retirement_ira)),
    field("brokerage", FieldSlot::Currency(|c| &mut c.brokerage)),
    field("homeValue", FieldSlot::Currency(|c| &mut c.home_value)),
    field("otherAssets", FieldSlot::Currency(|c| &mut c.other_assets)),
    field(
        "lifeInsuranceCoverage",
        FieldSlot::Currency(|c| &mut c.life_insurance_coverage),
    ),
    field(
        "disabilityInsuranceCoverage",
        FieldSlot::Currency(|c| &mut c.disability_insurance_coverage),
    ),
    field("mortgage", FieldSlot::Currency(|c| &mut c.mortgage)),
    field("studentLoans", FieldSlot::Currency(|c| &mut c.student_loans)),
    field("carLoans", FieldSlot::Currency(|c| &mut c.car_loans)),
    field("creditCards", FieldSlot::Currency(|c| &mut c.credit_cards)),
    field("otherDebts", FieldSlot::Currency(|c| &mut c.other_debts)),
    field("monthlyHousing", FieldSlot::Currency(|c| &mut c.monthly_housing)),
    field(
        "monthlyTransportation",
        FieldSlot::Currency(|c| &mut c.monthly_transportation),
    ),
    field("monthlyFood", FieldSlot::Currency(|c| &mut c.monthly_food)),
    field("monthlyUtilities", FieldSlot::Currency(|c| &mut c.monthly_utilities)),
    field("monthlyInsurance", FieldSlot::Currency(|c| &mut c.monthly_insurance)),
    field(
        "monthlyEntertainment",
        FieldSlot::Currency(|c| &mut c.monthly_entertainment),
    ),
    field("monthlyOther", FieldSlot::Currency(|c| &mut c.monthly_other)),
    field("hasLifeInsurance", FieldSlot::Flag(|c| &mut c.has_life_insurance)),
    field(
        "hasDisabilityInsurance",
        FieldSlot::Flag(|c| &mut c.has_disability_insurance),
    ),
    field("hasUmbrellaPolicy", FieldSlot::Flag(|c| &mut c.has_umbrella_policy)),
    field("hasEstatePlan", FieldSlot::Flag(|c| &mut c.has_estate_plan)),
];

pub fn find_field(key: &str) -> Option<&'static SettableField> {
    SETTABLE_FIELDS
        .iter()
        .find(|field| field.key.eq_ignore_ascii_case(key))
}

/// Writes `raw` into the field named `key`, returning the canonical key.
pub fn apply_field(client: &mut ClientData, key: &str, raw: &str) -> Result<&'static str, String> {
    let field = find_field(key).ok_or_else(|| format!("unknown field `{}`", key))?;
    let raw = raw.trim();
    match field.slot {
        FieldSlot::Text(slot) => *slot(client) = raw.to_string(),
        FieldSlot::OptionalText(slot) => {
            *slot(client) = (!is_clear(raw)).then(|| raw.to_string());
        }
        FieldSlot::Count(slot) => *slot(client) = parse_count(field.key, raw)?,
        FieldSlot::OptionalCount(slot) => {
            *slot(client) = if is_clear(raw) {
                None
            } else {
                Some(parse_count(field.key, raw)?)
            };
        }
        FieldSlot::Currency(slot) => *slot(client) = parse_amount(field.key, raw)?,
        FieldSlot::OptionalCurrency(slot) => {
            *slot(client) = if is_clear(raw) {
                None
            } else {
                Some(parse_amount(field.key, raw)?)
            };
        }
        FieldSlot::Flag(slot) => *slot(client) = parse_flag(field.key, raw)?,
        FieldSlot::State => {
            client.state = if is_clear(raw) {
                None
            } else {
                Some(
                    ResidenceState::parse(raw)
                        .ok_or_else(|| format!("unknown state `{}` for state", raw))?,
                )
            };
        }
    }
    Ok(field.key)
}

/// Current value of a field as shown by `fields`.
pub fn display_value(client: &ClientData, field: &SettableField) -> String {
    let mut scratch = client.clone();
    match field.slot {
        FieldSlot::Text(slot) => slot(&mut scratch).clone(),
        FieldSlot::OptionalText(slot) => slot(&mut scratch).clone().unwrap_or_else(|| "-".into()),
        FieldSlot::Count(slot) => slot(&mut scratch).to_string(),
        FieldSlot::OptionalCount(slot) => slot(&mut scratch)
            .map(|value| value.to_string())
            .unwrap_or_else(|| "-".into()),
        FieldSlot::Currency(slot) => format_currency(*slot(&mut scratch)),
        FieldSlot::OptionalCurrency(slot) => slot(&mut scratch)
            .map(format_currency)
            .unwrap_or_else(|| "-".into()),
        FieldSlot::Flag(slot) => if *slot(&mut scratch) { "yes" } else { "no" }.into(),
        FieldSlot::State => client
            .state
            .map(|state| state.to_string())
            .unwrap_or_else(|| "-".into()),
    }
}

fn is_clear(raw: &str) -> bool {
    raw.is_empty() || raw.eq_ignore_ascii_case("none") || raw == "-"
}

fn parse_count(key: &str, raw: &str) -> Result<u32, String> {
    raw.parse()
        .map_err(|_| format!("`{}` is not a whole number for {}", raw, key))
}

fn parse_amount(key: &str, raw: &str) -> Result<f64, String> {
    let cleaned: String = raw
        .chars()
        .filter(|ch| !matches!(ch, '$' | ',' | '_'))
        .collect();
    cleaned
        .parse()
        .map_err(|_| format!("`{}` is not an amount for {}", raw, key))
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, String> {
    match raw.to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "on" | "1" => Ok(true),
        "no" | "n" | "false" | "off" | "0" => Ok(false),
        _ => Err(format!("`{}` is not yes/no for {}", raw, key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique_and_case_insensitive() {
        for (idx, field) in SETTABLE_FIELDS.iter().enumerate() {
            assert!(SETTABLE_FIELDS[idx + 1..]
                .iter()
                .all(|other| !other.key.eq_ignore_ascii_case(field.key)));
        }
        assert_eq!(find_field("MONTHLYFOOD").map(|f| f.key), Some("monthlyFood"));
    }

    #[test]
    fn amounts_accept_currency_punctuation() {
        let mut client = ClientData::default();
        assert_eq!(
            apply_field(&mut client, "income", "$120,000").unwrap(),
            "income"
        );
        apply_field(&mut client, "retirement401K", "50_000").unwrap();
        assert_eq!(client.income, 120_000.0);
        assert_eq!(client.retirement_401k, 50_000.0);
        assert!(apply_field(&mut client, "income", "lots").is_err());
    }

    #[test]
    fn optional_fields_clear_with_none() {
        let mut client = ClientData::default();
        apply_field(&mut client, "spouseIncome", "40000").unwrap();
        assert_eq!(client.spouse_income, Some(40_000.0));
        apply_field(&mut client, "spouseIncome", "none").unwrap();
        assert_eq!(client.spouse_income, None);
    }

    #[test]
    fn flags_counts_and_state() {
        let mut client = ClientData::default();
        apply_field(&mut client, "hasEstatePlan", "yes").unwrap();
        apply_field(&mut client, "dependents", "2").unwrap();
        apply_field(&mut client, "state", "texas").unwrap();
        assert!(client.has_estate_plan);
        assert_eq!(client.dependents, 2);
        assert_eq!(client.state, Some(ResidenceState::Texas));
        assert!(apply_field(&mut client, "dependents", "-1").is_err());
        assert!(apply_field(&mut client, "hasEstatePlan", "maybe").is_err());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut client = ClientData::default();
        let err = apply_field(&mut client, "salary", "1").unwrap_err();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn display_values() {
        let mut client = ClientData::default();
        client.credit_cards = 1_250.0;
        client.has_umbrella_policy = true;
        let cards = find_field("creditCards").unwrap();
        let umbrella = find_field("hasUmbrellaPolicy").unwrap();
        let spouse = find_field("spouseAge").unwrap();
        assert_eq!(display_value(&client, cards), "$1,250");
        assert_eq!(display_value(&client, umbrella), "yes");
        assert_eq!(display_value(&client, spouse), "-");
    }
}
