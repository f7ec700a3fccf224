use finhealth_domain::{ClientData, ASSET_FIELDS, LIABILITY_FIELDS, MONTHLY_EXPENSE_FIELDS};

use crate::CoreError;

/// Checks the numeric domain the engines expect: finite, non-negative amounts.
///
/// The engines themselves never call this; it is meant for input surfaces.
pub fn validate_client(data: &ClientData) -> Result<(), CoreError> {
    let singles = [
        ("Income", data.income),
        ("Spouse income", data.spouse_income.unwrap_or(0.0)),
        ("Life insurance coverage", data.life_insurance_coverage),
        (
            "Disability insurance coverage",
            data.disability_insurance_coverage,
        ),
    ];
    let grouped = ASSET_FIELDS
        .iter()
        .chain(LIABILITY_FIELDS.iter())
        .map(|field| (field.label, (field.read)(data)));
    let monthly = MONTHLY_EXPENSE_FIELDS
        .iter()
        .map(|field| (field.label, (field.read)(data)));

    for (label, value) in singles.into_iter().chain(grouped) {
        check_amount(label, value)?;
    }
    for (label, value) in monthly {
        check_amount(&format!("Monthly {}", label.to_lowercase()), value)?;
    }
    Ok(())
}

fn check_amount(label: &str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() {
        return Err(CoreError::Validation(format!(
            "{} must be a finite number",
            label
        )));
    }
    if value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{} cannot be negative",
            label
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zeroed_client() {
        assert_eq!(validate_client(&ClientData::default()), Ok(()));
    }

    #[test]
    fn rejects_negative_balance_by_label() {
        let client = ClientData {
            credit_cards: -10.0,
            ..ClientData::default()
        };
        assert_eq!(
            validate_client(&client),
            Err(CoreError::Validation(
                "Credit cards cannot be negative".into()
            ))
        );
    }

    #[test]
    fn rejects_non_finite_monthly_expense() {
        let client = ClientData {
            monthly_food: f64::INFINITY,
            ..ClientData::default()
        };
        let err = validate_client(&client).unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: Monthly food must be a finite number");
    }

    #[test]
    fn rejects_nan_spouse_income() {
        let client = ClientData {
            spouse_income: Some(f64::NAN),
            ..ClientData::default()
        };
        assert!(validate_client(&client).is_err());
    }
}
