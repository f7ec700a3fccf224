//! Plain-text rendering of an [`Analysis`] for the shell and exports.

use std::fmt;

use finhealth_core::{
    format_currency, format_multiple, format_percentage, to_fixed, Analysis, HealthRating,
    DEFAULT_PERCENT_DECIMALS,
};
use finhealth_domain::{
    ClientData, CurrencyField, ASSET_FIELDS, LIABILITY_FIELDS, MONTHLY_EXPENSE_FIELDS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub percent_decimals: usize,
    pub include_recommendations: bool,
    /// List every non-zero asset, liability and expense line under the totals.
    pub itemize: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            percent_decimals: DEFAULT_PERCENT_DECIMALS,
            include_recommendations: true,
            itemize: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    Heading(String),
    Field { label: String, value: String },
    Text(String),
    Item(String),
}

impl ReportLine {
    fn field(label: impl Into<String>, value: impl Into<String>) -> Self {
        ReportLine::Field {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::Heading(title) => write!(f, "=== {} ===", title),
            ReportLine::Field { label, value } => write!(f, "  {:<26} {}", label, value),
            ReportLine::Text(text) => write!(f, "  {}", text),
            ReportLine::Item(text) => write!(f, "    - {}", text),
        }
    }
}

pub fn render_report(analysis: &Analysis, options: &ReportOptions) -> Vec<ReportLine> {
    let mut lines = snapshot_lines(analysis, options);
    lines.extend(score_lines(analysis));
    lines.extend(risk_lines(analysis, options));
    lines
}

pub fn snapshot_lines(analysis: &Analysis, options: &ReportOptions) -> Vec<ReportLine> {
    let client = &analysis.client;
    let metrics = &analysis.metrics;
    let mut lines = vec![ReportLine::Heading("Financial snapshot".into())];

    lines.push(ReportLine::field("Client", client_label(client)));
    lines.push(ReportLine::field(
        "Total assets",
        format_currency(metrics.total_assets),
    ));
    if options.itemize {
        lines.extend(itemized(client, &ASSET_FIELDS));
    }
    lines.push(ReportLine::field(
        "Total liabilities",
        format_currency(metrics.total_liabilities),
    ));
    if options.itemize {
        lines.extend(itemized(client, &LIABILITY_FIELDS));
    }
    lines.push(ReportLine::field("Net worth", format_currency(metrics.net_worth)));
    lines.push(ReportLine::field(
        "Total income",
        format_currency(metrics.total_income),
    ));
    lines.push(ReportLine::field(
        "Monthly expenses",
        format_currency(metrics.total_monthly_expenses),
    ));
    if options.itemize {
        lines.extend(itemized(client, &MONTHLY_EXPENSE_FIELDS));
    }
    lines.push(ReportLine::field(
        "Annual expenses",
        format_currency(metrics.annual_expenses),
    ));
    lines.push(ReportLine::field(
        "Debt-to-income",
        format_multiple(metrics.debt_to_income_ratio),
    ));
    lines.push(ReportLine::field(
        "Savings rate",
        format_percentage(metrics.savings_rate, options.percent_decimals),
    ));
    lines.push(ReportLine::field(
        "Emergency fund",
        format!("{} months", to_fixed(metrics.emergency_fund_months, 1)),
    ));
    lines.push(ReportLine::field(
        "Life insurance",
        coverage_summary(
            metrics.life_insurance_needed,
            metrics.life_insurance_gap,
        ),
    ));
    lines.push(ReportLine::field(
        "Disability insurance",
        coverage_summary(
            metrics.disability_insurance_needed,
            metrics.disability_insurance_gap,
        ),
    ));
    lines
}

pub fn score_lines(analysis: &Analysis) -> Vec<ReportLine> {
    let metrics = &analysis.metrics;
    let rating = HealthRating::from_score(metrics.health_score);
    let mut lines = vec![
        ReportLine::Heading("Health score".into()),
        ReportLine::field(
            "Score",
            format!("{}/100 ({})", metrics.health_score, rating),
        ),
    ];
    for (label, points, max) in metrics.health_score_breakdown.components() {
        lines.push(ReportLine::field(label, format!("{}/{}", points, max)));
    }
    lines
}

pub fn risk_lines(analysis: &Analysis, options: &ReportOptions) -> Vec<ReportLine> {
    let risk = &analysis.risk;
    let mut lines = vec![
        ReportLine::Heading("Risk assessment".into()),
        ReportLine::field(
            "Overall risk score",
            format!("{}/100", risk.overall_risk_score),
        ),
    ];
    for category in risk.categories.iter() {
        lines.push(ReportLine::field(
            category.name.clone(),
            format!(
                "{} (risk {}/100)",
                category.status.label().to_uppercase(),
                category.score
            ),
        ));
        lines.push(ReportLine::Text(category.message.clone()));
        if options.include_recommendations {
            lines.extend(category.recommendations.iter().cloned().map(ReportLine::Item));
        }
    }
    if risk.critical_gaps.is_empty() {
        lines.push(ReportLine::field("Critical gaps", "none"));
    } else {
        lines.push(ReportLine::field("Critical gaps", risk.critical_gaps.join(", ")));
    }
    lines
}

fn client_label(client: &ClientData) -> String {
    let name = if client.name.trim().is_empty() {
        "(unnamed)"
    } else {
        client.name.as_str()
    };
    let mut label = format!("{}, age {}", name, client.age);
    if client.dependents > 0 {
        label.push_str(&format!(", {} dependents", client.dependents));
    }
    if let Some(state) = client.state {
        label.push_str(&format!(", {}", state));
    }
    label
}

fn itemized(client: &ClientData, fields: &[CurrencyField]) -> Vec<ReportLine> {
    fields
        .iter()
        .map(|field| (field.label, (field.read)(client)))
        .filter(|(_, amount)| *amount != 0.0)
        .map(|(label, amount)| ReportLine::Item(format!("{}: {}", label, format_currency(amount))))
        .collect()
}

fn coverage_summary(needed: f64, gap: f64) -> String {
    format!(
        "needs {}, gap {}",
        format_currency(needed),
        format_currency(gap)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Analysis {
        Analysis::run(ClientData {
            name: "Young Household".into(),
            age: 35,
            income: 120_000.0,
            checking: 5_000.0,
            savings: 20_000.0,
            retirement_401k: 50_000.0,
            monthly_housing: 1_500.0,
            ..ClientData::default()
        })
    }

    fn field_value<'a>(lines: &'a [ReportLine], wanted: &str) -> Option<&'a str> {
        lines.iter().find_map(|line| match line {
            ReportLine::Field { label, value } if label == wanted => Some(value.as_str()),
            _ => None,
        })
    }

    #[test]
    fn report_has_three_sections_in_order() {
        let lines = render_report(&sample(), &ReportOptions::default());
        let headings: Vec<_> = lines
            .iter()
            .filter_map(|line| match line {
                ReportLine::Heading(title) => Some(title.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            headings,
            ["Financial snapshot", "Health score", "Risk assessment"]
        );
    }

    #[test]
    fn snapshot_formats_currency_and_ratios() {
        let lines = snapshot_lines(&sample(), &ReportOptions::default());
        assert_eq!(field_value(&lines, "Client"), Some("Young Household, age 35"));
        assert_eq!(field_value(&lines, "Net worth"), Some("$75,000"));
        assert_eq!(field_value(&lines, "Savings rate"), Some("85.0%"));
        assert_eq!(field_value(&lines, "Emergency fund"), Some("16.7 months"));
        assert_eq!(field_value(&lines, "Debt-to-income"), Some("0.0x"));
        assert_eq!(
            field_value(&lines, "Life insurance"),
            Some("needs $1,200,000, gap $1,200,000")
        );
    }

    #[test]
    fn percent_decimals_follow_options() {
        let options = ReportOptions {
            percent_decimals: 2,
            ..ReportOptions::default()
        };
        let lines = snapshot_lines(&sample(), &options);
        assert_eq!(field_value(&lines, "Savings rate"), Some("85.00%"));
    }

    #[test]
    fn itemize_lists_non_zero_fields_only() {
        let options = ReportOptions {
            itemize: true,
            ..ReportOptions::default()
        };
        let lines = snapshot_lines(&sample(), &options);
        let items: Vec<_> = lines
            .iter()
            .filter_map(|line| match line {
                ReportLine::Item(text) => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            items,
            [
                "Checking: $5,000",
                "Savings: $20,000",
                "401(k): $50,000",
                "Housing: $1,500",
            ]
        );
    }

    #[test]
    fn score_section_shows_rating_and_budgets() {
        let lines = score_lines(&sample());
        assert_eq!(field_value(&lines, "Score"), Some("63/100 (Good)"));
        assert_eq!(field_value(&lines, "Protection coverage"), Some("0/25"));
        assert_eq!(field_value(&lines, "Net-worth growth"), Some("3/15"));
    }

    #[test]
    fn risk_section_lists_categories_and_gaps() {
        let lines = risk_lines(&sample(), &ReportOptions::default());
        assert_eq!(field_value(&lines, "Overall risk score"), Some("54/100"));
        assert_eq!(
            field_value(&lines, "Life Insurance"),
            Some("CRITICAL (risk 95/100)")
        );
        assert_eq!(
            field_value(&lines, "Critical gaps"),
            Some("Life Insurance, Disability Insurance")
        );
        assert!(lines.contains(&ReportLine::Item(
            "Recommended coverage: $$1,200,000".into()
        )));
    }

    #[test]
    fn recommendations_can_be_hidden() {
        let options = ReportOptions {
            include_recommendations: false,
            ..ReportOptions::default()
        };
        let lines = risk_lines(&sample(), &options);
        assert!(!lines.iter().any(|line| matches!(line, ReportLine::Item(_))));
    }

    #[test]
    fn lines_render_as_text() {
        assert_eq!(
            ReportLine::Heading("Health score".into()).to_string(),
            "=== Health score ==="
        );
        assert_eq!(
            ReportLine::Item("Avoid new debt".into()).to_string(),
            "    - Avoid new debt"
        );
    }
}
