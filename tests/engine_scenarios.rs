mod common;

use common::young_household;
use finhealth::domain::{ClientData, RiskCategoryKind, RiskStatus};
use finhealth::engine::{validate_client, Analysis, HealthRating};

fn households() -> Vec<ClientData> {
    let mut out = Vec::new();
    for (idx, income) in [0.0, 35_000.0, 85_000.0, 240_000.0].into_iter().enumerate() {
        for flags in 0..16u8 {
            out.push(ClientData {
                name: format!("grid-{idx}-{flags}"),
                age: 25 + (flags as u32) * 3,
                income,
                spouse_income: (flags % 3 == 0).then_some(income / 2.0),
                checking: 1_000.0 * f64::from(flags),
                savings: 4_000.0 * idx as f64,
                retirement_401k: 15_000.0 * f64::from(flags),
                home_value: if flags & 1 == 1 { 350_000.0 } else { 0.0 },
                mortgage: if flags & 1 == 1 { 280_000.0 } else { 0.0 },
                credit_cards: 900.0 * f64::from(flags),
                monthly_housing: 1_200.0 + 100.0 * idx as f64,
                monthly_food: 450.0,
                life_insurance_coverage: 100_000.0 * f64::from(flags % 5),
                disability_insurance_coverage: 12_000.0 * f64::from(flags % 4),
                has_life_insurance: flags & 1 == 1,
                has_disability_insurance: flags & 2 == 2,
                has_umbrella_policy: flags & 4 == 4,
                has_estate_plan: flags & 8 == 8,
                ..ClientData::default()
            });
        }
    }
    out
}

#[test]
fn young_household_end_to_end() {
    let analysis = Analysis::run(young_household());

    assert_eq!(analysis.metrics.health_score, 63);
    assert_eq!(
        HealthRating::from_score(analysis.metrics.health_score),
        HealthRating::Good
    );
    assert_eq!(analysis.risk.overall_risk_score, 54);
    assert_eq!(
        analysis.risk.categories.get(RiskCategoryKind::Retirement).message,
        "Retirement savings at 0.4x income"
    );
}

#[test]
fn grid_respects_engine_invariants() {
    for client in households() {
        validate_client(&client).expect("grid clients are valid");
        let analysis = Analysis::run(client);
        let metrics = &analysis.metrics;
        let risk = &analysis.risk;

        assert_eq!(metrics.net_worth, metrics.total_assets - metrics.total_liabilities);
        assert!(metrics.life_insurance_gap >= 0.0);
        assert!(metrics.disability_insurance_gap >= 0.0);
        assert!(metrics.health_score <= 100);
        assert!(risk.overall_risk_score <= 100);
        assert!(
            metrics
                .health_score
                .abs_diff(metrics.health_score_breakdown.displayed_total())
                <= 2,
            "{}",
            analysis.client.name
        );

        let critical: Vec<_> = risk
            .categories
            .iter()
            .filter(|category| category.status == RiskStatus::Critical)
            .map(|category| category.name.clone())
            .collect();
        assert_eq!(risk.critical_gaps, critical, "{}", analysis.client.name);
    }
}

#[test]
fn analysis_serializes_with_camel_case_keys() {
    let analysis = Analysis::run(young_household());
    let json = serde_json::to_value(&analysis).expect("serialize analysis");

    assert_eq!(json["metrics"]["healthScore"], 63);
    assert_eq!(json["metrics"]["healthScoreBreakdown"]["netWorthGrowth"], 3);
    assert_eq!(json["risk"]["overallRiskScore"], 54);
    assert_eq!(
        json["risk"]["categories"]["lifeInsurance"]["status"],
        "critical"
    );
    assert_eq!(json["client"]["retirement401k"], 50_000.0);
}

#[test]
fn analysis_is_deterministic() {
    let first = Analysis::run(young_household());
    let second = Analysis::run(young_household());
    assert_eq!(first, second);
}
