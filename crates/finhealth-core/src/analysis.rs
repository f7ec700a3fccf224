use finhealth_domain::{ClientData, ClientProfile, FinancialMetrics, RiskAssessment};
use serde::Serialize;

use crate::{calculate_financial_metrics, generate_risk_assessment};

/// A snapshot together with both engine outputs, recomputed as a unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub client: ClientData,
    pub metrics: FinancialMetrics,
    pub risk: RiskAssessment,
}

impl Analysis {
    pub fn run(client: ClientData) -> Self {
        let metrics = calculate_financial_metrics(&client);
        let risk = generate_risk_assessment(&client, &metrics);
        Self {
            client,
            metrics,
            risk,
        }
    }

    /// Analyses a stored profile from its data, ignoring any cached results.
    pub fn of_profile(profile: &ClientProfile) -> Self {
        Self::run(profile.data.clone())
    }

    pub fn into_profile(self, name: impl Into<String>) -> ClientProfile {
        ClientProfile::new(name, self.client).with_analysis(self.metrics, self.risk)
    }
}
