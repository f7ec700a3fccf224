//! Named, persisted client snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ClientData, FinancialMetrics, RiskAssessment};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfile {
    pub id: Uuid,
    pub name: String,
    pub data: ClientData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<FinancialMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk: Option<RiskAssessment>,
    pub saved_date: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

impl ClientProfile {
    pub fn new(name: impl Into<String>, data: ClientData) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            data,
            metrics: None,
            risk: None,
            saved_date: now,
            last_modified: now,
        }
    }

    /// Attaches the analysis computed for `data`.
    pub fn with_analysis(mut self, metrics: FinancialMetrics, risk: RiskAssessment) -> Self {
        self.metrics = Some(metrics);
        self.risk = Some(risk);
        self
    }

    /// Replaces the snapshot, keeping identity and the original save date.
    pub fn revise(&mut self, data: ClientData) {
        self.data = data;
        self.metrics = None;
        self.risk = None;
        self.last_modified = Utc::now();
    }
}
