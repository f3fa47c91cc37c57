use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Record;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    #[default]
    Active,
}

/// Ad performance counters. Always zero until a real ads integration exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignPerformance {
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub cpa: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdCampaign {
    pub id: String,
    pub name: String,
    pub budget: f64,
    pub target_audience: String,
    pub headlines: Vec<String>,
    pub status: CampaignStatus,
    pub created_at: DateTime<Utc>,
    pub performance: CampaignPerformance,
}

impl AdCampaign {
    pub fn new(name: String, budget: f64, target_audience: String, headlines: Vec<String>) -> Self {
        AdCampaign {
            id: String::new(),
            name,
            budget,
            target_audience,
            headlines,
            status: CampaignStatus::Active,
            created_at: Utc::now(),
            performance: CampaignPerformance::default(),
        }
    }
}

impl Record for AdCampaign {
    const KIND: &'static str = "campaign";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
