use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Record;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlumniStatus {
    #[default]
    Pending,
    ConnectionSent,
    FollowSent,
    StorySent,
}

impl AlumniStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlumniStatus::Pending => "pending",
            AlumniStatus::ConnectionSent => "connection_sent",
            AlumniStatus::FollowSent => "follow_sent",
            AlumniStatus::StorySent => "story_sent",
        }
    }
}

/// Raw alumni data as delivered by an import source, before it gets an id.
#[derive(Debug, Clone, PartialEq)]
pub struct AlumniSeed {
    pub name: String,
    pub university: String,
    pub graduation_year: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlumniContact {
    pub id: String,
    pub name: String,
    pub university: String,
    pub graduation_year: i32,
    pub status: AlumniStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    pub imported_at: DateTime<Utc>,
}

impl From<AlumniSeed> for AlumniContact {
    fn from(seed: AlumniSeed) -> Self {
        AlumniContact {
            id: String::new(),
            name: seed.name,
            university: seed.university,
            graduation_year: seed.graduation_year,
            status: AlumniStatus::Pending,
            linkedin_url: None,
            imported_at: Utc::now(),
        }
    }
}

impl Record for AlumniContact {
    const KIND: &'static str = "alumni";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
