//! Outreach campaigns: maps a campaign action code to the status each targeted
//! contact moves to.
//!
//! NOTE: an unrecognised action code leaves every status unchanged but the
//! targeted contacts are still counted as processed. Clients read
//! `contacts_processed` as "ids that matched", not "statuses that changed".

use std::collections::HashSet;

use tracing::{info, warn};

use crate::models::alumni::{AlumniContact, AlumniStatus};
use crate::store::RecordStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignAction {
    Connection,
    Follow,
    Story,
}

impl CampaignAction {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "connection" => Some(CampaignAction::Connection),
            "follow" => Some(CampaignAction::Follow),
            "story" => Some(CampaignAction::Story),
            _ => None,
        }
    }

    pub fn resulting_status(&self) -> AlumniStatus {
        match self {
            CampaignAction::Connection => AlumniStatus::ConnectionSent,
            CampaignAction::Follow => AlumniStatus::FollowSent,
            CampaignAction::Story => AlumniStatus::StorySent,
        }
    }
}

/// Applies the campaign to every stored contact whose id is in `alumni_ids`.
///
/// Returns the number of contacts processed. Unknown ids are skipped and
/// duplicate ids count once. Best-effort: there is no failure path.
pub async fn start_campaign(
    alumni: &RecordStore<AlumniContact>,
    action_code: Option<&str>,
    alumni_ids: &[String],
) -> usize {
    let action = action_code.and_then(CampaignAction::from_code);
    if action.is_none() {
        warn!("Unrecognised campaign type {action_code:?}; statuses will not change");
    }

    let targets: HashSet<&str> = alumni_ids.iter().map(String::as_str).collect();
    let processed = alumni
        .update_matching(
            |contact| targets.contains(contact.id.as_str()),
            |contact| {
                if let Some(action) = action {
                    contact.status = action.resulting_status();
                }
            },
        )
        .await;

    info!("Campaign {action_code:?} processed {processed} contacts");
    processed
}
