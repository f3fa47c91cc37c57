use std::sync::Arc;

use crate::config::Config;
use crate::data_source::GrowthDataSource;
use crate::models::alumni::AlumniContact;
use crate::models::campaign::AdCampaign;
use crate::models::competitor::Competitor;
use crate::models::post::ContentPost;
use crate::store::RecordStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Built once in `main` and dropped when the server shuts down; the stores
/// live exactly as long as the process serves requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub posts: Arc<RecordStore<ContentPost>>,
    pub alumni: Arc<RecordStore<AlumniContact>>,
    pub campaigns: Arc<RecordStore<AdCampaign>>,
    pub competitors: Arc<RecordStore<Competitor>>,
    /// Pluggable source for alumni, competitor and headline data. Default: MockDataSource.
    pub data_source: Arc<dyn GrowthDataSource>,
}

impl AppState {
    pub fn new(config: Config, data_source: Arc<dyn GrowthDataSource>) -> Self {
        AppState {
            config,
            posts: Arc::new(RecordStore::new()),
            alumni: Arc::new(RecordStore::new()),
            campaigns: Arc::new(RecordStore::new()),
            competitors: Arc::new(RecordStore::new()),
            data_source,
        }
    }

    /// Mock data source and no generation delay.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        let config = Config {
            generation_delay: std::time::Duration::ZERO,
            ..Config::default()
        };
        AppState::new(config, Arc::new(crate::data_source::MockDataSource))
    }
}
