// Competitor tracking. Metrics come from the configured data source.

pub mod handlers;
