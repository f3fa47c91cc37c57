// Alumni engagement: mock imports, outreach campaigns, status tracking.

pub mod campaign;
pub mod handlers;
