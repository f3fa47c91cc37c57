// Ad optimization: campaign records and headline templates.

pub mod handlers;
pub mod headlines;
