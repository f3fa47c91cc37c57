// Content creation: template-driven post generation and the posts store endpoints.
// No model calls here; posts are composed from fixed template sets.

pub mod composer;
pub mod handlers;
pub mod templates;
pub mod tone;
