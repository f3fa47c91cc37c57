pub mod alumni;
pub mod campaign;
pub mod competitor;
pub mod post;
