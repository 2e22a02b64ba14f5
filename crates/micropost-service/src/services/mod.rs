pub mod relationship_toggle;
pub mod user_service;
