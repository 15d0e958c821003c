pub mod gamification;
pub mod profile;
pub mod quiz;
pub mod srs;
