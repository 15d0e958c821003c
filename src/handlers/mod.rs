pub mod friends;
pub mod goals;
pub mod identity;
pub mod profile;
pub mod quiz;
pub mod ranking;
pub mod reviews;
pub mod sessions;
pub mod subjects;
