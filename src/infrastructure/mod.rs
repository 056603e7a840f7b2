pub mod configuration;
pub mod messaging;
pub mod repositories;
pub mod tables;
