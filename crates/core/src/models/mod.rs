pub mod investment;
pub mod plan;
pub mod projection;
pub mod settings;
pub mod user;
pub mod wallet;
