pub mod investment_service;
pub mod plan_service;
pub mod projection_service;
pub mod wallet_service;
