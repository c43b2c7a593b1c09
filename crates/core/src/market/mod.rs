//! Market module - hen packages and deposit accounts for the buy screen.

mod market_model;
mod market_service;
mod market_traits;

// Re-export the public interface
pub use market_model::{BuyScreen, DepositAccounts, HenPackage, PackageTier, PaymentMethod};
pub use market_service::MarketService;
pub use market_traits::{MarketRepositoryTrait, MarketServiceTrait};
