//! Sells module - egg cashout requests, buyers, and admin review.

mod sells_model;
mod sells_service;
mod sells_traits;

// Re-export the public interface
pub use sells_model::{Buyer, NewSellRequest, SellRequest, SellScreen};
pub use sells_service::SellService;
pub use sells_traits::{SellRepositoryTrait, SellServiceTrait};
