//! Purchases module - hen purchase requests and their admin approval.

mod purchases_model;
mod purchases_service;
mod purchases_traits;

// Re-export the public interface
pub use purchases_model::{NewPurchaseRequest, PurchaseRequest, RequestStatus};
pub use purchases_service::PurchaseService;
pub use purchases_traits::{PurchaseRepositoryTrait, PurchaseServiceTrait};
