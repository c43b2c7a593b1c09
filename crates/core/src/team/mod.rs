//! Team module - referral tree and commissions.

mod team_model;
mod team_service;
mod team_traits;

// Re-export the public interface
pub use team_model::{MemberStatus, TeamMember, TeamSummary};
pub use team_service::TeamService;
pub use team_traits::{TeamRepositoryTrait, TeamServiceTrait};
