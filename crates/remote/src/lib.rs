//! Hencoop Remote - Supabase REST adapter.
//!
//! Implements the repository traits from `hencoop-core` against a
//! Supabase-style backend: RPC functions under `/rest/v1/rpc/` for the
//! aggregate screen reads and PostgREST table access for request rows.

pub mod client;
pub mod investments;
pub mod market;
pub mod purchases;
pub mod sells;
pub mod settings;
pub mod team;
pub mod wallet;

pub use client::{RemoteClient, RemoteConfig};
pub use investments::RemoteInvestmentRepository;
pub use market::RemoteMarketRepository;
pub use purchases::RemotePurchaseRepository;
pub use sells::RemoteSellRepository;
pub use settings::RemoteSettingsRepository;
pub use team::RemoteTeamRepository;
pub use wallet::RemoteWalletRepository;
