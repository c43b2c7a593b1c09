use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use hencoop_core::events::{DomainEventSink, NoopEventSink};
use hencoop_core::investments::InvestmentService;
use hencoop_core::market::MarketService;
use hencoop_core::purchases::PurchaseService;
use hencoop_core::sells::SellService;
use hencoop_core::settings::SettingsService;
use hencoop_core::team::TeamService;
use hencoop_core::wallet::{PendingLedger, WalletService};
use hencoop_remote::{
    RemoteClient, RemoteConfig, RemoteInvestmentRepository, RemoteMarketRepository,
    RemotePurchaseRepository, RemoteSellRepository, RemoteSettingsRepository,
    RemoteTeamRepository, RemoteWalletRepository,
};

use crate::config::Config;

pub struct AppState {
    pub investment_service: Arc<InvestmentService>,
    pub wallet_service: Arc<WalletService>,
    pub market_service: Arc<MarketService>,
    pub purchase_service: Arc<PurchaseService>,
    pub sell_service: Arc<SellService>,
    pub team_service: Arc<TeamService>,
    pub settings_service: Arc<SettingsService>,
    pub site_origin: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("HENCOOP_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let client = RemoteClient::new(RemoteConfig {
        base_url: config.base_url.clone(),
        api_key: config.api_key.clone(),
        access_token: config.access_token.clone(),
    })?;

    let event_sink: Arc<dyn DomainEventSink> = Arc::new(NoopEventSink);
    let pending = Arc::new(PendingLedger::new());

    let investment_service = Arc::new(InvestmentService::new(Arc::new(
        RemoteInvestmentRepository::new(client.clone()),
    )));
    let wallet_service = Arc::new(WalletService::new(
        Arc::new(RemoteWalletRepository::new(client.clone())),
        pending.clone(),
    ));
    let market_service = Arc::new(MarketService::new(Arc::new(RemoteMarketRepository::new(
        client.clone(),
    ))));
    let purchase_service = Arc::new(PurchaseService::new(
        Arc::new(RemotePurchaseRepository::new(client.clone())),
        event_sink.clone(),
    ));
    let sell_service = Arc::new(SellService::new(
        Arc::new(RemoteSellRepository::new(client.clone())),
        pending,
        event_sink.clone(),
    ));
    let team_service = Arc::new(TeamService::new(Arc::new(RemoteTeamRepository::new(
        client.clone(),
    ))));
    let settings_service = Arc::new(SettingsService::new(
        Arc::new(RemoteSettingsRepository::new(client)),
        event_sink,
    ));

    Ok(Arc::new(AppState {
        investment_service,
        wallet_service,
        market_service,
        purchase_service,
        sell_service,
        team_service,
        settings_service,
        site_origin: config.site_origin.clone(),
    }))
}
