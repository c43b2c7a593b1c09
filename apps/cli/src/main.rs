mod config;
mod main_lib;
mod views;

use std::sync::Arc;

use config::Config;
use main_lib::{build_state, init_tracing, AppState};

use hencoop_core::investments::InvestmentServiceTrait;
use hencoop_core::market::MarketServiceTrait;
use hencoop_core::purchases::{PurchaseServiceTrait, RequestStatus};
use hencoop_core::rewards::RewardTicker;
use hencoop_core::sells::SellServiceTrait;
use hencoop_core::settings::SettingsServiceTrait;
use hencoop_core::team::TeamServiceTrait;
use hencoop_core::utils::time_utils::SystemClock;
use hencoop_core::wallet::WalletServiceTrait;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();
    let config = Config::from_env()?;
    let state = build_state(&config)?;

    let command = std::env::args().nth(1).unwrap_or_else(|| "watch".to_string());
    match command.as_str() {
        "watch" => watch(&state).await?,
        "wallet" => views::print_wallet(&state.wallet_service.refresh_wallet().await?),
        "market" => views::print_buy_screen(&state.market_service.load_buy_screen().await?),
        "sell" => views::print_sell_screen(&state.sell_service.load_sell_screen().await?),
        "team" => views::print_team(&state.team_service.load_team().await?, &state.site_origin),
        "deposits" => views::print_purchase_requests(
            &state
                .purchase_service
                .list_requests(RequestStatus::Pending)
                .await?,
        ),
        "withdrawals" => views::print_sell_requests(
            &state
                .sell_service
                .list_requests(RequestStatus::Pending)
                .await?,
        ),
        "rates" => views::print_rates(&state.settings_service.load_settings().await?),
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!(
                "Usage: hencoop [watch|wallet|market|sell|team|deposits|withdrawals|rates]"
            );
            std::process::exit(2);
        }
    }
    Ok(())
}

/// Live reward view: one fetch, then a local 1-second countdown until
/// Ctrl-C. The ticker is dropped on every exit path, which cancels the
/// recurring tick.
async fn watch(state: &Arc<AppState>) -> anyhow::Result<()> {
    let snapshot = state.investment_service.load_snapshot().await;
    tracing::info!("Watching {} active hens", snapshot.len());

    let ticker = RewardTicker::mount(snapshot, Arc::new(SystemClock));
    let mut frames = ticker.subscribe();

    views::print_frame(&ticker.current_frame());
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = frames.changed() => {
                if changed.is_err() {
                    break;
                }
                views::print_frame(&frames.borrow_and_update().clone());
            }
        }
    }
    ticker.unmount();
    println!();
    Ok(())
}
