//! Plain-text rendering of screens for the terminal.

use hencoop_core::market::BuyScreen;
use hencoop_core::purchases::PurchaseRequest;
use hencoop_core::rewards::RewardFrame;
use hencoop_core::sells::{SellRequest, SellScreen};
use hencoop_core::settings::RateSettings;
use hencoop_core::team::TeamSummary;
use hencoop_core::wallet::WalletView;

pub fn print_frame(frame: &RewardFrame) {
    // Redraw in place so the countdowns tick without scrolling.
    print!("\x1B[2J\x1B[H");
    println!("My Hens  ({})", frame.generated_at.format("%H:%M:%S"));
    println!();
    if frame.is_empty() {
        println!("No active hens found.");
        println!("Buy a hen package to start earning eggs.");
        return;
    }
    for card in &frame.cards {
        println!(
            "  {:<20} #{:<6} +{} eggs/day   next reward in {}   [{:>3.0}%]",
            card.package_label,
            card.batch_ref,
            card.daily_yield,
            card.countdown,
            card.progress * 100.0
        );
    }
}

pub fn print_wallet(view: &WalletView) {
    let snapshot = &view.snapshot;
    println!("Wallet for {}", snapshot.username);
    println!(
        "  {} eggs  (PKR {:.2} at rate {})",
        view.effective_egg_balance,
        view.effective_pkr_value(),
        snapshot.egg_rate
    );
    if snapshot.transactions.is_empty() {
        println!("  No transactions yet.");
        return;
    }
    println!("  History:");
    for tx in &snapshot.transactions {
        println!(
            "    {:<12} {:>10}  {:<9}  {}",
            format!("{:?}", tx.kind),
            tx.amount,
            format!("{:?}", tx.status),
            tx.date.as_deref().unwrap_or("-")
        );
    }
}

pub fn print_buy_screen(screen: &BuyScreen) {
    println!("Hen packages:");
    for pkg in &screen.packages {
        let hot = if pkg.is_hot { "  HOT" } else { "" };
        println!(
            "  {:<16} PKR {:>8}  +{}/day for {} days  {}{}",
            pkg.name,
            pkg.price,
            pkg.daily_profit,
            pkg.duration_days,
            pkg.roi_text.as_deref().unwrap_or(""),
            hot
        );
    }
    println!("Deposit accounts:");
    println!(
        "  Ubank:     {}",
        screen.accounts.ubank_number.as_deref().unwrap_or("not set")
    );
    println!(
        "  EasyPaisa: {}",
        screen
            .accounts
            .easypaisa_number
            .as_deref()
            .unwrap_or("not set")
    );
}

pub fn print_sell_screen(screen: &SellScreen) {
    println!("You have {} eggs to sell.", screen.my_eggs);
    println!("Buyers:");
    for buyer in &screen.buyers {
        let verified = if buyer.is_verified { " [verified]" } else { "" };
        println!(
            "  {:<20} PKR {}/egg  limits {}-{}  pays in {}{}",
            buyer.name, buyer.rate, buyer.min_limit, buyer.max_limit, buyer.time_limit, verified
        );
    }
}

pub fn print_team(summary: &TeamSummary, origin: &str) {
    println!("Team of {}", summary.username);
    println!(
        "  {} direct referrals, PKR {} commission earned",
        summary.direct_count, summary.total_commission
    );
    println!("  Invite link: {}", summary.referral_link(origin));
    for member in &summary.members {
        println!(
            "    {:<20} {:<9} PKR {}",
            member.name,
            format!("{:?}", member.status),
            member.profit
        );
    }
}

pub fn print_rates(settings: &RateSettings) {
    println!("Egg rate:     PKR {}/egg", settings.egg_rate);
    println!("Hen prices:");
    println!("  Starter: PKR {}", settings.starter_hen_price);
    println!("  Bronze:  PKR {}", settings.bronze_hen_price);
    println!("  Golden:  PKR {}", settings.golden_hen_price);
    println!("  Diamond: PKR {}", settings.diamond_hen_price);
    println!("Deposit accounts:");
    println!("  Ubank:     {}", settings.ubank_number);
    println!("  EasyPaisa: {}", settings.easypaisa_number);
}

pub fn print_purchase_requests(requests: &[PurchaseRequest]) {
    if requests.is_empty() {
        println!("No purchase requests.");
        return;
    }
    for req in requests {
        println!(
            "  {}  {:<14} {:<16} PKR {:>8}  {}  trx {}",
            req.id,
            req.user_name,
            req.package_name,
            req.amount,
            req.method.as_str(),
            req.trx_id
        );
    }
}

pub fn print_sell_requests(requests: &[SellRequest]) {
    if requests.is_empty() {
        println!("No sell requests.");
        return;
    }
    for req in requests {
        println!(
            "  {}  {:<14} {:>6} eggs  PKR {:>8}  {} {} ({})",
            req.id,
            req.user_name,
            req.quantity,
            req.total_amount,
            req.wallet_name,
            req.wallet_number,
            req.method.as_str()
        );
    }
}
