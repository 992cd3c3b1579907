//! Headless admin console driver.
//!
//! Logs in with `CONSOLE_ADMIN_EMAIL` / `CONSOLE_ADMIN_PASSWORD`, loads the
//! dashboard and catalog, and prints a summary.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use console::app::{App, Screen};
use console::config::ConsoleConfig;
use shared::short_reference;

/// Upper bound on waiting for the storefront to answer
const LOAD_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ConsoleConfig::from_env().context("Failed to load configuration")?;
    let _log_guard = console::debug::init_logger(&config);

    let Some((email, password)) = config.admin_credentials() else {
        bail!("Set CONSOLE_ADMIN_EMAIL and CONSOLE_ADMIN_PASSWORD to run the console");
    };

    let mut app = App::new(&config)?;
    app.set_login_credentials(email, password);
    app.submit_login()?;

    tokio::time::timeout(LOAD_TIMEOUT, wait_for_session(&mut app))
        .await
        .context("Timed out waiting for login")??;

    app.refresh_products();
    tokio::time::timeout(LOAD_TIMEOUT, wait_for_loads(&mut app))
        .await
        .context("Timed out waiting for the storefront")?;

    print_summary(&app);

    app.logout();
    let _ = tokio::time::timeout(LOAD_TIMEOUT, app.process_next_event()).await;
    Ok(())
}

/// Apply events until login has either opened the dashboard or failed.
async fn wait_for_session(app: &mut App) -> Result<()> {
    while app.process_next_event().await {
        let state = app.state.read();
        if state.current_screen == Screen::Dashboard {
            return Ok(());
        }
        if !state.login.phase.is_submitting() {
            let reason = state
                .login
                .error
                .clone()
                .unwrap_or_else(|| "Login failed".to_string());
            bail!(reason);
        }
    }
    bail!("Event channel closed")
}

/// Apply events until no store is loading any more.
async fn wait_for_loads(app: &mut App) {
    loop {
        {
            let state = app.state.read();
            let busy = state.orders.is_loading() || state.users.is_loading() || state.products.is_loading();
            if !busy {
                return;
            }
        }
        if !app.process_next_event().await {
            return;
        }
    }
}

fn print_summary(app: &App) {
    let state = app.state.read();

    if let Some(session) = &state.session {
        println!("Signed in as {} <{}>", session.user.name, session.user.email);
    }

    match &state.dashboard {
        Some(metrics) => {
            println!();
            println!("Orders:     {}", metrics.total_orders);
            println!("Customers:  {}", metrics.total_customers);
            println!("Revenue:    ₹{:.2}", metrics.revenue);
            println!("Growth:     {:.1}%", metrics.growth_rate);
            println!(
                "Status:     {} delivered, {} pending, {} cancelled",
                metrics.status_tally.delivered, metrics.status_tally.pending, metrics.status_tally.cancelled
            );
            println!();
            println!("Recent orders:");
            for order in &metrics.recent_orders {
                let customer = order
                    .user
                    .as_ref()
                    .and_then(|u| u.populated())
                    .map(|u| u.name.as_str())
                    .unwrap_or("-");
                println!(
                    "  #{}  {}  {:<20} ₹{:>10.2}  {}",
                    short_reference(&order.id, 6),
                    order.created_at.format("%Y-%m-%d"),
                    customer,
                    order.total_amount,
                    order.status
                );
            }
        }
        None => println!("Dashboard metrics unavailable"),
    }

    println!();
    println!("Products:   {}", state.products.len());

    for notification in state.notifications.iter() {
        eprintln!("[{:?}] {}", notification.level, notification.message);
    }
}
