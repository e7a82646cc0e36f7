// resort-client/examples/availability_watch.rs
// Watch one resort's room availability until Ctrl-C
//
// Usage: availability_watch <resort_id> [username password]

use std::sync::Arc;

use resort_client::logger::init_logger;
use resort_client::{AvailabilityMonitor, ClientConfig, ResortClient, StatsState};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let level = std::env::var("RESORT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    init_logger(&level, false)?;

    let args: Vec<String> = std::env::args().collect();
    let Some(resort_id) = args.get(1).and_then(|a| a.parse::<i64>().ok()) else {
        println!("Usage: {} <resort_id> [username password]", args[0]);
        return Ok(());
    };

    let config = ClientConfig::from_env()?;
    let client = ResortClient::from_config(&config).await?;

    if let (Some(username), Some(password)) = (args.get(2), args.get(3)) {
        let claims = client.login(username, password).await?;
        tracing::info!(user = %claims.username, role = %claims.role, "Signed in");
    }

    let monitor = Arc::new(
        AvailabilityMonitor::new(Arc::new(client), config.schedule.clone(), resort_id)
            .with_poll_interval(config.poll_interval_duration()),
    );
    let mut rx = monitor.subscribe();
    let cancel = CancellationToken::new();

    let task = tokio::spawn({
        let monitor = monitor.clone();
        let cancel = cancel.clone();
        async move { monitor.run(cancel).await }
    });

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                match &*rx.borrow_and_update() {
                    StatsState::Loading => tracing::info!("Loading stats..."),
                    StatsState::Ready(s) => tracing::info!(
                        meal = ?s.meal,
                        available = s.available,
                        occupied = s.occupied,
                        total = s.total_rooms,
                        today = s.today_check_ins,
                        "Availability"
                    ),
                    StatsState::Unavailable { message, .. } => {
                        tracing::warn!(error = %message, "Stats unavailable")
                    }
                }
            }
        }
    }

    cancel.cancel();
    task.await?;
    Ok(())
}
