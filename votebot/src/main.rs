//! Votes for emoji, forever.
//!
//! The bot has a sweet tooth and votes for `:doughnut:` 15% of the time, and
//! a juvenile streak that votes for `:poop:` another 20%. Otherwise it picks
//! a listed emoji at random. With `--ttl` it stops cleanly once the time to
//! live has passed.

mod client;
mod strategy;

use std::process::ExitCode;
use std::time::{Duration, Instant};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use crate::client::{BotError, GatewayClient};

#[derive(Parser, Debug)]
#[command(name = "votebot", about = "Generates vote traffic against the emoji vote gateway")]
struct Args {
    /// host:port of the gateway
    target: String,

    /// Milliseconds to sleep between votes
    #[arg(long, default_value_t = 100)]
    sleep_ms: u64,

    /// Seconds to keep voting before exiting
    #[arg(long)]
    ttl: Option<u64>,

    /// Host header to send instead of the target's host
    #[arg(long)]
    host_override: Option<String>,
}

fn deadline_reached(deadline: Option<Instant>, now: Instant) -> bool {
    deadline.is_some_and(|deadline| now >= deadline)
}

async fn round(client: &GatewayClient) -> Result<(), BotError> {
    let shortcodes = client.shortcodes().await?;

    let Some(choice) = strategy::pick(&mut rand::rng(), &shortcodes) else {
        warn!("Gateway listed no emoji, skipping vote");
        return Ok(());
    };

    info!("✔ Voting for {}", choice);
    client.vote(choice).await?;

    let board = client.leaderboard().await?;
    if let Some(leader) = board.first() {
        info!("🏆 Leading: {} {} with {} votes", leader.unicode, leader.shortcode, leader.votes);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let client = match GatewayClient::new(&args.target, args.host_override.clone()) {
        Ok(client) => client,
        Err(e) => {
            error!("{}", e);
            eprintln!("Usage: votebot [--sleep-ms <MS>] [--ttl <SECS>] [--host-override <HOST>] <host:port>");
            return ExitCode::FAILURE;
        }
    };

    info!("🤖 Voting against {} every {}ms", client.base(), args.sleep_ms);
    let sleep = Duration::from_millis(args.sleep_ms);
    let deadline = args.ttl.map(|ttl| Instant::now() + Duration::from_secs(ttl));

    loop {
        if deadline_reached(deadline, Instant::now()) {
            info!("Time to live of {} seconds reached, completing", args.ttl.unwrap_or_default());
            return ExitCode::SUCCESS;
        }
        tokio::time::sleep(sleep).await;
        if let Err(e) = round(&client).await {
            error!("{}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadline_reached() {
        let start = Instant::now();
        let deadline = Some(start + Duration::from_secs(5));
        assert!(!deadline_reached(None, start + Duration::from_secs(3600)));
        assert!(!deadline_reached(deadline, start));
        assert!(!deadline_reached(deadline, start + Duration::from_secs(4)));
        assert!(deadline_reached(deadline, start + Duration::from_secs(5)));
        assert!(deadline_reached(deadline, start + Duration::from_secs(6)));
    }

    #[test]
    fn test_args_accept_ttl_and_host_override() {
        let args = Args::parse_from(["votebot", "--ttl", "30", "--host-override", "web.local", "localhost:8080"]);
        assert_eq!(args.ttl, Some(30));
        assert_eq!(args.host_override.as_deref(), Some("web.local"));
        assert_eq!(args.sleep_ms, 100);

        let args = Args::parse_from(["votebot", "localhost:8080"]);
        assert_eq!(args.ttl, None);
        assert_eq!(args.host_override, None);
    }
}
