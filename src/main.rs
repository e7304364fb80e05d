#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod drag;
mod notify;
mod theme;
mod tray;

use std::sync::OnceLock;
use std::time::Duration;

use bubblechat_core::ClientConfig;
use clap::Parser;
use dioxus::desktop::{Config, LogicalPosition, LogicalSize, WindowBuilder};

/// Global client config, set from command line
static CLIENT_CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Username given on the command line, if any
static PRESET_USERNAME: OnceLock<Option<String>> = OnceLock::new();

/// Get the client config (set from command line or default)
pub fn get_client_config() -> ClientConfig {
    CLIENT_CONFIG.get().cloned().unwrap_or_default()
}

/// Get the username passed via --username
pub fn get_preset_username() -> Option<String> {
    PRESET_USERNAME.get().cloned().flatten()
}

/// Bubble Chat - always-on-top chat bubble
#[derive(Parser, Debug)]
#[command(name = "bubblechat-desktop")]
#[command(about = "Bubble Chat - a tiny always-on-top chat window")]
struct Args {
    /// Chat server base URL
    #[arg(long, default_value = bubblechat_core::config::DEFAULT_SERVER_URL)]
    server: String,

    /// Username to chat as (skips the prompt)
    #[arg(short, long)]
    username: Option<String>,

    /// Delay between polls in milliseconds
    #[arg(long, default_value_t = 1000)]
    poll_interval_ms: u64,

    /// Per-request timeout in milliseconds
    #[arg(long, default_value_t = 3000)]
    timeout_ms: u64,

    /// Verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn client_config(&self) -> ClientConfig {
        ClientConfig {
            server_url: self.server.clone(),
            poll_interval: Duration::from_millis(self.poll_interval_ms),
            request_timeout: Duration::from_millis(self.timeout_ms),
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = args.client_config();
    if let Err(e) = config.validate() {
        tracing::error!("{}", e);
        std::process::exit(2);
    }

    tracing::info!(
        server = %config.server_url,
        poll_ms = args.poll_interval_ms,
        timeout_ms = args.timeout_ms,
        "Starting Bubble Chat"
    );

    let _ = CLIENT_CONFIG.set(config);
    let _ = PRESET_USERNAME.set(args.username);

    // Frameless, always on top, dark rounded panel drawn by CSS
    let config = Config::new()
        .with_menu(None)
        .with_background_color((0, 0, 0, 0))
        .with_window(
            WindowBuilder::new()
                .with_title("Chat")
                .with_inner_size(LogicalSize::new(360.0, 500.0))
                .with_position(LogicalPosition::new(100.0, 100.0))
                .with_decorations(false)
                .with_always_on_top(true)
                .with_transparent(true),
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
