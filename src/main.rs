#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tinygames_core::SiteConfig;
use tracing_subscriber::EnvFilter;

/// Global site configuration, set from command line
static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the site configuration (set from command line or default)
pub fn get_config() -> SiteConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// TinyGames - casual games listing
#[derive(Parser, Debug)]
#[command(name = "tinygames-desktop")]
#[command(about = "TinyGames - browse and play casual games")]
struct Args {
    /// Game listing endpoint
    #[arg(long)]
    feed_url: Option<String>,

    /// Cards rendered per home page section
    #[arg(long)]
    cards_per_section: Option<usize>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = SiteConfig::default();
    if let Some(url) = args.feed_url {
        config = config.with_feed_url(url);
    }
    if let Some(count) = args.cards_per_section {
        config = config.with_cards_per_section(count);
    }

    tracing::info!(feed_url = %config.feed_url, cards_per_section = config.cards_per_section, "Starting TinyGames");

    let _ = CONFIG.set(config);

    let window_config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("TinyGames")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window_config)
        .launch(app::App);
}
