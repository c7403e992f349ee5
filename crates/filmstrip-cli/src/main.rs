mod cli;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use filmstrip_core::AppConfig;
use filmstrip_persistence::{scan_images, JsonLikesStore, LikesStore};
use filmstrip_tui::App;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("FILMSTRIP_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();
    let config = AppConfig::load();

    let images_dir = cli
        .dir
        .or(config.images_dir.clone())
        .unwrap_or_else(|| PathBuf::from("./images"));
    let likes_file = cli
        .likes
        .or(config.likes_file.clone())
        .unwrap_or_else(|| images_dir.join("likes.json"));
    let cards_per_view = cli
        .cards_per_view
        .filter(|&p| p > 0)
        .unwrap_or_else(|| config.effective_cards_per_view());

    if !images_dir.is_dir() {
        anyhow::bail!("image directory not found: {}", images_dir.display());
    }

    match cli.command {
        None => {
            let store = JsonLikesStore::new(&likes_file);
            let (app, save_rx) = App::new(images_dir, Arc::new(store), cards_per_view);
            app.run(save_rx).await?;
        }
        Some(Commands::Scan { json }) => {
            let cards = scan_images(&images_dir).await?;
            output::print_cards(&cards, json)?;
        }
        Some(Commands::Likes { json }) => {
            let store = JsonLikesStore::new(&likes_file);
            let likes = store.load().await?;
            output::print_likes(&likes, json)?;
        }
    }

    Ok(())
}
