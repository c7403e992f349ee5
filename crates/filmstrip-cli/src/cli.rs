use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "filmstrip", version, about = "A terminal image gallery with an infinite carousel")]
pub struct Cli {
    /// Image directory to browse
    #[arg(short, long, env = "FILMSTRIP_DIR")]
    pub dir: Option<PathBuf>,

    /// Likes file (defaults to likes.json next to the images)
    #[arg(long, env = "FILMSTRIP_LIKES")]
    pub likes: Option<PathBuf>,

    /// Cards shown per carousel page
    #[arg(long)]
    pub cards_per_view: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the images the gallery would show
    Scan {
        /// Emit the listing as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the saved likes
    Likes {
        /// Emit the likes as JSON
        #[arg(long)]
        json: bool,
    },
}
