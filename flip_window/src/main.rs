//! flip_window: interactive entry point.

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use flip_window::app::run;
use flip_window::cli::Cli;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cfg = Cli::parse().into_config();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Page Flip — drag to turn pages               ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
    println!("  {} pages, {}×{} per page", cfg.pages, cfg.book.page_width, cfg.book.page_height);
    println!("  Q / Esc quits.  RUST_LOG=page_flip=debug shows gestures.");
    println!();

    if let Err(e) = run(cfg) {
        error!("{e}");
        std::process::exit(1);
    }
}
