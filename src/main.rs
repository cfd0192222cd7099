use batch_resizer::{cli::Cli, storage::local::LocalStorageBackend, BatchResizer};
use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // stdout はコンソール出力専用なので、ログは stderr へ
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let resizer = BatchResizer::new(LocalStorageBackend::new(), cli.resize_config());
    debug!("Configuration: {:?}", resizer.config());

    let stdout = io::stdout();
    if let Err(e) = resizer.run(&mut stdout.lock()) {
        error!("Failed to write console output: {e}");
    }

    if !cli.no_pause && io::stdin().is_terminal() && io::stdout().is_terminal() {
        wait_for_enter();
    }
}

/// 対話端末から起動された場合のみ、ENTER が押されるまで待機
fn wait_for_enter() {
    println!("\nPress ENTER to exit.");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if let Err(e) = io::stdin().lock().read_line(&mut line) {
        error!("Failed to read from terminal: {e}");
    }
}
