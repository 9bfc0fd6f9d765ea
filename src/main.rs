use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

mod client;
mod config;
mod constants;
mod domain;
mod handler;
mod state;
mod theme;
mod tui;
mod ui;

use crate::{config::AppConfig, state::App};

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ASCII art logo
const LOGO: &str = r#"
██╗      █████╗ ███████╗██╗   ██╗██╗███╗   ██╗██╗   ██╗ ██████╗ ██╗ ██████╗███████╗
██║     ██╔══██╗╚══███╔╝╚██╗ ██╔╝██║████╗  ██║██║   ██║██╔═══██╗██║██╔════╝██╔════╝
██║     ███████║  ███╔╝  ╚████╔╝ ██║██╔██╗ ██║██║   ██║██║   ██║██║██║     █████╗
██║     ██╔══██║ ███╔╝    ╚██╔╝  ██║██║╚██╗██║╚██╗ ██╔╝██║   ██║██║██║     ██╔══╝
███████╗██║  ██║███████╗   ██║   ██║██║ ╚████║ ╚████╔╝ ╚██████╔╝██║╚██████╗███████╗
╚══════╝╚═╝  ╚═╝╚══════╝   ╚═╝   ╚═╝╚═╝  ╚═══╝  ╚═══╝   ╚═════╝ ╚═╝ ╚═════╝╚══════╝
"#;

/// LazyInvoice - terminal UI for a small invoicing backend
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Backend base URL, overriding the configured one
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display version with ASCII art
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logging first; a TUI owns stdout, so events go to stderr and are
    // only visible when RUST_LOG is set (or the output is redirected).
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Some(Commands::Version) = cli.command {
        println!("{LOGO}");
        println!("LazyInvoice v{VERSION}");
        println!("A terminal UI for managing clients and invoices");
        return Ok(());
    }

    color_eyre::install()?;

    let mut config = AppConfig::load();
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }

    let mut terminal = tui::init()?;
    let mut app = App::new(config);
    let result = app.run(&mut terminal).await;

    tui::restore()?;
    result
}
