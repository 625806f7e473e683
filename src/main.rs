use std::{net::SocketAddr, path::PathBuf};

use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use statsify::{config, error, server, state::AppState, success, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Address to listen on, overrides SERVER_ADDRESS
    #[clap(long)]
    address: Option<SocketAddr>,

    /// Load environment variables from this file instead of the defaults
    #[clap(long)]
    env_file: Option<PathBuf>,

    /// Open the home page in the default browser once listening
    #[clap(long)]
    open: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = config::load_env(cli.env_file.as_deref()) {
        error!("Cannot load environment. Err: {}", e);
    }

    let mut config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Invalid configuration: {}", e),
    };
    if let Some(address) = cli.address {
        config.server_address = address;
    }

    let listener = match server::bind(config.server_address).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", config.server_address, e),
    };

    let local_addr = listener.local_addr().unwrap_or(config.server_address);
    success!("Server is running on http://{}", local_addr);

    if cli.open {
        let url = format!("http://localhost:{}/", local_addr.port());
        if webbrowser::open(&url).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                url
            )
        }
    }

    if let Err(e) = server::serve(listener, AppState::new(config)).await {
        error!("Server stopped: {}", e);
    }
}
