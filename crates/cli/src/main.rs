use clap::Parser;
use query_atlas_api::AppState;
use query_atlas_domain::{CliOverrides, EnvOverrides};
use std::net::SocketAddr;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "query-atlas")]
#[command(version)]
#[command(about = "Query Atlas - Where your DNS answers live, by country")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Base URL of the AdGuard Home instance
    #[arg(long, value_name = "URL")]
    log_source_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
        log_source_url: cli.log_source_url.clone(),
    };

    let config = bootstrap::load_config(
        cli.config.as_deref(),
        EnvOverrides::from_env(),
        cli_overrides,
    )?;

    bootstrap::init_logging(&config);

    info!("Starting Query Atlas v{}", env!("CARGO_PKG_VERSION"));

    let use_cases = di::UseCases::new(&config)?;

    let app_state = AppState {
        get_traffic: use_cases.get_traffic,
        get_geo_cache_stats: use_cases.get_geo_cache_stats,
    };

    let web_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.web_port)
        .parse()
        .map_err(|e| {
            anyhow::anyhow!(
                "invalid bind address '{}:{}': {}",
                config.server.bind_address,
                config.server.web_port,
                e
            )
        })?;

    let shutdown = server::shutdown_token();
    server::start_web_server(web_addr, app_state, shutdown).await?;

    info!("Server shutdown complete");
    Ok(())
}
