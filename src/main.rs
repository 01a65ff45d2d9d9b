use clap::Parser;
use env_logger::Env;
use log::{info, LevelFilter};
use serde_json::json;

use files_manager_store::config::{Config, DEFAULT_CONFIG_PATH};
use files_manager_store::StoreClient;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "info")]
    log_level: String,

    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Parse command line arguments and setup logging
    let args = Args::parse();
    let log_level = match args.log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level.to_string())).init();

    // 2. Load configuration
    let config = Config::load(&args.config);
    info!("Configuration loaded: {:?}", config);

    // 3. Connect and seed
    let store = StoreClient::new(config.database, config.seed);
    if store.connect().await.is_err() {
        println!("{}", json!({ "db": false }));
        std::process::exit(1);
    }

    let status = json!({
        "db": store.is_alive(),
        "users": store.nb_users().await?,
        "files": store.nb_files().await?,
    });
    println!("{}", status);

    Ok(())
}
