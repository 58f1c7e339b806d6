use config::Config;
use std::fs::File;
use std::process;
use std::time::Duration;
use wegfinder::api::{endpoint, HttpFetcher};
use wegfinder::model::AddressPolicy;
use wegfinder::status::StatusCodes;
use wegfinder::Error;

const STATUS_CODES: &str = "resources/Config.properties";
const LOG_FILE: &str = "wegfinder.log";
const TIMEOUT_SECS: i64 = 30;

#[derive(Clone, serde::Deserialize)]
pub struct WegfinderConfig {
    station_url: String,
    address_url: String,
    status_codes: String,
    log_file: String,
    /// Request timeout in seconds
    timeout: u64,
    address_policy: AddressPolicy,
    resolve_addresses: bool,
}

pub fn read_settings() -> Result<WegfinderConfig, config::ConfigError> {
    let mut settings = Config::default();
    settings
        .set_default("station_url", endpoint::STATIONS)?
        .set_default("address_url", endpoint::NEARBY_ADDRESS)?
        .set_default("status_codes", STATUS_CODES)?
        .set_default("log_file", LOG_FILE)?
        .set_default("timeout", TIMEOUT_SECS)?
        .set_default("address_policy", "skip")?
        .set_default("resolve_addresses", true)?
        .merge(config::Environment::with_prefix("WEGFINDER"))?;

    settings.try_into()
}

/// Log to `path`, truncating whatever the previous run left there.
fn init_logger(path: &str) -> std::io::Result<()> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

async fn run(settings: WegfinderConfig) -> Result<(), Error> {
    let codes = StatusCodes::load(&settings.status_codes)?;
    let fetcher = HttpFetcher::new(Duration::from_secs(settings.timeout))?;
    let api = wegfinder::api(settings.station_url, settings.address_url);

    let mut stations = wegfinder::stations(&fetcher, &codes, &api).await?;
    println!(
        "The result to part 1:\n{}",
        serde_json::to_string_pretty(&stations)?
    );

    if !settings.resolve_addresses {
        log::info!("Address resolution disabled");
        return Ok(());
    }

    wegfinder::resolve_addresses(
        &fetcher,
        &codes,
        &api,
        &mut stations,
        settings.address_policy,
    )
    .await?;
    println!(
        "The result to part 2:\n{}",
        serde_json::to_string_pretty(&stations)?
    );

    Ok(())
}

#[tokio::main]
async fn main() {
    let settings = read_settings().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    });

    if let Err(e) = init_logger(&settings.log_file) {
        eprintln!("Unable to open log file {}: {}", settings.log_file, e);
        process::exit(1);
    }

    if let Err(e) = run(settings).await {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
