//! CryptAPI demo
//!
//! Runs every SDK operation against the gateway for the merchant described
//! in a TOML file, through either the blocking or the async client.

mod config;

use std::path::PathBuf;

use clap::Parser;
use config::FileConfig;
use cryptapi_sdk::qr::SvgQrEncoder;
use cryptapi_sdk::{AsyncClient, AsyncGateway, BlockingClient, BlockingGateway};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Exercise the CryptAPI gateway from the command line
#[derive(Parser, Debug)]
#[command(name = "cryptapi-demo")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "./demo-config.toml")]
    config: PathBuf,

    /// Use the async client instead of the blocking one
    #[arg(long = "async", default_value = "false")]
    use_async: bool,

    /// Override the configured coin (e.g. btc, trc20_usdt)
    #[arg(long)]
    coin: Option<String>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();

    let file_config = FileConfig::load(&args.config).map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;
    tracing::info!("Configuration loaded from {:?}", args.config);

    if args.use_async {
        // Blocking reqwest must not run inside a runtime, so the async flow
        // gets its own.
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        runtime.block_on(run_async(&file_config, args.coin.as_deref()))
    } else {
        run_blocking(&file_config, args.coin.as_deref())
    }
}

fn run_blocking(file_config: &FileConfig, coin: Option<&str>) -> anyhow::Result<()> {
    let demo = &file_config.demo;
    let merchant = file_config.merchant_config(coin)?;
    let coin = merchant.coin().to_string();
    let gateway = BlockingGateway::with_config(&file_config.gateway)?;

    print_result("supported coins", &gateway.get_supported_coins()?)?;
    print_result("info", &gateway.get_info(Some(&coin))?)?;
    print_result(
        "estimate",
        &gateway.get_estimate(&coin, demo.estimate_addresses, &demo.priority)?,
    )?;

    let mut client = BlockingClient::with_gateway(merchant, gateway);
    print_result("address", &client.get_address()?)?;
    print_result("logs", &client.get_logs()?)?;
    print_result(
        "qrcode",
        &client.get_qrcode(demo.value.as_deref(), demo.qr_size)?,
    )?;
    print_result(
        "local qrcode",
        &client.render_qrcode(demo.value.as_deref(), demo.qr_size, &SvgQrEncoder)?,
    )?;
    print_result(
        "conversion",
        &client.get_conversion(&demo.convert_from, demo.convert_value)?,
    )?;
    Ok(())
}

async fn run_async(file_config: &FileConfig, coin: Option<&str>) -> anyhow::Result<()> {
    let demo = &file_config.demo;
    let merchant = file_config.merchant_config(coin)?;
    let coin = merchant.coin().to_string();
    let gateway = AsyncGateway::with_config(&file_config.gateway);

    print_result("supported coins", &gateway.get_supported_coins().await?)?;
    print_result("info", &gateway.get_info(Some(&coin)).await?)?;
    print_result(
        "estimate",
        &gateway
            .get_estimate(&coin, demo.estimate_addresses, &demo.priority)
            .await?,
    )?;

    let mut client = AsyncClient::with_gateway(merchant, gateway);
    print_result("address", &client.get_address().await?)?;
    print_result("logs", &client.get_logs().await?)?;
    print_result(
        "qrcode",
        &client
            .get_qrcode(demo.value.as_deref(), demo.qr_size)
            .await?,
    )?;
    print_result(
        "local qrcode",
        &client.render_qrcode(demo.value.as_deref(), demo.qr_size, &SvgQrEncoder)?,
    )?;
    print_result(
        "conversion",
        &client
            .get_conversion(&demo.convert_from, demo.convert_value)
            .await?,
    )?;
    Ok(())
}

fn print_result(label: &str, value: &impl Serialize) -> anyhow::Result<()> {
    println!("== {label}");
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Initialize the tracing subscriber with environment-based filtering.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cryptapi_sdk=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
