use anyhow::{bail, Context};
use clap::Parser;
use nft_client::config::{Overrides, DEFAULT_NFT_NAME, DEFAULT_NFT_SYMBOL, DEFAULT_NFT_URI};
use nft_client::{Harness, HarnessConfig, NftParams, RpcTransport};

/// Create and mint an NFT through nft-program, logging each step
#[derive(Debug, Parser)]
#[command(name = "nft-harness", version)]
struct Cli {
    /// Solana CLI config file
    #[arg(short = 'C', long = "config")]
    config_file: Option<String>,

    /// JSON RPC URL of the cluster
    #[arg(short = 'u', long = "url", env = "ANCHOR_PROVIDER_URL")]
    rpc_url: Option<String>,

    /// Payer and mint authority keypair
    #[arg(short = 'k', long = "keypair", env = "ANCHOR_WALLET")]
    keypair: Option<String>,

    /// processed, confirmed or finalized
    #[arg(long)]
    commitment: Option<String>,

    #[arg(long, default_value = DEFAULT_NFT_NAME)]
    name: String,

    #[arg(long, default_value = DEFAULT_NFT_SYMBOL)]
    symbol: String,

    #[arg(long, default_value = DEFAULT_NFT_URI)]
    uri: String,

    /// Exit with an error if any case fails
    #[arg(long)]
    strict: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = HarnessConfig::resolve(
        Overrides {
            config_file: cli.config_file,
            rpc_url: cli.rpc_url,
            keypair_path: cli.keypair,
            commitment: cli.commitment,
        },
        NftParams {
            name: cli.name,
            symbol: cli.symbol,
            uri: cli.uri,
        },
    )?;
    log::info!("cluster {} ({:?})", config.rpc_url, config.commitment.commitment);

    let harness = Harness::from_config(RpcTransport::new(&config), &config)
        .context("failed to set up harness")?;
    log::info!("payer {}", harness.payer());
    let report = harness.run().await;
    log::info!("{}", report);

    if cli.strict && !report.all_passed() {
        bail!("{} of {} cases failed", report.failed(), report.cases.len());
    }
    Ok(())
}
