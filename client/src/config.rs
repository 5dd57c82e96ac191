use std::path::Path;
use std::str::FromStr;

use solana_cli_config::Config;
use solana_sdk::commitment_config::CommitmentConfig;

use crate::error::HarnessError;

/// Local validator, used when no Solana CLI config file exists
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8899";

pub const DEFAULT_NFT_NAME: &str = "Solana Course NFT";
pub const DEFAULT_NFT_SYMBOL: &str = "SOLС";
pub const DEFAULT_NFT_URI: &str = "";

/// Arguments passed to `create_token`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NftParams {
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

impl Default for NftParams {
    fn default() -> Self {
        Self {
            name: DEFAULT_NFT_NAME.to_string(),
            symbol: DEFAULT_NFT_SYMBOL.to_string(),
            uri: DEFAULT_NFT_URI.to_string(),
        }
    }
}

/// Explicit settings that take precedence over the CLI config file
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub config_file: Option<String>,
    pub rpc_url: Option<String>,
    pub keypair_path: Option<String>,
    pub commitment: Option<String>,
}

#[derive(Clone, Debug)]
pub struct HarnessConfig {
    pub rpc_url: String,
    pub keypair_path: String,
    pub commitment: CommitmentConfig,
    pub nft: NftParams,
}

impl HarnessConfig {
    /// Resolve settings from overrides, then the Solana CLI config file, then defaults.
    pub fn resolve(overrides: Overrides, nft: NftParams) -> Result<Self, HarnessError> {
        let file_config = load_cli_config(overrides.config_file.as_deref())?;

        let rpc_url = overrides
            .rpc_url
            .or_else(|| file_config.as_ref().map(|c| c.json_rpc_url.clone()))
            .unwrap_or_else(|| DEFAULT_RPC_URL.to_string());

        let keypair_path = overrides
            .keypair_path
            .or_else(|| file_config.as_ref().map(|c| c.keypair_path.clone()))
            .unwrap_or_else(|| Config::default().keypair_path);

        let commitment = match overrides.commitment {
            Some(level) => parse_commitment(&level)?,
            None => match file_config.as_ref() {
                Some(c) if !c.commitment.is_empty() => parse_commitment(&c.commitment)?,
                _ => CommitmentConfig::confirmed(),
            },
        };

        Ok(Self {
            rpc_url,
            keypair_path,
            commitment,
            nft,
        })
    }
}

fn parse_commitment(level: &str) -> Result<CommitmentConfig, HarnessError> {
    CommitmentConfig::from_str(level).map_err(|_| HarnessError::InvalidCommitment(level.to_string()))
}

/// An explicitly named file must exist; the default location is optional.
fn load_cli_config(path: Option<&str>) -> Result<Option<Config>, HarnessError> {
    match path {
        Some(path) => Config::load(path)
            .map(Some)
            .map_err(|source| HarnessError::Config {
                path: path.to_string(),
                source,
            }),
        None => match solana_cli_config::CONFIG_FILE.as_ref() {
            Some(default_path) if Path::new(default_path).exists() => Config::load(default_path)
                .map(Some)
                .map_err(|source| HarnessError::Config {
                    path: default_path.clone(),
                    source,
                }),
            _ => Ok(None),
        },
    }
}
