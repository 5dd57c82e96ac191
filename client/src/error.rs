use solana_client::client_error::ClientError;
use solana_sdk::signer::SignerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to load Solana CLI config {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read keypair {path}: {reason}")]
    Keypair { path: String, reason: String },

    #[error("invalid commitment level {0:?}")]
    InvalidCommitment(String),

    #[error("transaction has no signers")]
    MissingSigner,

    #[error("failed to sign transaction: {0}")]
    Signing(#[from] SignerError),

    #[error("rpc request failed: {0}")]
    Rpc(#[from] ClientError),
}
