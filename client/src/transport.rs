use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    hash::Hash,
    instruction::Instruction,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::Transaction,
};

use crate::config::HarnessConfig;
use crate::error::HarnessError;

/// Submits a single-instruction transaction. The first signer pays the fee.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send_instruction(
        &self,
        instruction: Instruction,
        signers: &[&Keypair],
    ) -> Result<Signature, HarnessError>;
}

/// Sign `instruction` with the first signer as fee payer. A signer set that
/// does not match the message is reported, not panicked on.
pub fn signed_transaction(
    instruction: Instruction,
    signers: &[&Keypair],
    blockhash: Hash,
) -> Result<Transaction, HarnessError> {
    let payer = signers.first().ok_or(HarnessError::MissingSigner)?.pubkey();
    let mut transaction = Transaction::new_with_payer(&[instruction], Some(&payer));
    transaction.try_sign(signers, blockhash)?;
    Ok(transaction)
}

pub struct RpcTransport {
    client: RpcClient,
}

impl RpcTransport {
    pub fn new(config: &HarnessConfig) -> Self {
        Self {
            client: RpcClient::new_with_commitment(config.rpc_url.clone(), config.commitment),
        }
    }
}

impl Transport for RpcTransport {
    async fn send_instruction(
        &self,
        instruction: Instruction,
        signers: &[&Keypair],
    ) -> Result<Signature, HarnessError> {
        if signers.is_empty() {
            return Err(HarnessError::MissingSigner);
        }
        let blockhash = self.client.get_latest_blockhash().await?;
        let transaction = signed_transaction(instruction, signers, blockhash)?;

        Ok(self
            .client
            .send_and_confirm_transaction(&transaction)
            .await?)
    }
}
