use std::fmt;

use solana_sdk::{
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair, Signature},
    signer::Signer,
};

use crate::accounts::NftAddresses;
use crate::config::{HarnessConfig, NftParams};
use crate::error::HarnessError;
use crate::instructions::{create_token_ix, mint_token_ix};
use crate::transport::Transport;

pub const CREATE_NFT_CASE: &str = "Create NFT";
pub const MINT_NFT_CASE: &str = "Mint NFT";

#[derive(Debug)]
pub enum CaseOutcome {
    Passed { signature: Signature },
    Failed { error: HarnessError },
}

#[derive(Debug)]
pub struct CaseResult {
    pub name: &'static str,
    pub outcome: CaseOutcome,
}

impl CaseResult {
    pub fn passed(&self) -> bool {
        matches!(self.outcome, CaseOutcome::Passed { .. })
    }
}

#[derive(Debug)]
pub struct HarnessReport {
    pub addresses: NftAddresses,
    pub cases: Vec<CaseResult>,
}

impl HarnessReport {
    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|c| c.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.cases.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

impl fmt::Display for HarnessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mint {}", self.addresses.mint)?;
        for case in &self.cases {
            match &case.outcome {
                CaseOutcome::Passed { signature } => writeln!(f, "  ok   {} ({})", case.name, signature)?,
                CaseOutcome::Failed { error } => writeln!(f, "  FAIL {}: {}", case.name, error)?,
            }
        }
        write!(f, "{} passed, {} failed", self.passed(), self.failed())
    }
}

pub struct Harness<T> {
    transport: T,
    payer: Keypair,
    nft: NftParams,
}

impl<T: Transport> Harness<T> {
    pub fn new(transport: T, payer: Keypair, nft: NftParams) -> Self {
        Self {
            transport,
            payer,
            nft,
        }
    }

    /// Load the payer wallet named by `config`
    pub fn from_config(transport: T, config: &HarnessConfig) -> Result<Self, HarnessError> {
        let payer = read_keypair_file(&config.keypair_path).map_err(|e| HarnessError::Keypair {
            path: config.keypair_path.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self::new(transport, payer, config.nft.clone()))
    }

    pub fn payer(&self) -> Pubkey {
        self.payer.pubkey()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Create then mint an NFT under a freshly generated mint keypair.
    pub async fn run(&self) -> HarnessReport {
        self.run_with_mint(&Keypair::new()).await
    }

    /// Both cases always run; a failed create still lets mint report its own error.
    pub async fn run_with_mint(&self, mint: &Keypair) -> HarnessReport {
        let payer = self.payer.pubkey();
        let addresses = NftAddresses::derive(&payer, &mint.pubkey());

        log::info!("mint {}", addresses.mint);
        log::debug!("associated token account {}", addresses.associated_token_account);
        log::debug!("metadata account {}", addresses.metadata_account);
        log::debug!("master edition account {}", addresses.master_edition_account);

        let mut cases = Vec::with_capacity(2);

        let create = create_token_ix(&payer, &addresses, &self.nft);
        cases.push(self.run_case(CREATE_NFT_CASE, create, mint).await);

        let mint_ix = mint_token_ix(&payer, &addresses);
        cases.push(self.run_case(MINT_NFT_CASE, mint_ix, mint).await);

        HarnessReport { addresses, cases }
    }

    async fn run_case(
        &self,
        name: &'static str,
        instruction: solana_sdk::instruction::Instruction,
        mint: &Keypair,
    ) -> CaseResult {
        log::info!("{}...", name);
        let outcome = match self
            .transport
            .send_instruction(instruction, &[&self.payer, mint])
            .await
        {
            Ok(signature) => {
                log::info!("{} confirmed: {}", name, signature);
                CaseOutcome::Passed { signature }
            }
            Err(error) => {
                log::error!("{} failed: {}", name, error);
                CaseOutcome::Failed { error }
            }
        };
        CaseResult { name, outcome }
    }
}
