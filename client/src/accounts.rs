use anchor_lang::prelude::Pubkey;
use nft_program::util::{
    derive_associated_token_account, derive_master_edition_pda, derive_metadata_pda,
};

/// Every address the two instructions touch that depends on the mint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NftAddresses {
    pub mint: Pubkey,
    /// Payer's associated token account for `mint`
    pub associated_token_account: Pubkey,
    pub metadata_account: Pubkey,
    pub master_edition_account: Pubkey,
}

impl NftAddresses {
    pub fn derive(payer: &Pubkey, mint: &Pubkey) -> Self {
        Self {
            mint: *mint,
            associated_token_account: derive_associated_token_account(payer, mint),
            metadata_account: derive_metadata_pda(mint).0,
            master_edition_account: derive_master_edition_pda(mint).0,
        }
    }
}
