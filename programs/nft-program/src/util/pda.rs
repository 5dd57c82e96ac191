use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;

use super::constants::{MASTER_EDITION_SEED, METADATA_SEED, TOKEN_METADATA_PROGRAM_ID};

/// Derive metadata PDA for a given mint
pub fn derive_metadata_pda(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            METADATA_SEED,
            TOKEN_METADATA_PROGRAM_ID.as_ref(),
            mint.as_ref(),
        ],
        &TOKEN_METADATA_PROGRAM_ID,
    )
}

/// Derive master edition PDA for a given mint
pub fn derive_master_edition_pda(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            METADATA_SEED,
            TOKEN_METADATA_PROGRAM_ID.as_ref(),
            mint.as_ref(),
            MASTER_EDITION_SEED,
        ],
        &TOKEN_METADATA_PROGRAM_ID,
    )
}

/// Associated token account holding `owner`'s balance of `mint`
pub fn derive_associated_token_account(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(owner, mint)
}
