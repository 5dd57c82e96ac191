use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::error::NftProgramError;
use crate::util::constants::{METADATA_SEED, NFT_DECIMALS, TOKEN_METADATA_PROGRAM_ID};

#[derive(Accounts)]
pub struct CreateToken<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        mint::decimals = NFT_DECIMALS,
        mint::authority = mint_authority,
        mint::freeze_authority = mint_authority,
    )]
    pub mint_account: Account<'info, Mint>,

    #[account(mut)]
    pub mint_authority: Signer<'info>,

    #[account(
        init,
        payer = payer,
        associated_token::mint = mint_account,
        associated_token::authority = payer,
    )]
    pub associated_token_account: Account<'info, TokenAccount>,

    /// CHECK: Created by Metaplex; address pinned to the metadata PDA of the mint
    #[account(
        mut,
        seeds = [
            METADATA_SEED,
            TOKEN_METADATA_PROGRAM_ID.as_ref(),
            mint_account.key().as_ref(),
        ],
        bump,
        seeds::program = TOKEN_METADATA_PROGRAM_ID
    )]
    pub metadata_account: UncheckedAccount<'info>,

    /// CHECK: Metaplex Token Metadata program, validated by address constraint
    #[account(address = TOKEN_METADATA_PROGRAM_ID @ NftProgramError::InvalidMetadataProgram)]
    pub token_metadata_program: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub rent: Sysvar<'info, Rent>,
}
