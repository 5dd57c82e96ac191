use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::error::NftProgramError;
use crate::util::constants::{MASTER_EDITION_SEED, METADATA_SEED, NFT_DECIMALS, TOKEN_METADATA_PROGRAM_ID};

#[derive(Accounts)]
pub struct MintToken<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Must be a fresh NFT mint controlled by `mint_authority`.
    /// Supply is checked first: a minted NFT's authority already belongs to its edition PDA.
    #[account(
        mut,
        signer,
        constraint = mint_account.supply == 0 @ NftProgramError::AlreadyMinted,
        constraint = mint_account.mint_authority == COption::Some(mint_authority.key()) @ NftProgramError::InvalidMintAuthority,
        constraint = mint_account.decimals == NFT_DECIMALS @ NftProgramError::InvalidMint,
    )]
    pub mint_account: Account<'info, Mint>,

    #[account(mut)]
    pub mint_authority: Signer<'info>,

    #[account(
        mut,
        associated_token::mint = mint_account,
        associated_token::authority = payer,
    )]
    pub associated_token_account: Account<'info, TokenAccount>,

    /// CHECK: Metaplex metadata account created by create_token
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

    /// CHECK: Created by Metaplex; address pinned to the master edition PDA of the mint
    #[account(
        mut,
        seeds = [
            METADATA_SEED,
            TOKEN_METADATA_PROGRAM_ID.as_ref(),
            mint_account.key().as_ref(),
            MASTER_EDITION_SEED,
        ],
        bump,
        seeds::program = TOKEN_METADATA_PROGRAM_ID
    )]
    pub master_edition_account: UncheckedAccount<'info>,

    /// CHECK: Metaplex Token Metadata program, validated by address constraint
    #[account(address = TOKEN_METADATA_PROGRAM_ID @ NftProgramError::InvalidMetadataProgram)]
    pub token_metadata_program: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}
