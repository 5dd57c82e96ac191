use anchor_lang::prelude::*;
use anchor_spl::token::{mint_to, MintTo};

use crate::context::MintToken;
use crate::event::TokenMinted;
use crate::util::{metaplex_helpers, NFT_MAX_SUPPLY};

pub fn handler(ctx: Context<MintToken>) -> Result<()> {
    mint_token_to_associated_token_account(&ctx)?;
    create_master_edition_account(&ctx)?;

    let accounts = &ctx.accounts;
    emit!(TokenMinted {
        mint: accounts.mint_account.key(),
        token_account: accounts.associated_token_account.key(),
        master_edition: accounts.master_edition_account.key(),
        amount: NFT_MAX_SUPPLY,
        max_supply: NFT_MAX_SUPPLY,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

fn mint_token_to_associated_token_account(ctx: &Context<MintToken>) -> Result<()> {
    let accounts = &ctx.accounts;

    msg!("Minting token to Associated Token Account...");
    msg!("Mint Account {}", accounts.mint_account.key());
    msg!(
        "Associated Token Account {}",
        accounts.associated_token_account.key()
    );

    mint_to(
        CpiContext::new(
            accounts.token_program.to_account_info(),
            MintTo {
                mint: accounts.mint_account.to_account_info(),
                to: accounts.associated_token_account.to_account_info(),
                authority: accounts.mint_authority.to_account_info(),
            },
        ),
        NFT_MAX_SUPPLY,
    )?;

    msg!(
        "Successfully minted {} token to Associated Token Account {}",
        NFT_MAX_SUPPLY,
        accounts.associated_token_account.key()
    );

    Ok(())
}

// Hands mint and freeze authority over to the edition PDA, so it must run after mint_to.
fn create_master_edition_account(ctx: &Context<MintToken>) -> Result<()> {
    let accounts = &ctx.accounts;

    msg!("Creating Master Edition Account...");
    msg!(
        "Master Edition Account {}",
        accounts.master_edition_account.key()
    );

    metaplex_helpers::create_master_edition_v3(
        &accounts.master_edition_account.to_account_info(),
        &accounts.mint_account.to_account_info(),
        &accounts.mint_authority.to_account_info(),
        &accounts.payer.to_account_info(),
        &accounts.metadata_account.to_account_info(),
        &accounts.token_metadata_program.to_account_info(),
        &accounts.token_program.to_account_info(),
        &accounts.system_program.to_account_info(),
        &accounts.rent.to_account_info(),
    )?;

    msg!(
        "Master Edition Account {} created successfully",
        accounts.master_edition_account.key()
    );

    Ok(())
}
