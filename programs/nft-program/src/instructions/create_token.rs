use anchor_lang::prelude::*;

use crate::context::CreateToken;
use crate::event::TokenCreated;
use crate::util::{metaplex_helpers, validate_token_fields};

/// Mint and associated token account are created by the account constraints;
/// this handler adds the Metaplex metadata account on top.
pub fn handler(
    ctx: Context<CreateToken>,
    nft_name: String,
    nft_symbol: String,
    nft_uri: String,
) -> Result<()> {
    validate_token_fields(&nft_name, &nft_symbol, &nft_uri)?;

    let accounts = &ctx.accounts;
    let mint_key = accounts.mint_account.key();

    msg!("Mint Account {} created successfully", mint_key);
    msg!(
        "Associated Token Account {} created successfully",
        accounts.associated_token_account.key()
    );

    msg!("Creating Metadata Account...");
    msg!("Metadata Account {}", accounts.metadata_account.key());

    let data = metaplex_helpers::nft_data(
        nft_name.clone(),
        nft_symbol.clone(),
        nft_uri.clone(),
        accounts.mint_authority.key(),
    );

    metaplex_helpers::create_metadata_account_v3(
        &accounts.metadata_account.to_account_info(),
        &accounts.mint_account.to_account_info(),
        &accounts.mint_authority.to_account_info(),
        &accounts.payer.to_account_info(),
        &accounts.token_metadata_program.to_account_info(),
        &accounts.system_program.to_account_info(),
        &accounts.rent.to_account_info(),
        data,
    )?;

    msg!(
        "Metadata Account {} created successfully",
        accounts.metadata_account.key()
    );

    emit!(TokenCreated {
        mint: mint_key,
        metadata: accounts.metadata_account.key(),
        mint_authority: accounts.mint_authority.key(),
        name: nft_name,
        symbol: nft_symbol,
        uri: nft_uri,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
