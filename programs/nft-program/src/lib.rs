use anchor_lang::prelude::*;

pub mod context;
pub mod error;
pub mod event;
pub mod instructions;
pub mod util;

pub use context::*;
pub use error::NftProgramError;
pub use event::*;

declare_id!("GUrSjCpQUkXaooRhj7yiCdqy59qJEo5aV2JSGguyBmQ");

#[program]
pub mod nft_program {
    use super::*;

    /// Create the mint, the payer's associated token account and the Metaplex metadata account
    pub fn create_token(
        ctx: Context<CreateToken>,
        nft_name: String,
        nft_symbol: String,
        nft_uri: String,
    ) -> Result<()> {
        instructions::create_token::handler(ctx, nft_name, nft_symbol, nft_uri)
    }

    /// Mint the single token and lock supply with a master edition
    pub fn mint_token(ctx: Context<MintToken>) -> Result<()> {
        instructions::mint_token::handler(ctx)
    }
}
