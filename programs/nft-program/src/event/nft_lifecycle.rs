use anchor_lang::prelude::*;

/// NFT lifecycle events
#[event]
pub struct TokenCreated {
    /// The mint account of the new NFT
    pub mint: Pubkey,
    /// Metaplex metadata account
    pub metadata: Pubkey,
    /// Mint, freeze and update authority
    pub mint_authority: Pubkey,
    pub name: String,
    pub symbol: String,
    /// Metadata URI
    pub uri: String,
    /// Timestamp when created
    pub timestamp: i64,
}

#[event]
pub struct TokenMinted {
    pub mint: Pubkey,
    /// Associated token account that received the token
    pub token_account: Pubkey,
    pub master_edition: Pubkey,
    pub amount: u64,
    /// Maximum number of prints from the master edition
    pub max_supply: u64,
    pub timestamp: i64,
}
