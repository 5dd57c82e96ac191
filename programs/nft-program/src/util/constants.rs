use anchor_lang::solana_program::{pubkey, pubkey::Pubkey};

// ========== TOKEN CONFIGURATION ==========
/// NFTs are SPL tokens with 0 decimals
pub const NFT_DECIMALS: u8 = 0;

/// Amount minted into the associated token account, also the master edition max supply
pub const NFT_MAX_SUPPLY: u64 = 1;

// ========== METAPLEX LIMITS ==========
/// Maximum length for NFT name, in bytes
pub const MAX_NAME_LENGTH: usize = 32;

/// Maximum length for NFT symbol, in bytes
pub const MAX_SYMBOL_LENGTH: usize = 10;

/// Maximum length for NFT metadata URI, in bytes
pub const MAX_URI_LENGTH: usize = 200;

// ========== PDA SEEDS ==========
/// Seed for metadata account
pub const METADATA_SEED: &[u8] = b"metadata";

/// Seed for master edition account
pub const MASTER_EDITION_SEED: &[u8] = b"edition";

// ========== METAPLEX INTEGRATION ==========
/// Metaplex Token Metadata Program ID
pub const TOKEN_METADATA_PROGRAM_ID: Pubkey = pubkey!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");

/// Royalties in basis points (100 = 1%)
pub const SELLER_FEE_BASIS_POINTS: u16 = 100;

/// Royalty share of the single creator, in percent
pub const CREATOR_SHARE: u8 = 100;

/// Metadata can never be updated once created
pub const IS_MUTABLE: bool = false;
