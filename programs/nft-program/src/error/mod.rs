use anchor_lang::prelude::*;

#[error_code]
pub enum NftProgramError {
    // ========== INPUT VALIDATION ERRORS ==========
    #[msg("Name must not be empty")]
    EmptyName,

    #[msg("Name too long")]
    NameTooLong,

    #[msg("Symbol too long")]
    SymbolTooLong,

    #[msg("URI too long")]
    UriTooLong,

    // ========== ACCOUNT VALIDATION ERRORS ==========
    #[msg("Invalid Token Metadata program")]
    InvalidMetadataProgram,

    #[msg("Mint authority does not match the mint account")]
    InvalidMintAuthority,

    #[msg("Mint account is not an NFT mint")]
    InvalidMint,

    #[msg("Token has already been minted")]
    AlreadyMinted,

    // ========== METAPLEX ERRORS ==========
    #[msg("Metadata creation failed")]
    MetadataCreationFailed,

    #[msg("Master edition creation failed")]
    MasterEditionCreationFailed,
}
