use anchor_lang::prelude::*;

use super::constants::{MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH, MAX_URI_LENGTH};
use crate::error::NftProgramError;

/// Check name, symbol and URI against the Metaplex byte limits.
/// Symbol and URI may be empty; the name may not.
pub fn validate_token_fields(name: &str, symbol: &str, uri: &str) -> Result<()> {
    require!(!name.is_empty(), NftProgramError::EmptyName);
    require!(name.len() <= MAX_NAME_LENGTH, NftProgramError::NameTooLong);
    require!(symbol.len() <= MAX_SYMBOL_LENGTH, NftProgramError::SymbolTooLong);
    require!(uri.len() <= MAX_URI_LENGTH, NftProgramError::UriTooLong);
    Ok(())
}
