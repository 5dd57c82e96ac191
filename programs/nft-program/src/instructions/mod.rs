pub mod create_token;
pub mod mint_token;
