pub mod create_token;
pub mod mint_token;

pub use create_token::*;
pub use mint_token::*;
