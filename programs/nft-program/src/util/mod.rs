pub mod constants;
pub mod metaplex_helpers;
pub mod pda;
pub mod validation;

pub use constants::*;
pub use pda::*;
pub use validation::*;
