use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::{instruction::Instruction, sysvar};
use anchor_lang::{system_program, InstructionData, ToAccountMetas};
use nft_program::util::TOKEN_METADATA_PROGRAM_ID;

use crate::accounts::NftAddresses;
use crate::config::NftParams;

/// `create_token` with `payer` acting as mint authority.
pub fn create_token_ix(payer: &Pubkey, addresses: &NftAddresses, params: &NftParams) -> Instruction {
    let accounts = nft_program::accounts::CreateToken {
        payer: *payer,
        mint_account: addresses.mint,
        mint_authority: *payer,
        associated_token_account: addresses.associated_token_account,
        metadata_account: addresses.metadata_account,
        token_metadata_program: TOKEN_METADATA_PROGRAM_ID,
        system_program: system_program::ID,
        token_program: anchor_spl::token::ID,
        associated_token_program: anchor_spl::associated_token::ID,
        rent: sysvar::rent::ID,
    };

    Instruction {
        program_id: nft_program::ID,
        accounts: accounts.to_account_metas(None),
        data: nft_program::instruction::CreateToken {
            nft_name: params.name.clone(),
            nft_symbol: params.symbol.clone(),
            nft_uri: params.uri.clone(),
        }
        .data(),
    }
}

/// `mint_token` with `payer` acting as mint authority.
pub fn mint_token_ix(payer: &Pubkey, addresses: &NftAddresses) -> Instruction {
    let accounts = nft_program::accounts::MintToken {
        payer: *payer,
        mint_account: addresses.mint,
        mint_authority: *payer,
        associated_token_account: addresses.associated_token_account,
        metadata_account: addresses.metadata_account,
        master_edition_account: addresses.master_edition_account,
        token_metadata_program: TOKEN_METADATA_PROGRAM_ID,
        system_program: system_program::ID,
        token_program: anchor_spl::token::ID,
        rent: sysvar::rent::ID,
    };

    Instruction {
        program_id: nft_program::ID,
        accounts: accounts.to_account_metas(None),
        data: nft_program::instruction::MintToken {}.data(),
    }
}
