use anchor_lang::prelude::*;
use anchor_lang::solana_program::{instruction::Instruction, program::invoke};
use mpl_token_metadata::{
    instructions::{
        CreateMasterEditionV3, CreateMasterEditionV3InstructionArgs, CreateMetadataAccountV3,
        CreateMetadataAccountV3InstructionArgs,
    },
    types::{Creator, DataV2},
};

use super::constants::{CREATOR_SHARE, IS_MUTABLE, NFT_MAX_SUPPLY, SELLER_FEE_BASIS_POINTS};
use crate::error::NftProgramError;

/// On-chain descriptive data for a new NFT. The mint authority is recorded as
/// the sole, unverified creator.
pub fn nft_data(name: String, symbol: String, uri: String, creator: Pubkey) -> DataV2 {
    DataV2 {
        name,
        symbol,
        uri,
        seller_fee_basis_points: SELLER_FEE_BASIS_POINTS,
        creators: Some(vec![Creator {
            address: creator,
            verified: false,
            share: CREATOR_SHARE,
        }]),
        collection: None,
        uses: None,
    }
}

/// Build `CreateMetadataAccountV3` with `mint_authority` doubling as the signing update authority
pub fn create_metadata_account_v3_ix(
    metadata: Pubkey,
    mint: Pubkey,
    mint_authority: Pubkey,
    payer: Pubkey,
    system_program: Pubkey,
    rent: Pubkey,
    data: DataV2,
) -> Instruction {
    CreateMetadataAccountV3 {
        metadata,
        mint,
        mint_authority,
        payer,
        update_authority: (mint_authority, true),
        system_program,
        rent: Some(rent),
    }
    .instruction(CreateMetadataAccountV3InstructionArgs {
        data,
        is_mutable: IS_MUTABLE,
        collection_details: None,
    })
}

/// Build `CreateMasterEditionV3` capping prints at `NFT_MAX_SUPPLY`
pub fn create_master_edition_v3_ix(
    edition: Pubkey,
    mint: Pubkey,
    authority: Pubkey,
    payer: Pubkey,
    metadata: Pubkey,
    token_program: Pubkey,
    system_program: Pubkey,
    rent: Pubkey,
) -> Instruction {
    CreateMasterEditionV3 {
        edition,
        mint,
        update_authority: authority,
        mint_authority: authority,
        payer,
        metadata,
        token_program,
        system_program,
        rent: Some(rent),
    }
    .instruction(CreateMasterEditionV3InstructionArgs {
        max_supply: Some(NFT_MAX_SUPPLY),
    })
}

/// Create Metaplex metadata account using CPI to mpl-token-metadata
pub fn create_metadata_account_v3<'info>(
    metadata_account: &AccountInfo<'info>,
    mint_account: &AccountInfo<'info>,
    mint_authority: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    metadata_program: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    rent: &AccountInfo<'info>,
    data: DataV2,
) -> Result<()> {
    let instruction = create_metadata_account_v3_ix(
        metadata_account.key(),
        mint_account.key(),
        mint_authority.key(),
        payer.key(),
        system_program.key(),
        rent.key(),
        data,
    );

    invoke(
        &instruction,
        &[
            metadata_account.clone(),
            mint_account.clone(),
            mint_authority.clone(),
            payer.clone(),
            system_program.clone(),
            rent.clone(),
            metadata_program.clone(),
        ],
    )
    .map_err(|e| {
        msg!("Failed to create metadata account: {:?}", e);
        NftProgramError::MetadataCreationFailed
    })?;

    Ok(())
}

/// Create master edition for NFT uniqueness using CPI to mpl-token-metadata
pub fn create_master_edition_v3<'info>(
    master_edition_account: &AccountInfo<'info>,
    mint_account: &AccountInfo<'info>,
    mint_authority: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    metadata_account: &AccountInfo<'info>,
    metadata_program: &AccountInfo<'info>,
    token_program: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    rent: &AccountInfo<'info>,
) -> Result<()> {
    let instruction = create_master_edition_v3_ix(
        master_edition_account.key(),
        mint_account.key(),
        mint_authority.key(),
        payer.key(),
        metadata_account.key(),
        token_program.key(),
        system_program.key(),
        rent.key(),
    );

    invoke(
        &instruction,
        &[
            master_edition_account.clone(),
            mint_account.clone(),
            mint_authority.clone(),
            payer.clone(),
            metadata_account.clone(),
            token_program.clone(),
            system_program.clone(),
            rent.clone(),
            metadata_program.clone(),
        ],
    )
    .map_err(|e| {
        msg!("Failed to create master edition: {:?}", e);
        NftProgramError::MasterEditionCreationFailed
    })?;

    Ok(())
}
