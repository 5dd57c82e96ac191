// End-to-end tests against the compiled program and the Metaplex Token Metadata program.
//
// Both programs run as SBF binaries:
//   cargo build-sbf
//   solana program dump -u m metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s tests/fixtures/mpl_token_metadata.so
//   BPF_OUT_DIR=target/deploy SBF_OUT_DIR=target/deploy cargo test -- --ignored

use anchor_lang::prelude::*;
use anchor_lang::solana_program::{instruction::Instruction, program_option::COption, sysvar};
use anchor_lang::{AccountDeserialize, InstructionData, ToAccountMetas};
use anchor_spl::token::{Mint, TokenAccount};
use nft_program::util::{
    derive_associated_token_account, derive_master_edition_pda, derive_metadata_pda,
    MAX_NAME_LENGTH, TOKEN_METADATA_PROGRAM_ID,
};
use nft_program::NftProgramError;
use solana_program_test::*;
use solana_sdk::{
    instruction::InstructionError,
    signature::Keypair,
    signer::Signer,
    transaction::{Transaction, TransactionError},
};

fn program_test() -> ProgramTest {
    let mut test = ProgramTest::new("nft_program", nft_program::ID, None);
    test.add_program("mpl_token_metadata", TOKEN_METADATA_PROGRAM_ID, None);
    test.prefer_bpf(true);
    test
}

fn create_token_ix(payer: &Pubkey, mint: &Pubkey, name: &str) -> Instruction {
    let accounts = nft_program::accounts::CreateToken {
        payer: *payer,
        mint_account: *mint,
        mint_authority: *payer,
        associated_token_account: derive_associated_token_account(payer, mint),
        metadata_account: derive_metadata_pda(mint).0,
        token_metadata_program: TOKEN_METADATA_PROGRAM_ID,
        system_program: anchor_lang::system_program::ID,
        token_program: anchor_spl::token::ID,
        associated_token_program: anchor_spl::associated_token::ID,
        rent: sysvar::rent::ID,
    };

    Instruction {
        program_id: nft_program::ID,
        accounts: accounts.to_account_metas(None),
        data: nft_program::instruction::CreateToken {
            nft_name: name.to_string(),
            nft_symbol: "SOLС".to_string(),
            nft_uri: String::new(),
        }
        .data(),
    }
}

fn mint_token_ix(payer: &Pubkey, mint: &Pubkey) -> Instruction {
    let accounts = nft_program::accounts::MintToken {
        payer: *payer,
        mint_account: *mint,
        mint_authority: *payer,
        associated_token_account: derive_associated_token_account(payer, mint),
        metadata_account: derive_metadata_pda(mint).0,
        master_edition_account: derive_master_edition_pda(mint).0,
        token_metadata_program: TOKEN_METADATA_PROGRAM_ID,
        system_program: anchor_lang::system_program::ID,
        token_program: anchor_spl::token::ID,
        rent: sysvar::rent::ID,
    };

    Instruction {
        program_id: nft_program::ID,
        accounts: accounts.to_account_metas(None),
        data: nft_program::instruction::MintToken {}.data(),
    }
}

async fn send(
    context: &mut ProgramTestContext,
    ix: Instruction,
    mint: &Keypair,
) -> std::result::Result<(), BanksClientError> {
    let blockhash = context.banks_client.get_latest_blockhash().await?;
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&context.payer.pubkey()),
        &[&context.payer, mint],
        blockhash,
    );
    context.banks_client.process_transaction(tx).await
}

/// Swap the account at `index`, leaving signer and writable flags as they were
fn with_account(mut ix: Instruction, index: usize, key: Pubkey) -> Instruction {
    ix.accounts[index].pubkey = key;
    ix
}

fn custom_code(err: BanksClientError) -> Option<u32> {
    match err.unwrap() {
        TransactionError::InstructionError(0, InstructionError::Custom(code)) => Some(code),
        _ => None,
    }
}

#[tokio::test]
#[ignore = "needs cargo build-sbf output and the mpl_token_metadata.so fixture"]
async fn create_then_mint_leaves_single_token_in_ata() {
    let mut context = program_test().start_with_context().await;
    let payer = context.payer.pubkey();
    let mint = Keypair::new();

    send(&mut context, create_token_ix(&payer, &mint.pubkey(), "Solana Course NFT"), &mint)
        .await
        .unwrap();

    let metadata = context
        .banks_client
        .get_account(derive_metadata_pda(&mint.pubkey()).0)
        .await
        .unwrap()
        .expect("metadata account");
    assert_eq!(metadata.owner, TOKEN_METADATA_PROGRAM_ID);

    send(&mut context, mint_token_ix(&payer, &mint.pubkey()), &mint)
        .await
        .unwrap();

    let ata = context
        .banks_client
        .get_account(derive_associated_token_account(&payer, &mint.pubkey()))
        .await
        .unwrap()
        .expect("associated token account");
    let ata = TokenAccount::try_deserialize(&mut ata.data.as_slice()).unwrap();
    assert_eq!(ata.amount, 1);
    assert_eq!(ata.owner, payer);

    let mint_account = context
        .banks_client
        .get_account(mint.pubkey())
        .await
        .unwrap()
        .expect("mint account");
    let mint_state = Mint::try_deserialize(&mut mint_account.data.as_slice()).unwrap();
    assert_eq!(mint_state.supply, 1);
    assert_eq!(mint_state.decimals, 0);
    // Authority moved to the master edition PDA
    assert_eq!(
        mint_state.mint_authority,
        COption::Some(derive_master_edition_pda(&mint.pubkey()).0)
    );
}

#[tokio::test]
#[ignore = "needs cargo build-sbf output and the mpl_token_metadata.so fixture"]
async fn minting_twice_is_rejected() {
    let mut context = program_test().start_with_context().await;
    let payer = context.payer.pubkey();
    let mint = Keypair::new();

    send(&mut context, create_token_ix(&payer, &mint.pubkey(), "Solana Course NFT"), &mint)
        .await
        .unwrap();
    send(&mut context, mint_token_ix(&payer, &mint.pubkey()), &mint)
        .await
        .unwrap();

    let slot = context.banks_client.get_root_slot().await.unwrap();
    context.warp_to_slot(slot + 2).unwrap();
    let err = send(&mut context, mint_token_ix(&payer, &mint.pubkey()), &mint)
        .await
        .unwrap_err();

    assert_eq!(custom_code(err), Some(u32::from(NftProgramError::AlreadyMinted)));
}

#[tokio::test]
#[ignore = "needs cargo build-sbf output and the mpl_token_metadata.so fixture"]
async fn create_rejects_name_over_limit() {
    let mut context = program_test().start_with_context().await;
    let payer = context.payer.pubkey();
    let mint = Keypair::new();
    let name = "n".repeat(MAX_NAME_LENGTH + 1);

    let err = send(&mut context, create_token_ix(&payer, &mint.pubkey(), &name), &mint)
        .await
        .unwrap_err();

    assert_eq!(custom_code(err), Some(u32::from(NftProgramError::NameTooLong)));
}

#[tokio::test]
#[ignore = "needs cargo build-sbf output and the mpl_token_metadata.so fixture"]
async fn create_rejects_wrong_metadata_program() {
    let mut context = program_test().start_with_context().await;
    let payer = context.payer.pubkey();
    let mint = Keypair::new();
    let ix = with_account(
        create_token_ix(&payer, &mint.pubkey(), "Solana Course NFT"),
        5,
        Pubkey::new_unique(),
    );

    let err = send(&mut context, ix, &mint).await.unwrap_err();

    assert_eq!(
        custom_code(err),
        Some(u32::from(NftProgramError::InvalidMetadataProgram))
    );
}

#[tokio::test]
#[ignore = "needs cargo build-sbf output and the mpl_token_metadata.so fixture"]
async fn create_rejects_metadata_account_off_pda() {
    let mut context = program_test().start_with_context().await;
    let payer = context.payer.pubkey();
    let mint = Keypair::new();
    let ix = with_account(
        create_token_ix(&payer, &mint.pubkey(), "Solana Course NFT"),
        4,
        Pubkey::new_unique(),
    );

    let err = send(&mut context, ix, &mint).await.unwrap_err();

    assert_eq!(
        custom_code(err),
        Some(u32::from(anchor_lang::error::ErrorCode::ConstraintSeeds))
    );
}

#[tokio::test]
#[ignore = "needs cargo build-sbf output and the mpl_token_metadata.so fixture"]
async fn mint_rejects_master_edition_off_pda() {
    let mut context = program_test().start_with_context().await;
    let payer = context.payer.pubkey();
    let mint = Keypair::new();

    send(&mut context, create_token_ix(&payer, &mint.pubkey(), "Solana Course NFT"), &mint)
        .await
        .unwrap();

    // The metadata account is valid here, so the edition is the first seeds check to fail
    let ix = with_account(mint_token_ix(&payer, &mint.pubkey()), 5, Pubkey::new_unique());
    let err = send(&mut context, ix, &mint).await.unwrap_err();

    assert_eq!(
        custom_code(err),
        Some(u32::from(anchor_lang::error::ErrorCode::ConstraintSeeds))
    );
}

#[tokio::test]
#[ignore = "needs cargo build-sbf output and the mpl_token_metadata.so fixture"]
async fn mint_rejects_wrong_metadata_program() {
    let mut context = program_test().start_with_context().await;
    let payer = context.payer.pubkey();
    let mint = Keypair::new();

    send(&mut context, create_token_ix(&payer, &mint.pubkey(), "Solana Course NFT"), &mint)
        .await
        .unwrap();

    let ix = with_account(mint_token_ix(&payer, &mint.pubkey()), 6, Pubkey::new_unique());
    let err = send(&mut context, ix, &mint).await.unwrap_err();

    assert_eq!(
        custom_code(err),
        Some(u32::from(NftProgramError::InvalidMetadataProgram))
    );
}
