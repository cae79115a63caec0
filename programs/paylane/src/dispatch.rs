//! Outbound leg of the messenger abstraction: a CPI into whichever adapter
//! program is registered under the caller-chosen messenger id.

use std::iter;

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program::invoke_signed;
use paylane_svm_std::messenger::{SendMessageArgs, SEND_MESSAGE_DISCRIMINATOR};

use crate::state::{dispatcher_pda, DISPATCHER_SEED};

/// Invokes the adapter's `send_message` instruction. The dispatcher PDA signs
/// to prove the dispatch originated from this program; the payer covers
/// whatever relay fee the adapter charges; remaining accounts are forwarded
/// verbatim.
pub fn send_message<'info>(
    messenger_program: &AccountInfo<'info>,
    dispatcher: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    remaining_accounts: &[AccountInfo<'info>],
    destination_chain: u64,
    payload: Vec<u8>,
) -> Result<()> {
    let args = SendMessageArgs::new(destination_chain, payload);
    let ix_data: Vec<_> = SEND_MESSAGE_DISCRIMINATOR
        .into_iter()
        .chain(args.try_to_vec()?)
        .collect();

    let (_, bump) = dispatcher_pda();
    let signer_seeds = [DISPATCHER_SEED, &[bump]];

    let account_metas = [
        AccountMeta::new_readonly(dispatcher.key(), true),
        AccountMeta::new(payer.key(), true),
    ]
    .into_iter()
    .chain(remaining_accounts.iter().map(|account| AccountMeta {
        pubkey: account.key(),
        is_signer: account.is_signer,
        is_writable: account.is_writable,
    }))
    .collect();

    let ix = Instruction::new_with_bytes(messenger_program.key(), &ix_data, account_metas);

    invoke_signed(
        &ix,
        iter::once(dispatcher.to_account_info())
            .chain(iter::once(payer.to_account_info()))
            .chain(remaining_accounts.iter().map(ToAccountInfo::to_account_info))
            .collect::<Vec<_>>()
            .as_slice(),
        &[&signer_seeds],
    )
    .map_err(Into::into)
}
