use anchor_lang::prelude::*;
use paylane_svm_std::messenger::NotifyPayload;

use crate::dispatch;
use crate::events::NotifyRetried;
use crate::instructions::PaylaneError;
use crate::state::{dispatcher_pda, FillRecord, MessengerEntry, MESSENGER_SEED};
use crate::types::IntentData;

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct RetryNotifyArgs {
    pub intent_data: IntentData,
    pub messenger_id: u32,
}

#[derive(Accounts)]
#[instruction(args: RetryNotifyArgs)]
pub struct RetryNotify<'info> {
    #[account(mut)]
    pub relayer: Signer<'info>,
    /// CHECK: address is validated against the recomputed fill-hash
    pub fill_record: UncheckedAccount<'info>,
    #[account(seeds = [MESSENGER_SEED, &args.messenger_id.to_le_bytes()], bump = messenger_entry.bump)]
    pub messenger_entry: Account<'info, MessengerEntry>,
    /// CHECK: address is validated
    #[account(executable, address = messenger_entry.program @ PaylaneError::InvalidMessengerProgram)]
    pub messenger_program: UncheckedAccount<'info>,
    /// CHECK: address is validated
    #[account(address = dispatcher_pda().0 @ PaylaneError::InvalidDispatcher)]
    pub dispatcher: UncheckedAccount<'info>,
}

/// Re-dispatches the notification for an already-executed fill through a
/// (possibly different) adapter. No re-payment and no re-authorization: the
/// fill record pins both the parameters and the relayer entitled to retry.
pub fn retry_notify_intent<'info>(
    ctx: Context<'_, '_, '_, 'info, RetryNotify<'info>>,
    args: RetryNotifyArgs,
) -> Result<()> {
    let RetryNotifyArgs {
        intent_data,
        messenger_id,
    } = args;
    let fill_hash = intent_data.fill_hash();

    require!(
        ctx.accounts.fill_record.key() == FillRecord::pda(&fill_hash).0,
        PaylaneError::InvalidFillRecord
    );
    let record = match FillRecord::try_from_account_info(&ctx.accounts.fill_record)? {
        Some(record) if record.relayer == ctx.accounts.relayer.key() => record,
        _ => return Err(PaylaneError::NotAuthorized.into()),
    };

    let payload = NotifyPayload::new(
        fill_hash,
        intent_data.intent_id,
        record.repayment_address,
        intent_data.destination_amount,
    );
    dispatch::send_message(
        &ctx.accounts.messenger_program,
        &ctx.accounts.dispatcher,
        &ctx.accounts.relayer.to_account_info(),
        ctx.remaining_accounts,
        intent_data.source_chain_id,
        payload.encode(),
    )?;

    emit!(NotifyRetried::new(fill_hash, intent_data.intent_id, messenger_id));

    Ok(())
}
