use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};
use paylane_svm_std::messenger::{self, NotifyPayload};

use crate::events::{IntentFailed, IntentFilled};
use crate::instructions::PaylaneError;
use crate::state::{
    fee_pool_pda, vault_pda, Config, Intent, IntentStatus, MessengerEntry, CONFIG_SEED,
    MESSENGER_SEED, VAULT_SEED,
};
use crate::types::{self, FailReason};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct NotifyArgs {
    pub messenger_id: u32,
    pub source_chain_id: u64,
    pub payload: Vec<u8>,
}

/// Settlement entry, reachable only by the notifier PDA of the adapter
/// registered under the claimed messenger id. The adapter verifies the outer
/// envelope before it ever invokes this; the fill-hash recomputation below is
/// the last line of defense against a compromised or misconfigured adapter.
#[derive(Accounts)]
#[instruction(args: NotifyArgs)]
pub struct Notify<'info> {
    #[account(seeds = [MESSENGER_SEED, &args.messenger_id.to_le_bytes()], bump = messenger_entry.bump)]
    pub messenger_entry: Account<'info, MessengerEntry>,
    #[account(address = messenger::notifier_pda(&messenger_entry.program).0 @ PaylaneError::NotNotifier)]
    pub notifier: Signer<'info>,
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,
    #[account(mut)]
    pub intent: Account<'info, Intent>,
    #[account(address = intent.source_token @ PaylaneError::InvalidToken)]
    pub mint: InterfaceAccount<'info, Mint>,
    /// CHECK: address is validated
    #[account(address = vault_pda(&intent.intent_id).0 @ PaylaneError::InvalidVault)]
    pub vault: UncheckedAccount<'info>,
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = vault,
        associated_token::token_program = token_program,
    )]
    pub vault_token: InterfaceAccount<'info, TokenAccount>,
    /// CHECK: address is validated
    #[account(address = fee_pool_pda().0 @ PaylaneError::InvalidFeePool)]
    pub fee_pool: UncheckedAccount<'info>,
    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = mint,
        associated_token::authority = fee_pool,
        associated_token::token_program = token_program,
    )]
    pub fee_token: InterfaceAccount<'info, TokenAccount>,
    /// CHECK: validated against the payload's repayment address at settlement
    #[account(mut)]
    pub repayment_token: UncheckedAccount<'info>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn notify_intent<'info>(
    ctx: Context<'_, '_, '_, 'info, Notify<'info>>,
    args: NotifyArgs,
) -> Result<()> {
    let NotifyArgs {
        messenger_id: _,
        source_chain_id,
        payload,
    } = args;
    let payload = NotifyPayload::decode(&payload).ok_or(PaylaneError::InvalidPayload)?;

    require!(
        ctx.accounts.intent.intent_id == payload.intent_id,
        PaylaneError::InvalidIntentAccount
    );
    require!(
        ctx.accounts.intent.status == IntentStatus::Pending,
        PaylaneError::InvalidStatus
    );

    match settlement_verdict(&ctx.accounts.intent, &payload, source_chain_id) {
        Some(reason) => fail_intent(ctx, reason),
        None => settle_intent(ctx, payload),
    }
}

/// The delivered message cannot be retried by the adapter, so a mismatch is
/// not an abort: the intent is parked in `Failed` with the escrow untouched
/// until an operator recovers it.
fn settlement_verdict(
    intent: &Intent,
    payload: &NotifyPayload,
    source_chain_id: u64,
) -> Option<FailReason> {
    if source_chain_id != intent.destination_chain_id {
        return Some(FailReason::WrongSourceChain);
    }
    if payload.fill_hash != intent.to_intent_data().fill_hash() {
        return Some(FailReason::HashMismatch);
    }
    if payload.amount_paid < intent.destination_amount {
        return Some(FailReason::AmountTooLow);
    }

    None
}

fn fail_intent(ctx: Context<Notify>, reason: FailReason) -> Result<()> {
    let intent = &mut ctx.accounts.intent;

    intent.status = IntentStatus::Failed;

    emit!(IntentFailed::new(intent.intent_id, reason));

    Ok(())
}

fn settle_intent<'info>(
    ctx: Context<'_, '_, '_, 'info, Notify<'info>>,
    payload: NotifyPayload,
) -> Result<()> {
    let repayment_token =
        TokenAccount::try_deserialize(&mut &ctx.accounts.repayment_token.try_borrow_data()?[..])?;
    require!(
        repayment_token.owner == payload.repayment_address.to_pubkey()
            && repayment_token.mint == ctx.accounts.intent.source_token,
        PaylaneError::InvalidRepaymentAccount
    );

    let intent_id = ctx.accounts.intent.intent_id;
    let source_amount = ctx.accounts.intent.source_amount;
    let fee = types::fee_amount(source_amount, ctx.accounts.config.fee_bps);
    let (_, bump) = vault_pda(&intent_id);
    let signer_seeds = [VAULT_SEED, intent_id.as_ref(), &[bump]];

    vault_transfer(
        &ctx,
        &ctx.accounts.fee_token.to_account_info(),
        &signer_seeds,
        fee,
    )?;
    vault_transfer(
        &ctx,
        &ctx.accounts.repayment_token,
        &signer_seeds,
        source_amount - fee,
    )?;

    ctx.accounts.intent.status = IntentStatus::Filled;

    emit!(IntentFilled::new(
        intent_id,
        payload.repayment_address,
        payload.amount_paid,
        fee,
    ));

    Ok(())
}

fn vault_transfer<'info>(
    ctx: &Context<'_, '_, '_, 'info, Notify<'info>>,
    to: &AccountInfo<'info>,
    signer_seeds: &[&[u8]],
    amount: u64,
) -> Result<()> {
    match amount {
        0 => Ok(()),
        amount => transfer_checked(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                TransferChecked {
                    from: ctx.accounts.vault_token.to_account_info(),
                    to: to.to_account_info(),
                    mint: ctx.accounts.mint.to_account_info(),
                    authority: ctx.accounts.vault.to_account_info(),
                },
                &[signer_seeds],
            ),
            amount,
            ctx.accounts.mint.decimals,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paylane_svm_std::Bytes32;

    fn intent() -> Intent {
        Intent {
            intent_id: [1u8; 32].into(),
            sender: Pubkey::new_from_array([2u8; 32]),
            refund_target: Pubkey::new_from_array([3u8; 32]),
            source_token: Pubkey::new_from_array([4u8; 32]),
            source_amount: 1_000_000_000,
            destination_chain_id: 8453,
            destination_token: [5u8; 32].into(),
            receiver: [6u8; 32].into(),
            destination_amount: 995_000_000,
            deadline: 1_700_000_000,
            created_at: 1_699_999_000,
            relayer: Bytes32::ZERO,
            status: IntentStatus::Pending,
            bump: 254,
        }
    }

    fn matching_payload(intent: &Intent) -> NotifyPayload {
        NotifyPayload::new(
            intent.to_intent_data().fill_hash(),
            intent.intent_id,
            [7u8; 32].into(),
            intent.destination_amount,
        )
    }

    #[test]
    fn matching_notification_settles() {
        let intent = intent();

        assert_eq!(
            settlement_verdict(
                &intent,
                &matching_payload(&intent),
                intent.destination_chain_id,
            ),
            None
        );
    }

    #[test]
    fn overpayment_still_settles() {
        let intent = intent();
        let mut payload = matching_payload(&intent);
        payload.amount_paid = intent.destination_amount + 1;

        assert_eq!(
            settlement_verdict(&intent, &payload, intent.destination_chain_id),
            None
        );
    }

    #[test]
    fn mutated_receiver_fails_hash_binding() {
        let intent = intent();
        let mut drifted = intent.to_intent_data();
        drifted.receiver = [9u8; 32].into();
        let payload = NotifyPayload::new(
            drifted.fill_hash(),
            intent.intent_id,
            [7u8; 32].into(),
            intent.destination_amount,
        );

        assert_eq!(
            settlement_verdict(&intent, &payload, intent.destination_chain_id),
            Some(FailReason::HashMismatch)
        );
    }

    #[test]
    fn one_unit_short_fails_amount_check() {
        let intent = intent();
        let mut payload = matching_payload(&intent);
        payload.amount_paid = intent.destination_amount - 1;

        assert_eq!(
            settlement_verdict(&intent, &payload, intent.destination_chain_id),
            Some(FailReason::AmountTooLow)
        );
    }

    #[test]
    fn wrong_origin_chain_fails() {
        let intent = intent();

        assert_eq!(
            settlement_verdict(
                &intent,
                &matching_payload(&intent),
                intent.destination_chain_id + 1,
            ),
            Some(FailReason::WrongSourceChain)
        );
    }
}
