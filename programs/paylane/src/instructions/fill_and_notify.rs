use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};
use paylane_svm_std::account::InitOnce;
use paylane_svm_std::messenger::NotifyPayload;
use paylane_svm_std::{Bytes32, CHAIN_ID};

use crate::dispatch;
use crate::events::{FillExecuted, NotifySent};
use crate::instructions::PaylaneError;
use crate::state::{
    dispatcher_pda, Config, FillRecord, MessengerEntry, RelayerEntry, RelayerRole, CONFIG_SEED,
    FILL_RECORD_SEED, MESSENGER_SEED, RELAYER_SEED,
};
use crate::types::{self, IntentData};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct FillAndNotifyArgs {
    pub intent_data: IntentData,
    pub repayment_address: Bytes32,
    pub messenger_id: u32,
}

#[derive(Accounts)]
#[instruction(args: FillAndNotifyArgs)]
pub struct FillAndNotify<'info> {
    #[account(mut)]
    pub relayer: Signer<'info>,
    #[account(seeds = [RELAYER_SEED, relayer.key().as_ref()], bump = relayer_entry.bump)]
    pub relayer_entry: Account<'info, RelayerEntry>,
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,
    /// CHECK: address is validated
    #[account(mut)]
    pub fill_record: UncheckedAccount<'info>,
    #[account(address = args.intent_data.destination_token.to_pubkey() @ PaylaneError::InvalidToken)]
    pub mint: InterfaceAccount<'info, Mint>,
    #[account(mut, token::mint = mint, token::authority = relayer)]
    pub relayer_token: InterfaceAccount<'info, TokenAccount>,
    /// CHECK: address is validated
    #[account(address = args.intent_data.receiver.to_pubkey() @ PaylaneError::InvalidReceiver)]
    pub receiver: UncheckedAccount<'info>,
    #[account(
        init_if_needed,
        payer = relayer,
        associated_token::mint = mint,
        associated_token::authority = receiver,
        associated_token::token_program = token_program,
    )]
    pub receiver_token: InterfaceAccount<'info, TokenAccount>,
    #[account(seeds = [MESSENGER_SEED, &args.messenger_id.to_le_bytes()], bump = messenger_entry.bump)]
    pub messenger_entry: Account<'info, MessengerEntry>,
    /// CHECK: address is validated
    #[account(executable, address = messenger_entry.program @ PaylaneError::InvalidMessengerProgram)]
    pub messenger_program: UncheckedAccount<'info>,
    /// CHECK: address is validated
    #[account(address = dispatcher_pda().0 @ PaylaneError::InvalidDispatcher)]
    pub dispatcher: UncheckedAccount<'info>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn fill_and_notify_intent<'info>(
    ctx: Context<'_, '_, '_, 'info, FillAndNotify<'info>>,
    args: FillAndNotifyArgs,
) -> Result<()> {
    let FillAndNotifyArgs {
        intent_data,
        repayment_address,
        messenger_id,
    } = args;

    authorize_fill(
        &intent_data,
        &ctx.accounts.relayer.key(),
        ctx.accounts.relayer_entry.role,
        &ctx.accounts.config,
        types::unix_now()?,
    )?;

    let fill_hash = intent_data.fill_hash();
    record_fill(&ctx, &fill_hash, repayment_address)?;
    pay_receiver(&ctx, intent_data.destination_amount)?;

    // the relayer fronted the full amount, so that is what the source chain
    // is told was paid
    let payload = NotifyPayload::new(
        fill_hash,
        intent_data.intent_id,
        repayment_address,
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

    emit!(FillExecuted::new(
        fill_hash,
        intent_data.intent_id,
        ctx.accounts.relayer.key(),
        intent_data.destination_amount,
    ));
    emit!(NotifySent::new(fill_hash, intent_data.intent_id, messenger_id));

    Ok(())
}

/// Fill authorization: any whitelisted relayer may take an open intent; an
/// assigned intent is exclusive to its relayer until `fallback_threshold`
/// seconds after creation, after which the configured backstop relayer may
/// step in.
fn authorize_fill(
    intent_data: &IntentData,
    caller: &Pubkey,
    role: RelayerRole,
    config: &Config,
    now: u64,
) -> Result<()> {
    require!(role != RelayerRole::None, PaylaneError::NotRelayer);
    require!(
        intent_data.destination_chain_id == CHAIN_ID,
        PaylaneError::WrongChain
    );
    require!(now < intent_data.deadline, PaylaneError::IntentExpired);

    if intent_data.relayer.is_zero() || intent_data.relayer == *caller {
        return Ok(());
    }

    require!(
        *caller == config.backstop_relayer,
        PaylaneError::NotAssignedRelayer
    );
    require!(
        now >= intent_data.created_at.saturating_add(config.fallback_threshold),
        PaylaneError::NotAssignedRelayer
    );

    Ok(())
}

fn record_fill<'info>(
    ctx: &Context<'_, '_, '_, 'info, FillAndNotify<'info>>,
    fill_hash: &Bytes32,
    repayment_address: Bytes32,
) -> Result<()> {
    let (fill_record_pda, bump) = FillRecord::pda(fill_hash);
    require!(
        ctx.accounts.fill_record.key() == fill_record_pda,
        PaylaneError::InvalidFillRecord
    );
    let signer_seeds = [FILL_RECORD_SEED, fill_hash.as_ref(), &[bump]];

    FillRecord::new(ctx.accounts.relayer.key(), repayment_address, bump)
        .init_once(
            &ctx.accounts.fill_record,
            &ctx.accounts.relayer.to_account_info(),
            &ctx.accounts.system_program,
            &[&signer_seeds],
        )
        .map_err(|_| PaylaneError::AlreadyFilled.into())
}

fn pay_receiver<'info>(
    ctx: &Context<'_, '_, '_, 'info, FillAndNotify<'info>>,
    amount: u64,
) -> Result<()> {
    transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.relayer_token.to_account_info(),
                to: ctx.accounts.receiver_token.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                authority: ctx.accounts.relayer.to_account_info(),
            },
        ),
        amount,
        ctx.accounts.mint.decimals,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const CREATED_AT: u64 = 1_000;
    const DEADLINE: u64 = 100_000;
    const THRESHOLD: u64 = 300;

    fn config(backstop: Pubkey) -> Config {
        Config {
            owner: Pubkey::new_unique(),
            fee_recipient: Pubkey::new_unique(),
            fee_bps: 3,
            backstop_relayer: backstop,
            fallback_threshold: THRESHOLD,
            bump: 255,
        }
    }

    fn intent_data(relayer: Bytes32) -> IntentData {
        IntentData::new(
            [1u8; 32].into(),
            [2u8; 32].into(),
            [3u8; 32].into(),
            [4u8; 32].into(),
            1_000_000_000,
            8453,
            CHAIN_ID,
            [5u8; 32].into(),
            [6u8; 32].into(),
            995_000_000,
            DEADLINE,
            CREATED_AT,
            relayer,
        )
    }

    #[test]
    fn open_intent_accepts_any_whitelisted_relayer() {
        let caller = Pubkey::new_unique();
        let config = config(Pubkey::new_unique());

        assert!(authorize_fill(
            &intent_data(Bytes32::ZERO),
            &caller,
            RelayerRole::External,
            &config,
            CREATED_AT + 1,
        )
        .is_ok());
    }

    #[test]
    fn non_relayer_rejected() {
        let caller = Pubkey::new_unique();
        let config = config(Pubkey::new_unique());

        let result = authorize_fill(
            &intent_data(Bytes32::ZERO),
            &caller,
            RelayerRole::None,
            &config,
            CREATED_AT + 1,
        );

        assert_eq!(result.unwrap_err(), PaylaneError::NotRelayer.into());
    }

    #[test]
    fn wrong_destination_chain_rejected() {
        let caller = Pubkey::new_unique();
        let config = config(Pubkey::new_unique());
        let mut data = intent_data(Bytes32::ZERO);
        data.destination_chain_id = CHAIN_ID + 1;

        let result = authorize_fill(&data, &caller, RelayerRole::External, &config, CREATED_AT + 1);

        assert_eq!(result.unwrap_err(), PaylaneError::WrongChain.into());
    }

    #[test]
    fn expired_intent_rejected() {
        let caller = Pubkey::new_unique();
        let config = config(Pubkey::new_unique());
        let data = intent_data(Bytes32::ZERO);

        assert!(authorize_fill(&data, &caller, RelayerRole::External, &config, DEADLINE - 1).is_ok());
        assert_eq!(
            authorize_fill(&data, &caller, RelayerRole::External, &config, DEADLINE).unwrap_err(),
            PaylaneError::IntentExpired.into()
        );
    }

    #[test]
    fn assigned_relayer_accepted_inside_window() {
        let assignee = Pubkey::new_unique();
        let config = config(Pubkey::new_unique());

        assert!(authorize_fill(
            &intent_data(assignee.into()),
            &assignee,
            RelayerRole::External,
            &config,
            CREATED_AT + 1,
        )
        .is_ok());
    }

    #[test]
    fn other_relayer_rejected_for_assigned_intent() {
        let assignee = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let config = config(Pubkey::new_unique());

        let result = authorize_fill(
            &intent_data(assignee.into()),
            &other,
            RelayerRole::External,
            &config,
            CREATED_AT + THRESHOLD + 1,
        );

        assert_eq!(result.unwrap_err(), PaylaneError::NotAssignedRelayer.into());
    }

    #[test]
    fn backstop_gated_by_fallback_threshold() {
        let assignee = Pubkey::new_unique();
        let backstop = Pubkey::new_unique();
        let config = config(backstop);
        let data = intent_data(assignee.into());

        assert_eq!(
            authorize_fill(
                &data,
                &backstop,
                RelayerRole::Backstop,
                &config,
                CREATED_AT + THRESHOLD - 1,
            )
            .unwrap_err(),
            PaylaneError::NotAssignedRelayer.into()
        );
        assert!(authorize_fill(
            &data,
            &backstop,
            RelayerRole::Backstop,
            &config,
            CREATED_AT + THRESHOLD,
        )
        .is_ok());
    }

    #[test]
    fn backstop_must_be_whitelisted() {
        let assignee = Pubkey::new_unique();
        let backstop = Pubkey::new_unique();
        let config = config(backstop);

        let result = authorize_fill(
            &intent_data(assignee.into()),
            &backstop,
            RelayerRole::None,
            &config,
            CREATED_AT + THRESHOLD,
        );

        assert_eq!(result.unwrap_err(), PaylaneError::NotRelayer.into());
    }
}
