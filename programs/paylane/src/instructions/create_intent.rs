use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};
use paylane_svm_std::account::InitOnce;
use paylane_svm_std::Bytes32;

use crate::events::IntentCreated;
use crate::instructions::PaylaneError;
use crate::state::{vault_pda, Intent, IntentStatus, INTENT_SEED};
use crate::types;

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct CreateIntentArgs {
    pub intent_id: Bytes32,
    pub source_amount: u64,
    pub destination_chain_id: u64,
    pub destination_token: Bytes32,
    pub receiver: Bytes32,
    pub destination_amount: u64,
    pub deadline: u64,
    pub refund_target: Pubkey,
    pub relayer: Bytes32,
}

#[derive(Accounts)]
#[instruction(args: CreateIntentArgs)]
pub struct CreateIntent<'info> {
    #[account(mut)]
    pub sender: Signer<'info>,
    /// CHECK: address is validated
    #[account(mut, address = Intent::pda(&args.intent_id).0 @ PaylaneError::InvalidIntentAccount)]
    pub intent: UncheckedAccount<'info>,
    pub mint: InterfaceAccount<'info, Mint>,
    #[account(mut, token::mint = mint, token::authority = sender)]
    pub sender_token: InterfaceAccount<'info, TokenAccount>,
    /// CHECK: address is validated
    #[account(address = vault_pda(&args.intent_id).0 @ PaylaneError::InvalidVault)]
    pub vault: UncheckedAccount<'info>,
    #[account(
        init_if_needed,
        payer = sender,
        associated_token::mint = mint,
        associated_token::authority = vault,
        associated_token::token_program = token_program,
    )]
    pub vault_token: InterfaceAccount<'info, TokenAccount>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn create_intent(ctx: Context<CreateIntent>, args: CreateIntentArgs) -> Result<()> {
    let CreateIntentArgs {
        intent_id,
        source_amount,
        destination_chain_id,
        destination_token,
        receiver,
        destination_amount,
        deadline,
        refund_target,
        relayer,
    } = args;
    let now = types::unix_now()?;

    require!(!intent_id.is_zero(), PaylaneError::InvalidIntentId);
    require!(!destination_token.is_zero(), PaylaneError::InvalidToken);
    require!(!receiver.is_zero(), PaylaneError::InvalidReceiver);
    require!(
        source_amount > 0 && destination_amount > 0,
        PaylaneError::InvalidAmount
    );
    require!(deadline > now, PaylaneError::InvalidDeadline);

    let (_, bump) = Intent::pda(&intent_id);
    let signer_seeds = [INTENT_SEED, intent_id.as_ref(), &[bump]];

    Intent {
        intent_id,
        sender: ctx.accounts.sender.key(),
        refund_target,
        source_token: ctx.accounts.mint.key(),
        source_amount,
        destination_chain_id,
        destination_token,
        receiver,
        destination_amount,
        deadline,
        created_at: now,
        relayer,
        status: IntentStatus::Pending,
        bump,
    }
    .init_once(
        &ctx.accounts.intent,
        &ctx.accounts.sender.to_account_info(),
        &ctx.accounts.system_program,
        &[&signer_seeds],
    )
    .map_err(|_| PaylaneError::IntentAlreadyExists)?;

    transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.sender_token.to_account_info(),
                to: ctx.accounts.vault_token.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                authority: ctx.accounts.sender.to_account_info(),
            },
        ),
        source_amount,
        ctx.accounts.mint.decimals,
    )?;

    emit!(IntentCreated::new(
        intent_id,
        ctx.accounts.sender.key(),
        ctx.accounts.mint.key(),
        source_amount,
        destination_chain_id,
        receiver,
        destination_amount,
        deadline,
    ));

    Ok(())
}
