use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};
use paylane_svm_std::Bytes32;

use crate::events::IntentRefunded;
use crate::instructions::PaylaneError;
use crate::state::{vault_pda, Config, Intent, IntentStatus, CONFIG_SEED, INTENT_SEED, VAULT_SEED};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct AdminRefundArgs {
    pub intent_id: Bytes32,
}

#[derive(Accounts)]
#[instruction(args: AdminRefundArgs)]
pub struct AdminRefund<'info> {
    #[account(address = config.owner @ PaylaneError::NotOwner)]
    pub owner: Signer<'info>,
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,
    #[account(mut, seeds = [INTENT_SEED, args.intent_id.as_ref()], bump = intent.bump)]
    pub intent: Account<'info, Intent>,
    #[account(address = intent.source_token @ PaylaneError::InvalidToken)]
    pub mint: InterfaceAccount<'info, Mint>,
    /// CHECK: address is validated
    #[account(address = vault_pda(&args.intent_id).0 @ PaylaneError::InvalidVault)]
    pub vault: UncheckedAccount<'info>,
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = vault,
        associated_token::token_program = token_program,
    )]
    pub vault_token: InterfaceAccount<'info, TokenAccount>,
    #[account(mut, token::mint = mint, token::authority = intent.refund_target)]
    pub refund_token: InterfaceAccount<'info, TokenAccount>,
    pub token_program: Interface<'info, TokenInterface>,
}

/// Emergency release bypassing the deadline. Rejected only once the escrow
/// has already left the vault (`Filled`/`Refunded`).
pub fn admin_refund_intent(ctx: Context<AdminRefund>, args: AdminRefundArgs) -> Result<()> {
    let AdminRefundArgs { intent_id } = args;
    let intent = &mut ctx.accounts.intent;

    require!(
        !matches!(intent.status, IntentStatus::Filled | IntentStatus::Refunded),
        PaylaneError::InvalidStatus
    );

    intent.status = IntentStatus::Refunded;

    let amount = intent.source_amount;
    let refund_target = intent.refund_target;
    let (_, bump) = vault_pda(&intent_id);
    let signer_seeds = [VAULT_SEED, intent_id.as_ref(), &[bump]];

    transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.vault_token.to_account_info(),
                to: ctx.accounts.refund_token.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                authority: ctx.accounts.vault.to_account_info(),
            },
            &[&signer_seeds],
        ),
        amount,
        ctx.accounts.mint.decimals,
    )?;

    emit!(IntentRefunded::new(intent_id, refund_target, amount));

    Ok(())
}
