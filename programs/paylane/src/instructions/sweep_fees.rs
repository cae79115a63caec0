use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::events::FeesSwept;
use crate::instructions::PaylaneError;
use crate::state::{fee_pool_pda, Config, CONFIG_SEED, FEE_POOL_SEED};

#[derive(Accounts)]
pub struct SweepFees<'info> {
    #[account(address = config.owner @ PaylaneError::NotOwner)]
    pub owner: Signer<'info>,
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,
    pub mint: InterfaceAccount<'info, Mint>,
    /// CHECK: address is validated
    #[account(address = fee_pool_pda().0 @ PaylaneError::InvalidFeePool)]
    pub fee_pool: UncheckedAccount<'info>,
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = fee_pool,
        associated_token::token_program = token_program,
    )]
    pub fee_token: InterfaceAccount<'info, TokenAccount>,
    #[account(mut, token::mint = mint, token::authority = config.fee_recipient)]
    pub recipient_token: InterfaceAccount<'info, TokenAccount>,
    pub token_program: Interface<'info, TokenInterface>,
}

/// Drains the accumulated fee balance for one token to the fee recipient.
pub fn sweep_accrued_fees(ctx: Context<SweepFees>) -> Result<()> {
    let amount = ctx.accounts.fee_token.amount;
    require!(amount > 0, PaylaneError::NoFeesAccrued);

    let (_, bump) = fee_pool_pda();
    let signer_seeds = [FEE_POOL_SEED, &[bump]];

    transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.fee_token.to_account_info(),
                to: ctx.accounts.recipient_token.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                authority: ctx.accounts.fee_pool.to_account_info(),
            },
            &[&signer_seeds],
        ),
        amount,
        ctx.accounts.mint.decimals,
    )?;

    emit!(FeesSwept::new(
        ctx.accounts.mint.key(),
        ctx.accounts.config.fee_recipient,
        amount,
    ));

    Ok(())
}
