use anchor_lang::prelude::*;

use crate::state::{Config, CONFIG_SEED};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct InitializeArgs {
    pub owner: Pubkey,
    pub fee_recipient: Pubkey,
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(
        init,
        payer = payer,
        space = 8 + Config::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump,
    )]
    pub config: Account<'info, Config>,
    pub system_program: Program<'info, System>,
}

pub fn initialize_paylane(ctx: Context<Initialize>, args: InitializeArgs) -> Result<()> {
    let InitializeArgs {
        owner,
        fee_recipient,
    } = args;

    *ctx.accounts.config = Config {
        owner,
        fee_recipient,
        fee_bps: 0,
        backstop_relayer: Pubkey::default(),
        fallback_threshold: 0,
        bump: ctx.bumps.config,
    };

    Ok(())
}
