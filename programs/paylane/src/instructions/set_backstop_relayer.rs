use anchor_lang::prelude::*;

use crate::events::BackstopRelayerSet;
use crate::instructions::PaylaneError;
use crate::state::{Config, CONFIG_SEED};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct SetBackstopRelayerArgs {
    pub relayer: Pubkey,
    pub fallback_threshold: u64,
}

#[derive(Accounts)]
pub struct SetBackstopRelayer<'info> {
    #[account(address = config.owner @ PaylaneError::NotOwner)]
    pub owner: Signer<'info>,
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,
}

pub fn update_backstop_relayer(
    ctx: Context<SetBackstopRelayer>,
    args: SetBackstopRelayerArgs,
) -> Result<()> {
    let SetBackstopRelayerArgs {
        relayer,
        fallback_threshold,
    } = args;
    let config = &mut ctx.accounts.config;

    config.backstop_relayer = relayer;
    config.fallback_threshold = fallback_threshold;

    emit!(BackstopRelayerSet::new(relayer, fallback_threshold));

    Ok(())
}
