use anchor_lang::prelude::*;

use crate::events::RelayerRemoved;
use crate::instructions::PaylaneError;
use crate::state::{Config, RelayerEntry, CONFIG_SEED, RELAYER_SEED};

#[derive(Accounts)]
pub struct RemoveRelayer<'info> {
    #[account(mut, address = config.owner @ PaylaneError::NotOwner)]
    pub owner: Signer<'info>,
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,
    /// CHECK: only used as the registry key
    pub relayer: UncheckedAccount<'info>,
    #[account(
        mut,
        close = owner,
        seeds = [RELAYER_SEED, relayer.key().as_ref()],
        bump = relayer_entry.bump,
    )]
    pub relayer_entry: Account<'info, RelayerEntry>,
}

pub fn remove_relayer_entry(ctx: Context<RemoveRelayer>) -> Result<()> {
    emit!(RelayerRemoved::new(ctx.accounts.relayer.key()));

    Ok(())
}
