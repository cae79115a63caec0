use anchor_lang::prelude::*;

use crate::events::RelayerAdded;
use crate::instructions::PaylaneError;
use crate::state::{Config, RelayerEntry, RelayerRole, CONFIG_SEED, RELAYER_SEED};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct AddRelayerArgs {
    pub role: RelayerRole,
}

#[derive(Accounts)]
#[instruction(args: AddRelayerArgs)]
pub struct AddRelayer<'info> {
    #[account(mut, address = config.owner @ PaylaneError::NotOwner)]
    pub owner: Signer<'info>,
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,
    /// CHECK: any address can be whitelisted
    pub relayer: UncheckedAccount<'info>,
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + RelayerEntry::INIT_SPACE,
        seeds = [RELAYER_SEED, relayer.key().as_ref()],
        bump,
    )]
    pub relayer_entry: Account<'info, RelayerEntry>,
    pub system_program: Program<'info, System>,
}

pub fn add_relayer_entry(ctx: Context<AddRelayer>, args: AddRelayerArgs) -> Result<()> {
    let AddRelayerArgs { role } = args;

    require!(role != RelayerRole::None, PaylaneError::InvalidRole);

    *ctx.accounts.relayer_entry = RelayerEntry {
        role,
        bump: ctx.bumps.relayer_entry,
    };

    emit!(RelayerAdded::new(ctx.accounts.relayer.key(), role));

    Ok(())
}
