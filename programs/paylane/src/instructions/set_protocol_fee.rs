use anchor_lang::prelude::*;

use crate::events::ProtocolFeeSet;
use crate::instructions::PaylaneError;
use crate::state::{Config, CONFIG_SEED, MAX_FEE_BPS};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct SetProtocolFeeArgs {
    pub fee_bps: u16,
}

#[derive(Accounts)]
pub struct SetProtocolFee<'info> {
    #[account(address = config.owner @ PaylaneError::NotOwner)]
    pub owner: Signer<'info>,
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,
}

pub fn update_protocol_fee(ctx: Context<SetProtocolFee>, args: SetProtocolFeeArgs) -> Result<()> {
    let SetProtocolFeeArgs { fee_bps } = args;

    require!(fee_bps <= MAX_FEE_BPS, PaylaneError::InvalidFee);

    ctx.accounts.config.fee_bps = fee_bps;

    emit!(ProtocolFeeSet::new(fee_bps));

    Ok(())
}
