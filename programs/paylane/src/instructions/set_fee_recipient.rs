use anchor_lang::prelude::*;

use crate::events::FeeRecipientSet;
use crate::instructions::PaylaneError;
use crate::state::{Config, CONFIG_SEED};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct SetFeeRecipientArgs {
    pub recipient: Pubkey,
}

#[derive(Accounts)]
pub struct SetFeeRecipient<'info> {
    #[account(address = config.owner @ PaylaneError::NotOwner)]
    pub owner: Signer<'info>,
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,
}

pub fn update_fee_recipient(
    ctx: Context<SetFeeRecipient>,
    args: SetFeeRecipientArgs,
) -> Result<()> {
    let SetFeeRecipientArgs { recipient } = args;

    ctx.accounts.config.fee_recipient = recipient;

    emit!(FeeRecipientSet::new(recipient));

    Ok(())
}
