use anchor_lang::prelude::*;
use paylane_svm_std::Bytes32;

use crate::events::IntentStatusForced;
use crate::instructions::PaylaneError;
use crate::state::{Config, Intent, IntentStatus, CONFIG_SEED, INTENT_SEED};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct SetIntentStatusArgs {
    pub intent_id: Bytes32,
    pub status: IntentStatus,
}

#[derive(Accounts)]
#[instruction(args: SetIntentStatusArgs)]
pub struct SetIntentStatus<'info> {
    #[account(address = config.owner @ PaylaneError::NotOwner)]
    pub owner: Signer<'info>,
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,
    #[account(mut, seeds = [INTENT_SEED, args.intent_id.as_ref()], bump = intent.bump)]
    pub intent: Account<'info, Intent>,
}

/// Unrestricted recovery override: any target status, including transitions
/// out of the nominally terminal `Filled`/`Refunded`.
pub fn force_intent_status(ctx: Context<SetIntentStatus>, args: SetIntentStatusArgs) -> Result<()> {
    let SetIntentStatusArgs { intent_id, status } = args;
    let intent = &mut ctx.accounts.intent;
    let old_status = intent.status;

    intent.status = status;

    emit!(IntentStatusForced::new(intent_id, old_status, status));

    Ok(())
}
