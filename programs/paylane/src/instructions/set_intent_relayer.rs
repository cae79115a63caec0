use anchor_lang::prelude::*;
use paylane_svm_std::Bytes32;

use crate::events::IntentRelayerForced;
use crate::instructions::PaylaneError;
use crate::state::{Config, Intent, CONFIG_SEED, INTENT_SEED};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct SetIntentRelayerArgs {
    pub intent_id: Bytes32,
    pub relayer: Bytes32,
}

#[derive(Accounts)]
#[instruction(args: SetIntentRelayerArgs)]
pub struct SetIntentRelayer<'info> {
    #[account(address = config.owner @ PaylaneError::NotOwner)]
    pub owner: Signer<'info>,
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,
    #[account(mut, seeds = [INTENT_SEED, args.intent_id.as_ref()], bump = intent.bump)]
    pub intent: Account<'info, Intent>,
}

pub fn force_intent_relayer(
    ctx: Context<SetIntentRelayer>,
    args: SetIntentRelayerArgs,
) -> Result<()> {
    let SetIntentRelayerArgs { intent_id, relayer } = args;
    let intent = &mut ctx.accounts.intent;
    let old_relayer = intent.relayer;

    intent.relayer = relayer;

    emit!(IntentRelayerForced::new(intent_id, old_relayer, relayer));

    Ok(())
}
