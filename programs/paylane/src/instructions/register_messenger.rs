use anchor_lang::prelude::*;

use crate::events::MessengerRegistered;
use crate::instructions::PaylaneError;
use crate::state::{Config, MessengerEntry, CONFIG_SEED, MESSENGER_SEED};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct RegisterMessengerArgs {
    pub messenger_id: u32,
}

#[derive(Accounts)]
#[instruction(args: RegisterMessengerArgs)]
pub struct RegisterMessenger<'info> {
    #[account(mut, address = config.owner @ PaylaneError::NotOwner)]
    pub owner: Signer<'info>,
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,
    /// CHECK: adapters are external programs; only executability is checked
    #[account(executable)]
    pub messenger_program: UncheckedAccount<'info>,
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + MessengerEntry::INIT_SPACE,
        seeds = [MESSENGER_SEED, &args.messenger_id.to_le_bytes()],
        bump,
    )]
    pub messenger_entry: Account<'info, MessengerEntry>,
    pub system_program: Program<'info, System>,
}

/// Registers or replaces the adapter under a messenger id.
pub fn register_messenger_adapter(
    ctx: Context<RegisterMessenger>,
    args: RegisterMessengerArgs,
) -> Result<()> {
    let RegisterMessengerArgs { messenger_id } = args;

    *ctx.accounts.messenger_entry = MessengerEntry {
        program: ctx.accounts.messenger_program.key(),
        bump: ctx.bumps.messenger_entry,
    };

    emit!(MessengerRegistered::new(
        messenger_id,
        ctx.accounts.messenger_program.key(),
    ));

    Ok(())
}
