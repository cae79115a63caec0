use anchor_lang::prelude::*;

declare_id!("54L4ybALohtSruoB22fLPzuzxyKrbP845b9uhVdTsNzy");

pub mod dispatch;
pub mod events;
pub mod instructions;
pub mod state;
pub mod types;

use instructions::*;

#[program]
pub mod paylane {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, args: InitializeArgs) -> Result<()> {
        initialize_paylane(ctx, args)
    }

    pub fn create(ctx: Context<CreateIntent>, args: CreateIntentArgs) -> Result<()> {
        create_intent(ctx, args)
    }

    pub fn refund(ctx: Context<RefundIntent>, args: RefundIntentArgs) -> Result<()> {
        refund_intent(ctx, args)
    }

    pub fn fill_and_notify<'info>(
        ctx: Context<'_, '_, '_, 'info, FillAndNotify<'info>>,
        args: FillAndNotifyArgs,
    ) -> Result<()> {
        fill_and_notify_intent(ctx, args)
    }

    pub fn retry_notify<'info>(
        ctx: Context<'_, '_, '_, 'info, RetryNotify<'info>>,
        args: RetryNotifyArgs,
    ) -> Result<()> {
        retry_notify_intent(ctx, args)
    }

    pub fn notify<'info>(
        ctx: Context<'_, '_, '_, 'info, Notify<'info>>,
        args: NotifyArgs,
    ) -> Result<()> {
        notify_intent(ctx, args)
    }

    pub fn set_protocol_fee(ctx: Context<SetProtocolFee>, args: SetProtocolFeeArgs) -> Result<()> {
        update_protocol_fee(ctx, args)
    }

    pub fn set_fee_recipient(
        ctx: Context<SetFeeRecipient>,
        args: SetFeeRecipientArgs,
    ) -> Result<()> {
        update_fee_recipient(ctx, args)
    }

    pub fn add_relayer(ctx: Context<AddRelayer>, args: AddRelayerArgs) -> Result<()> {
        add_relayer_entry(ctx, args)
    }

    pub fn remove_relayer(ctx: Context<RemoveRelayer>) -> Result<()> {
        remove_relayer_entry(ctx)
    }

    pub fn set_backstop_relayer(
        ctx: Context<SetBackstopRelayer>,
        args: SetBackstopRelayerArgs,
    ) -> Result<()> {
        update_backstop_relayer(ctx, args)
    }

    pub fn register_messenger(
        ctx: Context<RegisterMessenger>,
        args: RegisterMessengerArgs,
    ) -> Result<()> {
        register_messenger_adapter(ctx, args)
    }

    pub fn set_intent_status(
        ctx: Context<SetIntentStatus>,
        args: SetIntentStatusArgs,
    ) -> Result<()> {
        force_intent_status(ctx, args)
    }

    pub fn set_intent_relayer(
        ctx: Context<SetIntentRelayer>,
        args: SetIntentRelayerArgs,
    ) -> Result<()> {
        force_intent_relayer(ctx, args)
    }

    pub fn admin_refund(ctx: Context<AdminRefund>, args: AdminRefundArgs) -> Result<()> {
        admin_refund_intent(ctx, args)
    }

    pub fn sweep_fees(ctx: Context<SweepFees>) -> Result<()> {
        sweep_accrued_fees(ctx)
    }
}
