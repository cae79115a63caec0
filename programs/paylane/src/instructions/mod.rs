use anchor_lang::prelude::*;

pub mod add_relayer;
pub mod admin_refund;
pub mod create_intent;
pub mod fill_and_notify;
pub mod initialize;
pub mod notify;
pub mod refund_intent;
pub mod register_messenger;
pub mod remove_relayer;
pub mod retry_notify;
pub mod set_backstop_relayer;
pub mod set_fee_recipient;
pub mod set_intent_relayer;
pub mod set_intent_status;
pub mod set_protocol_fee;
pub mod sweep_fees;

pub use add_relayer::*;
pub use admin_refund::*;
pub use create_intent::*;
pub use fill_and_notify::*;
pub use initialize::*;
pub use notify::*;
pub use refund_intent::*;
pub use register_messenger::*;
pub use remove_relayer::*;
pub use retry_notify::*;
pub use set_backstop_relayer::*;
pub use set_fee_recipient::*;
pub use set_intent_relayer::*;
pub use set_intent_status::*;
pub use set_protocol_fee::*;
pub use sweep_fees::*;

#[error_code]
pub enum PaylaneError {
    InvalidIntentId,
    InvalidToken,
    InvalidReceiver,
    InvalidAmount,
    InvalidDeadline,
    IntentAlreadyExists,
    IntentExpired,
    IntentNotExpired,
    AlreadyFilled,
    InvalidPayload,
    InvalidFee,
    NoFeesAccrued,
    WrongChain,
    InvalidRole,
    InvalidIntentAccount,
    InvalidVault,
    InvalidFeePool,
    InvalidFillRecord,
    InvalidDispatcher,
    InvalidMessengerProgram,
    InvalidRepaymentAccount,
    NotOwner,
    NotRelayer,
    NotAssignedRelayer,
    NotNotifier,
    NotAuthorized,
    InvalidStatus,
}
