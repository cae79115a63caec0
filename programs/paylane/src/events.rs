use anchor_lang::prelude::*;
use derive_new::new;
use paylane_svm_std::Bytes32;

use crate::state::{IntentStatus, RelayerRole};
use crate::types::FailReason;

#[event]
#[derive(new)]
pub struct IntentCreated {
    intent_id: Bytes32,
    sender: Pubkey,
    source_token: Pubkey,
    source_amount: u64,
    destination_chain_id: u64,
    receiver: Bytes32,
    destination_amount: u64,
    deadline: u64,
}

#[event]
#[derive(new)]
pub struct IntentRefunded {
    intent_id: Bytes32,
    refund_target: Pubkey,
    amount: u64,
}

#[event]
#[derive(new)]
pub struct IntentFilled {
    intent_id: Bytes32,
    repayment_address: Bytes32,
    amount_paid: u64,
    fee: u64,
}

#[event]
#[derive(new)]
pub struct IntentFailed {
    intent_id: Bytes32,
    reason: FailReason,
}

#[event]
#[derive(new)]
pub struct FillExecuted {
    fill_hash: Bytes32,
    intent_id: Bytes32,
    relayer: Pubkey,
    amount: u64,
}

#[event]
#[derive(new)]
pub struct NotifySent {
    fill_hash: Bytes32,
    intent_id: Bytes32,
    messenger_id: u32,
}

#[event]
#[derive(new)]
pub struct NotifyRetried {
    fill_hash: Bytes32,
    intent_id: Bytes32,
    messenger_id: u32,
}

#[event]
#[derive(new)]
pub struct ProtocolFeeSet {
    fee_bps: u16,
}

#[event]
#[derive(new)]
pub struct FeeRecipientSet {
    recipient: Pubkey,
}

#[event]
#[derive(new)]
pub struct RelayerAdded {
    relayer: Pubkey,
    role: RelayerRole,
}

#[event]
#[derive(new)]
pub struct RelayerRemoved {
    relayer: Pubkey,
}

#[event]
#[derive(new)]
pub struct BackstopRelayerSet {
    relayer: Pubkey,
    fallback_threshold: u64,
}

#[event]
#[derive(new)]
pub struct MessengerRegistered {
    messenger_id: u32,
    program: Pubkey,
}

#[event]
#[derive(new)]
pub struct IntentStatusForced {
    intent_id: Bytes32,
    old_status: IntentStatus,
    new_status: IntentStatus,
}

#[event]
#[derive(new)]
pub struct IntentRelayerForced {
    intent_id: Bytes32,
    old_relayer: Bytes32,
    new_relayer: Bytes32,
}

#[event]
#[derive(new)]
pub struct FeesSwept {
    token: Pubkey,
    recipient: Pubkey,
    amount: u64,
}
