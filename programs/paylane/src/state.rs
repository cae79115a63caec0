use anchor_lang::prelude::*;
use derive_new::new;
use paylane_svm_std::account::InitOnce;
use paylane_svm_std::{Bytes32, CHAIN_ID};

use crate::types::IntentData;

pub const CONFIG_SEED: &[u8] = b"config";
pub const INTENT_SEED: &[u8] = b"intent";
pub const FILL_RECORD_SEED: &[u8] = b"fill_record";
pub const RELAYER_SEED: &[u8] = b"relayer";
pub const MESSENGER_SEED: &[u8] = b"messenger";
pub const VAULT_SEED: &[u8] = b"vault";
pub const FEE_POOL_SEED: &[u8] = b"fee_pool";
pub const DISPATCHER_SEED: &[u8] = b"dispatcher";

/// Hard cap on the protocol fee: 30 bps = 0.3%.
pub const MAX_FEE_BPS: u16 = 30;

#[account]
#[derive(InitSpace, PartialEq, Eq, Debug)]
pub struct Config {
    pub owner: Pubkey,
    pub fee_recipient: Pubkey,
    pub fee_bps: u16,
    pub backstop_relayer: Pubkey,
    pub fallback_threshold: u64,
    pub bump: u8,
}

impl Config {
    pub fn pda() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[CONFIG_SEED], &crate::ID)
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum IntentStatus {
    Pending,
    Filled,
    Failed,
    Refunded,
}

/// Source-chain record of an escrowed payment request. Created once per id,
/// never deleted, mutated only through the status transitions.
#[account]
#[derive(InitSpace, PartialEq, Eq, Debug)]
pub struct Intent {
    pub intent_id: Bytes32,
    pub sender: Pubkey,
    pub refund_target: Pubkey,
    pub source_token: Pubkey,
    pub source_amount: u64,
    pub destination_chain_id: u64,
    pub destination_token: Bytes32,
    pub receiver: Bytes32,
    pub destination_amount: u64,
    pub deadline: u64,
    pub created_at: u64,
    pub relayer: Bytes32,
    pub status: IntentStatus,
    pub bump: u8,
}

impl Intent {
    pub fn pda(intent_id: &Bytes32) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[INTENT_SEED, intent_id.as_ref()], &crate::ID)
    }

    /// Reconstructs the canonical transport tuple from ledger state. The
    /// fill-hash recomputed over this value is the settlement-side half of
    /// the parameter binding.
    pub fn to_intent_data(&self) -> IntentData {
        IntentData {
            intent_id: self.intent_id,
            sender: self.sender.into(),
            refund_target: self.refund_target.into(),
            source_token: self.source_token.into(),
            source_amount: self.source_amount,
            source_chain_id: CHAIN_ID,
            destination_chain_id: self.destination_chain_id,
            destination_token: self.destination_token,
            receiver: self.receiver,
            destination_amount: self.destination_amount,
            deadline: self.deadline,
            created_at: self.created_at,
            relayer: self.relayer,
        }
    }
}

impl InitOnce for Intent {}

/// Destination-chain record of an executed payout, one per fill-hash. Its
/// init-once creation is what makes retries of identical parameters safe to
/// attempt but impossible to double-pay.
#[account]
#[derive(InitSpace, new, PartialEq, Eq, Debug)]
pub struct FillRecord {
    pub relayer: Pubkey,
    pub repayment_address: Bytes32,
    pub bump: u8,
}

impl FillRecord {
    pub fn pda(fill_hash: &Bytes32) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[FILL_RECORD_SEED, fill_hash.as_ref()], &crate::ID)
    }

    /// `None` when the account holds no data, i.e. no fill has been recorded
    /// at this address.
    pub fn try_from_account_info(account: &AccountInfo<'_>) -> Result<Option<Self>> {
        account
            .data
            .borrow()
            .get(8..)
            .map(Self::try_from_slice)
            .transpose()
            .map_err(Into::into)
    }
}

impl InitOnce for FillRecord {}

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum RelayerRole {
    None,
    Backstop,
    External,
}

/// Whitelist entry; a missing account reads as role `None`.
#[account]
#[derive(InitSpace, PartialEq, Eq, Debug)]
pub struct RelayerEntry {
    pub role: RelayerRole,
    pub bump: u8,
}

impl RelayerEntry {
    pub fn pda(relayer: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[RELAYER_SEED, relayer.as_ref()], &crate::ID)
    }
}

/// Adapter table entry keyed by a small numeric id; replaceable by the owner.
#[account]
#[derive(InitSpace, PartialEq, Eq, Debug)]
pub struct MessengerEntry {
    pub program: Pubkey,
    pub bump: u8,
}

impl MessengerEntry {
    pub fn pda(messenger_id: u32) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[MESSENGER_SEED, &messenger_id.to_le_bytes()],
            &crate::ID,
        )
    }
}

/// Escrow authority for one intent; the escrowed tokens sit in its associated
/// token account.
pub fn vault_pda(intent_id: &Bytes32) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, intent_id.as_ref()], &crate::ID)
}

/// Program-wide fee custody authority. The accumulated fee balance for a
/// token is its associated token account balance.
pub fn fee_pool_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[FEE_POOL_SEED], &crate::ID)
}

/// Signer for outbound `send_message` CPIs into messenger adapters.
pub fn dispatcher_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[DISPATCHER_SEED], &crate::ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent() -> Intent {
        Intent {
            intent_id: [1u8; 32].into(),
            sender: Pubkey::new_from_array([2u8; 32]),
            refund_target: Pubkey::new_from_array([3u8; 32]),
            source_token: Pubkey::new_from_array([4u8; 32]),
            source_amount: 1_000_000_000,
            destination_chain_id: 8453,
            destination_token: [5u8; 32].into(),
            receiver: [6u8; 32].into(),
            destination_amount: 995_000_000,
            deadline: 1_700_000_000,
            created_at: 1_699_999_000,
            relayer: Bytes32::ZERO,
            status: IntentStatus::Pending,
            bump: 254,
        }
    }

    #[test]
    fn intent_pda_per_id() {
        let id_a: Bytes32 = [1u8; 32].into();
        let id_b: Bytes32 = [2u8; 32].into();

        assert_eq!(Intent::pda(&id_a), Intent::pda(&id_a));
        assert_ne!(Intent::pda(&id_a).0, Intent::pda(&id_b).0);
    }

    #[test]
    fn fill_record_pda_per_hash() {
        let hash_a: Bytes32 = [1u8; 32].into();
        let hash_b: Bytes32 = [2u8; 32].into();

        assert_eq!(FillRecord::pda(&hash_a), FillRecord::pda(&hash_a));
        assert_ne!(FillRecord::pda(&hash_a).0, FillRecord::pda(&hash_b).0);
    }

    #[test]
    fn vault_pda_distinct_from_intent_pda() {
        let id: Bytes32 = [1u8; 32].into();

        assert_ne!(vault_pda(&id).0, Intent::pda(&id).0);
        assert_ne!(vault_pda(&id).0, FillRecord::pda(&id).0);
    }

    #[test]
    fn singleton_pdas_distinct() {
        let singletons = [Config::pda().0, fee_pool_pda().0, dispatcher_pda().0];

        assert_ne!(singletons[0], singletons[1]);
        assert_ne!(singletons[0], singletons[2]);
        assert_ne!(singletons[1], singletons[2]);
    }

    #[test]
    fn messenger_pda_per_id() {
        assert_eq!(MessengerEntry::pda(1), MessengerEntry::pda(1));
        assert_ne!(MessengerEntry::pda(1).0, MessengerEntry::pda(2).0);
    }

    #[test]
    fn intent_data_round_trips_ledger_fields() {
        let intent = intent();
        let data = intent.to_intent_data();

        assert_eq!(data.intent_id, intent.intent_id);
        assert_eq!(data.sender, intent.sender);
        assert_eq!(data.refund_target, intent.refund_target);
        assert_eq!(data.source_token, intent.source_token);
        assert_eq!(data.source_amount, intent.source_amount);
        assert_eq!(data.source_chain_id, CHAIN_ID);
        assert_eq!(data.destination_chain_id, intent.destination_chain_id);
        assert_eq!(data.destination_token, intent.destination_token);
        assert_eq!(data.receiver, intent.receiver);
        assert_eq!(data.destination_amount, intent.destination_amount);
        assert_eq!(data.deadline, intent.deadline);
        assert_eq!(data.created_at, intent.created_at);
        assert_eq!(data.relayer, intent.relayer);
    }
}
