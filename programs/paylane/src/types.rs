use anchor_lang::prelude::*;
use derive_new::new;
use paylane_svm_std::{u64_word, Bytes32};
use tiny_keccak::{Hasher, Keccak};

/// Chain-agnostic transport form of an intent. Both chains canonicalize to
/// this exact tuple (addresses as 32-byte identifiers, fixed-width integers)
/// so the digest over it matches bit-for-bit on either end.
#[derive(AnchorSerialize, AnchorDeserialize, new, Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntentData {
    pub intent_id: Bytes32,
    pub sender: Bytes32,
    pub refund_target: Bytes32,
    pub source_token: Bytes32,
    pub source_amount: u64,
    pub source_chain_id: u64,
    pub destination_chain_id: u64,
    pub destination_token: Bytes32,
    pub receiver: Bytes32,
    pub destination_amount: u64,
    pub deadline: u64,
    pub created_at: u64,
    pub relayer: Bytes32,
}

impl IntentData {
    /// Keccak256 over the full tuple as consecutive 32-byte words, integers
    /// big-endian left-padded. Computed on the destination chain at fill
    /// time, re-derived from ledger state at settlement time; any parameter
    /// drift changes the digest.
    pub fn fill_hash(&self) -> Bytes32 {
        let mut hasher = Keccak::v256();
        let mut hash = [0u8; 32];

        hasher.update(self.intent_id.as_ref());
        hasher.update(self.sender.as_ref());
        hasher.update(self.refund_target.as_ref());
        hasher.update(self.source_token.as_ref());
        hasher.update(&u64_word(self.source_amount));
        hasher.update(&u64_word(self.source_chain_id));
        hasher.update(&u64_word(self.destination_chain_id));
        hasher.update(self.destination_token.as_ref());
        hasher.update(self.receiver.as_ref());
        hasher.update(&u64_word(self.destination_amount));
        hasher.update(&u64_word(self.deadline));
        hasher.update(&u64_word(self.created_at));
        hasher.update(self.relayer.as_ref());

        hasher.finalize(&mut hash);

        hash.into()
    }
}

/// Why a delivered notification landed the intent in `Failed` instead of
/// `Filled`. Carried on the event so parties absent from the settlement call
/// can observe the cause.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailReason {
    HashMismatch,
    AmountTooLow,
    WrongSourceChain,
}

/// `floor(source_amount * fee_bps / 10_000)`.
pub fn fee_amount(source_amount: u64, fee_bps: u16) -> u64 {
    (source_amount as u128 * fee_bps as u128 / 10_000) as u64
}

pub fn unix_now() -> Result<u64> {
    Ok(Clock::get()?.unix_timestamp.max(0) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use paylane_svm_std::CHAIN_ID;

    fn intent_data() -> IntentData {
        IntentData::new(
            [1u8; 32].into(),
            [2u8; 32].into(),
            [3u8; 32].into(),
            [4u8; 32].into(),
            1_000_000_000,
            CHAIN_ID,
            8453,
            [5u8; 32].into(),
            [6u8; 32].into(),
            995_000_000,
            1_700_000_000,
            1_699_999_000,
            Bytes32::ZERO,
        )
    }

    #[test]
    fn fill_hash_deterministic() {
        assert_eq!(intent_data().fill_hash(), intent_data().fill_hash());
    }

    #[test]
    fn fill_hash_binds_every_field() {
        let base = intent_data().fill_hash();
        let drifted = [
            IntentData {
                intent_id: [9u8; 32].into(),
                ..intent_data()
            },
            IntentData {
                sender: [9u8; 32].into(),
                ..intent_data()
            },
            IntentData {
                refund_target: [9u8; 32].into(),
                ..intent_data()
            },
            IntentData {
                source_token: [9u8; 32].into(),
                ..intent_data()
            },
            IntentData {
                source_amount: 1,
                ..intent_data()
            },
            IntentData {
                source_chain_id: 1,
                ..intent_data()
            },
            IntentData {
                destination_chain_id: 1,
                ..intent_data()
            },
            IntentData {
                destination_token: [9u8; 32].into(),
                ..intent_data()
            },
            IntentData {
                receiver: [9u8; 32].into(),
                ..intent_data()
            },
            IntentData {
                destination_amount: 1,
                ..intent_data()
            },
            IntentData {
                deadline: 1,
                ..intent_data()
            },
            IntentData {
                created_at: 1,
                ..intent_data()
            },
            IntentData {
                relayer: [9u8; 32].into(),
                ..intent_data()
            },
        ];

        for mutated in drifted {
            assert_ne!(mutated.fill_hash(), base);
        }
    }

    #[test]
    fn fee_amount_three_bps() {
        let fee = fee_amount(1_000_000_000, 3);

        assert_eq!(fee, 300_000);
        assert_eq!(1_000_000_000 - fee, 999_700_000);
    }

    #[test]
    fn fee_amount_zero_bps() {
        assert_eq!(fee_amount(1_000_000_000, 0), 0);
    }

    #[test]
    fn fee_amount_rounds_down() {
        assert_eq!(fee_amount(9_999, 3), 2);
        assert_eq!(fee_amount(1, 30), 0);
        assert_eq!(fee_amount(0, 30), 0);
    }

    #[test]
    fn fee_amount_no_overflow_at_max() {
        assert_eq!(
            fee_amount(u64::MAX, 30),
            (u64::MAX as u128 * 30 / 10_000) as u64
        );
    }
}
