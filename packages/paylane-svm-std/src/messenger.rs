//! Wire interface between the settlement program and messenger adapters.
//!
//! A messenger adapter is an external program that carries a payload to
//! another chain and, on the receiving side, authenticates an incoming
//! message before handing it to the settlement program. Multiple adapters
//! coexist (a signature-based fast relay, a validator-set gateway), selected
//! per call by a small numeric id; the settlement program never inspects an
//! adapter's internals and trusts only its verification step.
//!
//! Outbound: the settlement program invokes the adapter's `send_message`
//! instruction, tagged with [`SEND_MESSAGE_DISCRIMINATOR`] and carrying
//! [`SendMessageArgs`]. The first account is the settlement program's
//! dispatcher PDA (readonly signer), proving the dispatch originated from the
//! settlement program; the second is a writable signer the adapter may debit
//! for its relay fee; any further accounts are adapter-specific and forwarded
//! verbatim.
//!
//! Inbound: after verifying an incoming message against its own per-chain
//! trusted-source registry, the adapter decodes the inner [`NotifyPayload`]
//! envelope and CPIs the settlement program's `notify` instruction, signing
//! with its [`notifier_pda`]. The settlement program accepts the message only
//! if that PDA belongs to the adapter registered under the claimed id.

use anchor_lang::prelude::*;
use derive_new::new;

use crate::{u64_word, Bytes32};

pub const NOTIFIER_SEED: &[u8] = b"notifier";
pub const SEND_MESSAGE_DISCRIMINATOR: [u8; 8] = [167, 54, 113, 191, 228, 75, 10, 62];

/// `fill_hash ++ intent_id ++ repayment_address ++ amount_paid`, one 32-byte
/// word each.
pub const NOTIFY_PAYLOAD_LEN: usize = 128;

#[derive(AnchorSerialize, AnchorDeserialize, new, Clone, Debug)]
pub struct SendMessageArgs {
    pub destination_chain: u64,
    pub payload: Vec<u8>,
}

/// PDA an adapter signs with when delivering a verified message into the
/// settlement program.
pub fn notifier_pda(messenger_program: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[NOTIFIER_SEED], messenger_program)
}

/// Inner payload of a fill notification. Encoded as fixed-width 32-byte words
/// so the bytes are identical no matter which chain or adapter produced them;
/// adapters wrap this in their own outer envelope (signature or attestation).
#[derive(AnchorSerialize, AnchorDeserialize, new, Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotifyPayload {
    pub fill_hash: Bytes32,
    pub intent_id: Bytes32,
    pub repayment_address: Bytes32,
    pub amount_paid: u64,
}

impl NotifyPayload {
    pub fn encode(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(NOTIFY_PAYLOAD_LEN);
        payload.extend_from_slice(self.fill_hash.as_ref());
        payload.extend_from_slice(self.intent_id.as_ref());
        payload.extend_from_slice(self.repayment_address.as_ref());
        payload.extend_from_slice(&u64_word(self.amount_paid));
        payload
    }

    /// Rejects payloads of the wrong length and amounts exceeding `u64`.
    pub fn decode(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != NOTIFY_PAYLOAD_LEN {
            return None;
        }

        let word = |index: usize| -> Option<[u8; 32]> {
            bytes[index * 32..(index + 1) * 32].try_into().ok()
        };

        let amount_word = word(3)?;
        if amount_word[..24] != [0u8; 24] {
            return None;
        }
        let amount_paid = u64::from_be_bytes(amount_word[24..].try_into().ok()?);

        Some(Self {
            fill_hash: word(0)?.into(),
            intent_id: word(1)?.into(),
            repayment_address: word(2)?.into(),
            amount_paid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> NotifyPayload {
        NotifyPayload::new(
            [1u8; 32].into(),
            [2u8; 32].into(),
            [3u8; 32].into(),
            995_000_000,
        )
    }

    #[test]
    fn notify_payload_layout() {
        let encoded = payload().encode();

        assert_eq!(encoded.len(), NOTIFY_PAYLOAD_LEN);
        assert_eq!(encoded[..32], [1u8; 32]);
        assert_eq!(encoded[32..64], [2u8; 32]);
        assert_eq!(encoded[64..96], [3u8; 32]);
        assert_eq!(encoded[96..120], [0u8; 24]);
        assert_eq!(encoded[120..], 995_000_000u64.to_be_bytes());
    }

    #[test]
    fn notify_payload_round_trip() {
        let payload = payload();

        assert_eq!(NotifyPayload::decode(&payload.encode()), Some(payload));
    }

    #[test]
    fn notify_payload_decode_wrong_length() {
        let mut encoded = payload().encode();
        encoded.pop();

        assert_eq!(NotifyPayload::decode(&encoded), None);
        assert_eq!(NotifyPayload::decode(&[]), None);
    }

    #[test]
    fn notify_payload_decode_amount_overflow() {
        let mut encoded = payload().encode();
        encoded[96] = 1;

        assert_eq!(NotifyPayload::decode(&encoded), None);
    }

    #[test]
    fn notifier_pda_per_program() {
        let program_a = Pubkey::new_unique();
        let program_b = Pubkey::new_unique();

        assert_eq!(notifier_pda(&program_a), notifier_pda(&program_a));
        assert_ne!(notifier_pda(&program_a).0, notifier_pda(&program_b).0);
    }
}
