use anchor_lang::prelude::*;
use derive_more::Deref;

pub mod account;
pub mod messenger;

#[cfg(feature = "mainnet")]
pub const CHAIN_ID: u64 = 1399811149;
#[cfg(not(feature = "mainnet"))]
pub const CHAIN_ID: u64 = 1399811150;

/// Chain-agnostic 32-byte identifier. Addresses, token identifiers and intent
/// ids cross chains in this form so that the same value is meaningful in any
/// target chain's address space.
#[derive(
    AnchorSerialize, AnchorDeserialize, InitSpace, Deref, Clone, Copy, Debug, Default, PartialEq, Eq,
)]
pub struct Bytes32([u8; 32]);

impl Bytes32 {
    pub const ZERO: Self = Self([0u8; 32]);

    /// The all-zero value doubles as the "unset" sentinel (open relayer
    /// assignment, unset address).
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    pub fn to_pubkey(self) -> Pubkey {
        Pubkey::new_from_array(self.0)
    }
}

impl From<[u8; 32]> for Bytes32 {
    fn from(bytes: [u8; 32]) -> Self {
        Bytes32(bytes)
    }
}

impl From<Bytes32> for [u8; 32] {
    fn from(bytes: Bytes32) -> Self {
        bytes.0
    }
}

impl From<Pubkey> for Bytes32 {
    fn from(pubkey: Pubkey) -> Self {
        Bytes32(pubkey.to_bytes())
    }
}

impl PartialEq<Pubkey> for Bytes32 {
    fn eq(&self, pubkey: &Pubkey) -> bool {
        self.0 == pubkey.to_bytes()
    }
}

/// Encodes a `u64` as a big-endian, left-padded 32-byte word, the fixed-width
/// integer form shared by the fill-hash preimage and the notify payload.
pub fn u64_word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes32_zero_sentinel() {
        assert!(Bytes32::ZERO.is_zero());
        assert!(Bytes32::from([0u8; 32]).is_zero());
        assert!(!Bytes32::from([1u8; 32]).is_zero());
    }

    #[test]
    fn bytes32_pubkey_round_trip() {
        let pubkey = Pubkey::new_unique();
        let bytes: Bytes32 = pubkey.into();

        assert_eq!(bytes, pubkey);
        assert_eq!(bytes.to_pubkey(), pubkey);
    }

    #[test]
    fn u64_word_layout() {
        let word = u64_word(0x0102_0304_0506_0708);

        assert_eq!(word[..24], [0u8; 24]);
        assert_eq!(word[24..], [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn u64_word_max() {
        let word = u64_word(u64::MAX);

        assert_eq!(word[..24], [0u8; 24]);
        assert_eq!(word[24..], [0xff; 8]);
    }
}
