use alloy_primitives::Address;
use alloy_sol_types::{sol, SolCall};
use num_bigint::BigUint;
use tracing::debug;

use super::units::to_whole_units;

sol! {
    function symbol() external view returns (string);
    function balanceOf(address account) external view returns (uint256);
    function transfer(address to, uint256 amount) external returns (bool);
}

/// Length of one ABI-encoded argument word.
const WORD_LEN: usize = 32;
/// An address occupies the low 20 bytes of its word.
const ADDRESS_OFFSET: usize = WORD_LEN - 20;

/// Contract call recognized from raw call-data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedCall {
    /// `symbol()`
    Symbol,
    /// `balanceOf(address)`
    BalanceOf { account: Address },
    /// `transfer(address,uint256)`; `amount` is already in whole token units.
    Transfer {
        recipient: Address,
        amount: BigUint,
        base_amount: BigUint,
    },
    /// Any other selector, or call-data too short / not hex.
    Unrecognized,
}

/// Decode `0x`-prefixed call-data. `decimals` belongs to the called token and
/// is used to bring a transfer amount down to whole units.
///
/// Call-data must be whole bytes: an odd number of hex digits is not decoded
/// and yields [`DecodedCall::Unrecognized`].
pub fn decode_calldata(data: &str, decimals: u8) -> DecodedCall {
    let Some(bytes) = data
        .strip_prefix("0x")
        .and_then(|hex_str| hex::decode(hex_str).ok())
    else {
        debug!("call-data is not 0x-prefixed hex");
        return DecodedCall::Unrecognized;
    };

    if bytes.len() < 4 {
        return DecodedCall::Unrecognized;
    }

    let mut selector = [0u8; 4];
    selector.copy_from_slice(&bytes[..4]);
    let args = &bytes[4..];

    let decoded = if selector == symbolCall::SELECTOR {
        DecodedCall::Symbol
    } else if selector == balanceOfCall::SELECTOR {
        match read_address(args, 0) {
            Some(account) => DecodedCall::BalanceOf { account },
            None => DecodedCall::Unrecognized,
        }
    } else if selector == transferCall::SELECTOR {
        match (read_address(args, 0), read_word(args, 1)) {
            (Some(recipient), Some(word)) => {
                let base_amount = BigUint::from_bytes_be(word);
                DecodedCall::Transfer {
                    recipient,
                    amount: to_whole_units(&base_amount, decimals),
                    base_amount,
                }
            }
            _ => DecodedCall::Unrecognized,
        }
    } else {
        DecodedCall::Unrecognized
    };

    debug!("decoded selector 0x{} -> {:?}", hex::encode(selector), decoded);
    decoded
}

/// The `index`-th 32-byte argument word, if present.
fn read_word(args: &[u8], index: usize) -> Option<&[u8]> {
    let start = index * WORD_LEN;
    args.get(start..start + WORD_LEN)
}

/// Address in the low 20 bytes of the `index`-th word; the upper 12 bytes are ignored.
fn read_address(args: &[u8], index: usize) -> Option<Address> {
    read_word(args, index).map(|word| Address::from_slice(&word[ADDRESS_OFFSET..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::keccak256;

    const HOLDER: &str = "ccc324e27aa67bd2dcc844e45cfd1fba3a670340";

    fn selector_of(signature: &str) -> [u8; 4] {
        let hash = keccak256(signature.as_bytes());
        let mut selector = [0u8; 4];
        selector.copy_from_slice(&hash[..4]);
        selector
    }

    #[test]
    fn test_selectors_match_signatures() {
        assert_eq!(symbolCall::SELECTOR, selector_of("symbol()"));
        assert_eq!(hex::encode(balanceOfCall::SELECTOR), "70a08231");
        assert_eq!(hex::encode(transferCall::SELECTOR), "a9059cbb");
        assert_eq!(hex::encode(symbolCall::SELECTOR), "95d89b41");
    }

    #[test]
    fn test_decode_balance_of() {
        let data = format!("0x70a08231{:0>64}", HOLDER);
        let expected: Address = HOLDER.parse().unwrap();
        assert_eq!(
            decode_calldata(&data, 18),
            DecodedCall::BalanceOf { account: expected }
        );
    }

    #[test]
    fn test_decode_balance_of_ignores_padding_noise() {
        let data = format!("0x70a08231{}{}", "ff".repeat(12), HOLDER);
        let expected: Address = HOLDER.parse().unwrap();
        assert_eq!(
            decode_calldata(&data, 18),
            DecodedCall::BalanceOf { account: expected }
        );
    }

    #[test]
    fn test_decode_transfer_scales_to_whole_units() {
        // 2.5 USDT at 6 decimals -> 2 whole units
        let data = format!("0xa9059cbb{:0>64}{:064x}", HOLDER, 2_500_000u64);
        match decode_calldata(&data, 6) {
            DecodedCall::Transfer {
                recipient,
                amount,
                base_amount,
            } => {
                assert_eq!(recipient, HOLDER.parse::<Address>().unwrap());
                assert_eq!(amount, BigUint::from(2u32));
                assert_eq!(base_amount, BigUint::from(2_500_000u32));
            }
            other => panic!("expected transfer, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_symbol() {
        assert_eq!(decode_calldata("0x95d89b41", 18), DecodedCall::Symbol);
    }

    #[test]
    fn test_unrecognized_inputs() {
        // unknown selector
        assert_eq!(decode_calldata("0x06fdde03", 18), DecodedCall::Unrecognized);
        // truncated argument
        let short = format!("0x70a08231{}", &HOLDER[..20]);
        assert_eq!(decode_calldata(&short, 18), DecodedCall::Unrecognized);
        // transfer without amount word
        let no_amount = format!("0xa9059cbb{:0>64}", HOLDER);
        assert_eq!(decode_calldata(&no_amount, 18), DecodedCall::Unrecognized);
        // not hex, no prefix, too short
        assert_eq!(decode_calldata("0xzzzzzzzz", 18), DecodedCall::Unrecognized);
        assert_eq!(decode_calldata("70a08231", 18), DecodedCall::Unrecognized);
        assert_eq!(decode_calldata("0x70a0", 18), DecodedCall::Unrecognized);
        assert_eq!(decode_calldata("0x", 18), DecodedCall::Unrecognized);
    }

    #[test]
    fn test_odd_length_calldata_is_unrecognized() {
        // a complete balanceOf with one stray trailing nibble
        let data = format!("0x70a08231{:0>64}0", HOLDER);
        assert_eq!(decode_calldata(&data, 18), DecodedCall::Unrecognized);
        assert_eq!(decode_calldata("0x95d89b4", 18), DecodedCall::Unrecognized);
    }
}
