pub mod calldata;
pub mod units;

pub use calldata::{decode_calldata, DecodedCall};
pub use units::{
    parse_address, parse_quantity, to_abi_word, to_base_units, to_hex_quantity, to_whole_units,
};
