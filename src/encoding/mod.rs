//! Flat string encodings used by form fields and the configuration API.

mod args;
mod map;

pub use args::{decode_args, encode_args};
pub use map::{
    decode_map, decode_map_strict, encode_map, try_encode_map, KEY_VALUE_SEPARATOR,
    PAIR_SEPARATOR,
};
