//! Level-specific token decoders.
//!
//! - [`symbols`]: level 2, punctuation-to-digit substitution on the raw text.
//! - [`weights`]: level 3, power-of-two decomposition of the parsed integer.

pub mod symbols;
pub mod weights;

pub use symbols::decode_symbols;
pub use weights::decode_weight;
