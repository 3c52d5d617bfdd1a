//! Scanner module.
//!
//! The DFA driver is split by state:
//! - `core` - Scanner struct, the `next_token` loop and the START state
//! - `state` - DFA states and per-character transitions
//! - `comment` - IN_COMMENT
//! - `operator` - single-character operators and IN_ASSIGN
//! - `number` - IN_NUMBER
//! - `identifier` - IN_IDENTIFIER and reserved-word reclassification

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod state;

pub use self::core::Scanner;
pub use operator::operator_kind;
pub use state::State;
