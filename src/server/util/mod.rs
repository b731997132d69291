//! Small helpers shared across layers.

pub mod parse;
pub mod password;
pub mod time;
pub mod token;
