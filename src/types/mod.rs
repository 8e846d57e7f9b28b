//! Core data types.

mod etymology;
mod origin;
mod word;

pub use etymology::EtymologyResult;
pub use origin::{LANGUAGE_POOL, Origin};
pub use word::WordData;
