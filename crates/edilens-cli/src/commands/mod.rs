//! Command implementations.

pub mod analyze;
pub mod decode;
pub mod filter;
pub mod sample;

pub use self::analyze::execute_analyze;
pub use self::decode::execute_decode;
pub use self::filter::execute_filter;
pub use self::sample::execute_sample;
