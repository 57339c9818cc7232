//! Log message types for node runs, registry assembly and settings IO.
//!
//! Each message is a small struct with a `Display` impl so the wording lives in one
//! place and call sites stay `tracing::info!("{}", msg)`.

pub mod messages;
