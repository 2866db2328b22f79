//! mcforge delivery - one-shot transport to a remote command listener
//!
//! Sends a sentinel-framed payload over plain TCP or TLS: connect, write
//! the whole frame, half-close the write side, done. Exactly one attempt
//! per call; no retries, no pooling, no partial-success state.

pub mod client;
pub mod errors;

pub use client::{DeliveryClient, DeliveryReceipt};
pub use errors::{DeliveryError, Result};
