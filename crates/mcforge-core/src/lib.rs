//! mcforge core - command batches, chain compilation, and wire framing
//!
//! This crate provides the foundational pieces shared by the delivery
//! client and the CLI:
//! - CommandBatch and placement/endpoint/payload models
//! - The chain compiler: deterministic row-major layout of a batch into
//!   a single placeable structure
//! - Sentinel-framed wire encoding for the delivery protocol, plus the
//!   reference decoder a listener implements
//! - Error taxonomy and the logging facility

pub mod chain;
pub mod errors;
pub mod logging;
pub mod model;
pub mod sensitive;
pub mod wire;

// Re-export commonly used types
pub use chain::{compile, ChainArtifact, CommandCell};
pub use errors::{CoreError, Result};
pub use model::{
    BlockPos, CommandBatch, DeliveryPayload, EndpointConfig, Footprint, PlacementConfig,
};
pub use sensitive::Sensitive;
