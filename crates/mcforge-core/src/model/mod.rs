//! Core data model: command batches, placement, endpoint, and payload

pub mod batch;
pub mod endpoint;
pub mod payload;
pub mod placement;

pub use batch::CommandBatch;
pub use endpoint::EndpointConfig;
pub use payload::DeliveryPayload;
pub use placement::{BlockPos, Footprint, PlacementConfig};
