use crate::model::CommandBatch;
use crate::sensitive::Sensitive;

/// One delivery attempt's worth of data
///
/// Built fresh per attempt from the current batch and settings, never
/// persisted, and consumed by the delivery client.
#[derive(Debug, Clone)]
pub struct DeliveryPayload {
    /// Name (or UUID) of the target world
    pub world: String,
    /// Listener password; redacted everywhere except the wire encoder
    pub password: Sensitive<String>,
    /// The full generated command batch
    pub commands: CommandBatch,
}

impl DeliveryPayload {
    pub fn new(world: impl Into<String>, password: impl Into<String>, commands: CommandBatch) -> Self {
        Self {
            world: world.into(),
            password: Sensitive::new(password.into()),
            commands,
        }
    }
}
