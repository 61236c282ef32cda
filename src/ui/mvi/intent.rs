/// Marker trait for intents: key commands and simulation outcomes.
pub trait Intent: Send + 'static {}
