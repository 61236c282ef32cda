/// Marker trait for state owned by the UI loop.
///
/// `Default` is the state at startup; `PartialEq` lets callers detect
/// whether an intent changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
