pub mod errors;

pub use errors::{DispatchError, TransportError};
