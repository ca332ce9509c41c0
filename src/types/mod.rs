//! Public types for the Muninn API.

mod input;
mod request;

pub use input::{ClassifiedInput, InputKind};
pub use request::{JsonMap, PartialHttpRequest};
