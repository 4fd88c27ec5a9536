//! Basic types shared by the whole crate.
//!
//! - [`Error`] / [`Result`] - error taxonomy
//! - [`ComponentType`] - numeric storage types with byte-level read/write
//! - [`ElementShape`] - per-item component counts

mod component;
mod element;
mod error;

pub use component::ComponentType;
pub use element::ElementShape;
pub use error::{Error, Result};
