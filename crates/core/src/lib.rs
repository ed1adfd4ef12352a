//! Core types for boltx
//!
//! This crate defines the vocabulary shared by every other boltx crate:
//! - `Value` / `Params`: request parameters and response metadata
//! - `Message`: the closed set of server response messages
//! - `Error`: failures reported by connection collaborators

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod message;
pub mod value;

pub use error::{Error, Result};
pub use message::{Message, MessageKind};
pub use value::{Params, Value};
