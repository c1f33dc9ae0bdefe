//! # blazefs
//!
//! Filesystem-semantics adapter for the Backblaze B2 object store. B2 is a
//! flat key-value store with no native directory concept, while the generic
//! storage interface this crate serves expects hierarchical semantics:
//! directories, recursive listing, renames, existence checks. `blazefs`
//! bridges the two by translating each interface call into calls on an
//! opaque remote client and normalizing the responses into one fixed
//! metadata record shape.
//!
//! ## Architecture
//!
//! The main abstractions are:
//! - [`B2Adapter`]: the path-semantics adapter implementing the generic
//!   storage operations
//! - [`B2Client`]: the boundary trait for the remote client (HTTP, auth,
//!   and retries live behind it and are out of scope here)
//! - [`FileRecord`]: the normalized metadata record every read path
//!   produces
//!
//! Directory semantics are emulated: listing filters the full bucket
//! listing by key pattern, and "creating" a directory uploads a zero-length
//! placeholder object.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod adapter;
mod client;
mod error;
mod listing;
mod location;
mod reader;
mod record;

pub use adapter::B2Adapter;
pub use client::{B2Client, B2File, RemoteError};
pub use error::{AdapterError, Result};
pub use location::B2Location;
pub use reader::ContentReader;
pub use record::{EntryKind, FileRecord, Visibility};
