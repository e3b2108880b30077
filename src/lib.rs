//! docperm - Flat document permission summaries
//!
//! Converts between fine-grained permission rows (one per user/action) and
//! the per-user, per-document toggle record clients work with.

pub mod document;
pub mod error;
pub mod permission;

#[cfg(feature = "server")]
pub mod server;

pub use document::{
    decode_document_permissions, encode_document_permissions, encode_document_record,
    has_any_document_permission, DocumentRecord,
};
pub use error::{DocpermError, Result};
pub use permission::{Action, Location, Permission, Scope, Who};
