//! Publisher Core - edition versioning kernel for a content publishing workflow
//!
//! This crate provides:
//! - Content items (answers, guides, transactions, local transactions) and
//!   their append-only edition histories
//! - The edition translator, which builds the next working edition of an
//!   item from its latest one
//! - The validity rule over an edition and its owning item
//! - An in-memory store with the workflow operations that number, validate
//!   and persist editions
//! - The LGSL/SNAC join between local transactions and the councils that
//!   provide them

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod rules;
pub mod translator;

// Used by the logging macros
#[doc(hidden)]
pub use publisher_core_types;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, PublisherError, Result};
pub use model::{ContentItem, ContentKind, Edition, EditionDetails, Part};
pub use ops::Store;
pub use translator::{translate, CarryForward, DraftEdition};
