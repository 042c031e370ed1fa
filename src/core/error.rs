use thiserror::Error;

use crate::core::mask::MaskError;
use crate::store::StoreError;

/// Errors that can occur while computing a document reference.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NumberingError {
    /// The host store failed or a referenced record does not exist.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The configured journal mask could not be parsed.
    #[error(transparent)]
    Mask(#[from] MaskError),

    /// The entity has no journal configured for the requested document kind.
    #[error("entity {entity} has no {journal} journal configured")]
    JournalNotConfigured {
        /// Billing entity id.
        entity: i64,
        /// Which journal was looked up (e.g. "sales invoice").
        journal: &'static str,
    },

    /// The journal mask resolved to an empty base, so no prefix exists to
    /// count existing references under.
    #[error("journal mask for entity {entity} resolves to an empty base")]
    EmptyJournalBase {
        /// Billing entity id.
        entity: i64,
    },

    /// A purchase order was numbered before being attached to a project.
    #[error("order is not attached to a project")]
    MissingProject,

    /// A progress report is attached to neither a project nor an order.
    #[error("progress report has no parent project or order")]
    MissingParent,
}
