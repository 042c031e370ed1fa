//! The numbering-model extension point.

use crate::core::error::NumberingError;
use crate::store::HostDatabase;

/// A numbering rule the host's document-creation workflow plugs in.
///
/// Mirrors the classic ERP extension point: a rule advertises itself with a
/// name, a description, and a sample reference, can veto its own activation
/// against the existing data, and computes the next reference for a document.
pub trait NumberingModel {
    /// The document the rule numbers.
    type Document;

    /// Short machine name of the rule.
    fn name(&self) -> &'static str;

    /// One-line description shown in the host's numbering-rule picker.
    fn description(&self) -> &'static str;

    /// A sample reference the rule produces.
    fn example(&self) -> &'static str;

    /// Check that references already in the store do not conflict with this
    /// rule. The default accepts unconditionally.
    fn can_be_activated(&self, _db: &dyn HostDatabase) -> Result<(), NumberingError> {
        Ok(())
    }

    /// Compute the next free reference for `doc`.
    fn next_ref(
        &self,
        db: &dyn HostDatabase,
        doc: &Self::Document,
    ) -> Result<String, NumberingError>;
}
