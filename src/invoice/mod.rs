//! Invoice numbering from entity journals.
//!
//! Both invoice rules follow the same journal flow: pick the entity's journal
//! for the document kind, resolve its mask with the invoice date, read the
//! highest counter used under the resolved base, floor it with the journal's
//! minimum, and splice the formatted counter back in. They differ only in
//! which pair of journals they read and which table they count.

mod customer;
mod supplier;

pub use customer::*;
pub use supplier::*;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{JournalMask, Mode, NumberingError, format_counter};
use crate::store::{DocumentTable, HostDatabase, Journal};

/// The invoice as the numbering rules see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDocument {
    /// Invoice date (not the creation date).
    pub date: NaiveDate,
    /// Invoice kind, selecting the journal.
    pub kind: InvoiceKind,
    /// Billing entity carrying the journal configuration.
    pub entity_id: i64,
}

/// Invoice kinds relevant to journal selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceKind {
    /// Regular invoice.
    Standard,
    /// Deposit (down payment) invoice.
    Deposit,
    /// Replacement invoice.
    Replacement,
    /// Credit note — numbered from the credit-note journal.
    CreditNote,
}

impl InvoiceKind {
    /// Credit notes draw from a separate journal.
    pub fn is_credit_note(self) -> bool {
        matches!(self, Self::CreditNote)
    }
}

/// Shared journal flow of the two invoice rules.
fn journal_value(
    db: &dyn HostDatabase,
    table: DocumentTable,
    entity_id: i64,
    journal: Option<&Journal>,
    journal_name: &'static str,
    date: NaiveDate,
    mode: Mode,
) -> Result<String, NumberingError> {
    let journal = journal.ok_or(NumberingError::JournalNotConfigured {
        entity: entity_id,
        journal: journal_name,
    })?;

    let mask = JournalMask::parse(&journal.mask)?;
    let resolved = mask.resolve(date);
    let base = resolved.base();
    if base.is_empty() {
        return Err(NumberingError::EmptyJournalBase { entity: entity_id });
    }

    let counter_pos = base.len();
    let max = db
        .max_counter(table, std::slice::from_ref(&base), counter_pos)?
        .unwrap_or(0)
        .max(journal.min_number);

    Ok(resolved.compose(&format_counter(max, mode, resolved.width())))
}
