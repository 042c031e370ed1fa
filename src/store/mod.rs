//! The host database seam.
//!
//! Numbering rules never talk SQL. They see the host through [`HostDatabase`]:
//! record fetches for the configuration hanging off entities, business units,
//! projects and orders, plus the one aggregate every rule needs — the highest
//! counter already used under a reference prefix. A SQL-backed host implements
//! this trait over its own connection; [`MemoryHost`] ships for everyone else.

mod memory;

pub use memory::MemoryHost;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by a [`HostDatabase`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// A referenced record does not exist.
    #[error("{what} {id} not found")]
    NotFound {
        /// Record kind, e.g. "entity" or "project".
        what: &'static str,
        /// Record id.
        id: i64,
    },

    /// The backing store failed.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// The reference tables counters are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentTable {
    /// Customer (sales) invoices.
    CustomerInvoice,
    /// Supplier (purchase) invoices.
    SupplierInvoice,
    /// Projects.
    Project,
    /// Purchase orders.
    PurchaseOrder,
}

/// What a progress report hangs off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportParent {
    /// Report attached directly to a project.
    Project(i64),
    /// Report attached to a purchase order.
    Order(i64),
}

/// One journal of a billing entity: a mask plus the counter floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    /// Mask string, e.g. `"F{yy}{0000}"`.
    pub mask: String,
    /// Minimum counter value; the observed maximum is floored with this, so
    /// a fresh journal can start above 1.
    pub min_number: i64,
}

impl Journal {
    /// Journal with the given mask and a zero floor.
    pub fn new(mask: impl Into<String>) -> Self {
        Self {
            mask: mask.into(),
            min_number: 0,
        }
    }

    /// Set the counter floor.
    pub fn with_min_number(mut self, min_number: i64) -> Self {
        self.min_number = min_number;
        self
    }
}

/// A billing entity and its journal configuration.
///
/// The four journals are optional; an unset journal means the entity does not
/// issue that document kind and numbering it is a configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Entity id.
    pub id: i64,
    /// Third party this entity bills as, when it is also a company in the
    /// store. Used to classify purchase orders as internal.
    pub company_id: Option<i64>,
    /// Journal for customer invoices.
    pub sales_invoice_journal: Option<Journal>,
    /// Journal for customer credit notes.
    pub sales_credit_note_journal: Option<Journal>,
    /// Journal for supplier invoices.
    pub purchase_invoice_journal: Option<Journal>,
    /// Journal for supplier credit notes.
    pub purchase_credit_note_journal: Option<Journal>,
}

impl EntityRecord {
    /// Entity with no journals configured.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            company_id: None,
            sales_invoice_journal: None,
            sales_credit_note_journal: None,
            purchase_invoice_journal: None,
            purchase_credit_note_journal: None,
        }
    }
}

/// A business unit owning a range of leading project numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessUnitRecord {
    /// Business unit id.
    pub id: i64,
    /// First leading number of the unit's project range.
    pub number_start: u32,
    /// Last leading number of the unit's project range (inclusive).
    pub number_stop: u32,
}

/// The slice of a project record numbering needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Project id.
    pub id: i64,
    /// Project reference, e.g. "P21156".
    pub reference: String,
}

/// The slice of an order record numbering needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Order id.
    pub id: i64,
    /// Order reference, e.g. "P21156-PO0003".
    pub reference: String,
}

/// The database handle the host supplies to every numbering rule.
pub trait HostDatabase {
    /// Fetch a billing entity with its journal configuration.
    fn entity(&self, id: i64) -> Result<EntityRecord, StoreError>;

    /// Fetch a business unit.
    fn business_unit(&self, id: i64) -> Result<BusinessUnitRecord, StoreError>;

    /// Fetch a project.
    fn project(&self, id: i64) -> Result<ProjectRecord, StoreError>;

    /// Fetch an order.
    fn order(&self, id: i64) -> Result<OrderRecord, StoreError>;

    /// Highest counter among existing references in `table` that start with
    /// any of `prefixes`, the counter being the run of digits read from byte
    /// offset `counter_pos`.
    ///
    /// `Ok(None)` when no reference matches. A matching reference without
    /// digits at `counter_pos` counts as 0, the way a SQL
    /// `MAX(CAST(SUBSTRING(ref FROM n) AS SIGNED))` would score it.
    fn max_counter(
        &self,
        table: DocumentTable,
        prefixes: &[String],
        counter_pos: usize,
    ) -> Result<Option<i64>, StoreError>;

    /// Number of progress reports already attached to `parent`.
    fn progress_report_count(&self, parent: ReportParent) -> Result<u64, StoreError>;
}
