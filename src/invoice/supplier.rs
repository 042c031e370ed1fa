use super::{InvoiceDocument, journal_value};
use crate::core::{Mode, NumberingError, NumberingModel};
use crate::store::{DocumentTable, HostDatabase};

/// Supplier invoice numbering from the entity's purchase journals.
///
/// Same journal flow as [`CustomerInvoiceNumbering`](super::CustomerInvoiceNumbering),
/// read against the purchase invoice / purchase credit-note journals and the
/// supplier invoice table.
#[derive(Debug, Clone, Copy, Default)]
pub struct SupplierInvoiceNumbering;

impl SupplierInvoiceNumbering {
    /// Next or last reference for `invoice`, depending on `mode`.
    pub fn value(
        &self,
        db: &dyn HostDatabase,
        invoice: &InvoiceDocument,
        mode: Mode,
    ) -> Result<String, NumberingError> {
        let entity = db.entity(invoice.entity_id)?;
        let (journal, journal_name) = if invoice.kind.is_credit_note() {
            (
                entity.purchase_credit_note_journal.as_ref(),
                "purchase credit note",
            )
        } else {
            (entity.purchase_invoice_journal.as_ref(), "purchase invoice")
        };
        journal_value(
            db,
            DocumentTable::SupplierInvoice,
            entity.id,
            journal,
            journal_name,
            invoice.date,
            mode,
        )
    }
}

impl NumberingModel for SupplierInvoiceNumbering {
    type Document = InvoiceDocument;

    fn name(&self) -> &'static str {
        "purchase-journal"
    }

    fn description(&self) -> &'static str {
        "Supplier invoice references from the billing entity's purchase journal masks"
    }

    fn example(&self) -> &'static str {
        "FGES20210001"
    }

    fn next_ref(
        &self,
        db: &dyn HostDatabase,
        invoice: &InvoiceDocument,
    ) -> Result<String, NumberingError> {
        self.value(db, invoice, Mode::Next)
    }
}
