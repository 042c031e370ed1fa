use super::{InvoiceDocument, journal_value};
use crate::core::{Mode, NumberingError, NumberingModel};
use crate::store::{DocumentTable, HostDatabase};

/// Customer invoice numbering from the entity's sales journals.
///
/// Standard, deposit, and replacement invoices draw from the sales invoice
/// journal; credit notes from the sales credit-note journal. The mask on the
/// journal decides the shape of the reference, e.g. `"F{yy}{0000}"` yields
/// `F210001`, `F210002`, …
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerInvoiceNumbering;

impl CustomerInvoiceNumbering {
    /// Next or last reference for `invoice`, depending on `mode`.
    pub fn value(
        &self,
        db: &dyn HostDatabase,
        invoice: &InvoiceDocument,
        mode: Mode,
    ) -> Result<String, NumberingError> {
        let entity = db.entity(invoice.entity_id)?;
        let (journal, journal_name) = if invoice.kind.is_credit_note() {
            (entity.sales_credit_note_journal.as_ref(), "sales credit note")
        } else {
            (entity.sales_invoice_journal.as_ref(), "sales invoice")
        };
        journal_value(
            db,
            DocumentTable::CustomerInvoice,
            entity.id,
            journal,
            journal_name,
            invoice.date,
            mode,
        )
    }
}

impl NumberingModel for CustomerInvoiceNumbering {
    type Document = InvoiceDocument;

    fn name(&self) -> &'static str {
        "sales-journal"
    }

    fn description(&self) -> &'static str {
        "Customer invoice references from the billing entity's sales journal masks"
    }

    fn example(&self) -> &'static str {
        "F210001 (invoice) or NC210001 (credit note)"
    }

    fn next_ref(
        &self,
        db: &dyn HostDatabase,
        invoice: &InvoiceDocument,
    ) -> Result<String, NumberingError> {
        self.value(db, invoice, Mode::Next)
    }
}
