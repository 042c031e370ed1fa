//! Number a run of customer invoices and credit notes from journal masks.
//!
//! Run with: `cargo run --example invoice_numbering --features invoice`

use chrono::NaiveDate;
use docnum::core::{Mode, NumberingModel};
use docnum::invoice::{CustomerInvoiceNumbering, InvoiceDocument, InvoiceKind};
use docnum::store::{DocumentTable, EntityRecord, Journal, MemoryHost};

fn main() {
    let entity = EntityRecord {
        sales_invoice_journal: Some(Journal::new("F{yy}{0000}")),
        sales_credit_note_journal: Some(Journal::new("NC{yy}{0000}").with_min_number(100)),
        ..EntityRecord::new(1)
    };
    let mut host = MemoryHost::new().with_entity(entity);

    let rule = CustomerInvoiceNumbering;
    let date = NaiveDate::from_ymd_opt(2021, 3, 9).expect("valid date");

    println!("model: {} — {}", rule.name(), rule.description());
    println!("example: {}", rule.example());
    println!();

    for kind in [
        InvoiceKind::Standard,
        InvoiceKind::Standard,
        InvoiceKind::CreditNote,
        InvoiceKind::Standard,
    ] {
        let doc = InvoiceDocument {
            date,
            kind,
            entity_id: 1,
        };
        let reference = rule.next_ref(&host, &doc).expect("numbering failed");
        println!("{kind:?} -> {reference}");
        host.insert_ref(DocumentTable::CustomerInvoice, reference);
    }

    let doc = InvoiceDocument {
        date,
        kind: InvoiceKind::Standard,
        entity_id: 1,
    };
    let last = rule.value(&host, &doc, Mode::Last).expect("numbering failed");
    println!("\nlast issued invoice: {last}");
}
