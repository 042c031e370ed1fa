//! Walk a project from its code to purchase orders and progress reports.
//!
//! Run with:
//! `cargo run --example project_numbering --features project,purchase-order,progress-report`

use chrono::NaiveDate;
use docnum::core::NumberingModel;
use docnum::progress_report::{ProgressReportNumbering, ReportDocument};
use docnum::project::{ProjectDocument, ProjectKind, ProjectNumbering};
use docnum::purchase_order::{OrderDocument, PurchaseOrderNumbering};
use docnum::store::{
    BusinessUnitRecord, DocumentTable, MemoryHost, OrderRecord, ProjectRecord, ReportParent,
};

fn main() {
    let mut host = MemoryHost::new().with_business_unit(BusinessUnitRecord {
        id: 1,
        number_start: 0,
        number_stop: 9,
    });

    // A new project in the unit's range.
    let project_rule = ProjectNumbering;
    let project_doc = ProjectDocument {
        created: NaiveDate::from_ymd_opt(2022, 4, 20).expect("valid date"),
        kind: ProjectKind::Standard,
        business_unit_id: 1,
    };
    let project_ref = project_rule
        .next_ref(&host, &project_doc)
        .expect("project numbering failed");
    println!("project: {project_ref}");
    host.insert_ref(DocumentTable::Project, project_ref.clone());
    host = host.with_project(ProjectRecord {
        id: 1,
        reference: project_ref,
    });

    // Two purchase orders under it.
    let po_rule = PurchaseOrderNumbering;
    let order_doc = OrderDocument {
        project_id: Some(1),
        entity_id: None,
        third_party_id: 77,
    };
    let mut last_order = String::new();
    for _ in 0..2 {
        let order_ref = po_rule
            .next_ref(&host, &order_doc)
            .expect("order numbering failed");
        println!("purchase order: {order_ref}");
        host.insert_ref(DocumentTable::PurchaseOrder, order_ref.clone());
        last_order = order_ref;
    }
    host = host.with_order(OrderRecord {
        id: 9,
        reference: last_order,
    });

    // Progress reports on the project and on the last order.
    let report_rule = ProgressReportNumbering;
    for doc in [
        ReportDocument {
            project_id: Some(1),
            order_id: None,
        },
        ReportDocument {
            project_id: None,
            order_id: Some(9),
        },
        ReportDocument {
            project_id: Some(1),
            order_id: None,
        },
    ] {
        let report_ref = report_rule
            .next_ref(&host, &doc)
            .expect("report numbering failed");
        println!("progress report: {report_ref}");
        let parent = match doc.order_id {
            Some(id) => ReportParent::Order(id),
            None => ReportParent::Project(doc.project_id.expect("parent")),
        };
        host.insert_progress_report(parent);
    }
}
