//! Progress-report numbering per parent project or order.
//!
//! Run with: `cargo test --features all --test progress_report_tests`

#![cfg(feature = "progress-report")]

use docnum::core::{NumberingError, NumberingModel};
use docnum::progress_report::{ProgressReportNumbering, ReportDocument};
use docnum::store::{MemoryHost, OrderRecord, ProjectRecord, ReportParent};

fn host() -> MemoryHost {
    MemoryHost::new()
        .with_project(ProjectRecord {
            id: 1,
            reference: "P22112".into(),
        })
        .with_order(OrderRecord {
            id: 9,
            reference: "P22112-PO0003".into(),
        })
}

#[test]
fn first_report_of_a_project() {
    let rule = ProgressReportNumbering;
    let doc = ReportDocument {
        project_id: Some(1),
        order_id: None,
    };
    assert_eq!(rule.next_ref(&host(), &doc).unwrap(), "P22112-EA0001");
}

#[test]
fn project_sequence_counts_existing_reports() {
    let mut host = host();
    host.insert_progress_report(ReportParent::Project(1));
    host.insert_progress_report(ReportParent::Project(1));

    let rule = ProgressReportNumbering;
    let doc = ReportDocument {
        project_id: Some(1),
        order_id: None,
    };
    assert_eq!(rule.next_ref(&host, &doc).unwrap(), "P22112-EA0003");
}

#[test]
fn order_report_uses_the_order_ref() {
    let rule = ProgressReportNumbering;
    let doc = ReportDocument {
        project_id: None,
        order_id: Some(9),
    };
    assert_eq!(rule.next_ref(&host(), &doc).unwrap(), "P22112-PO0003-0001");
}

#[test]
fn order_link_wins_over_project_link() {
    let mut host = host();
    host.insert_progress_report(ReportParent::Project(1));

    let rule = ProgressReportNumbering;
    let doc = ReportDocument {
        project_id: Some(1),
        order_id: Some(9),
    };
    // Counted under the order, not the project.
    assert_eq!(rule.next_ref(&host, &doc).unwrap(), "P22112-PO0003-0001");
}

#[test]
fn order_and_project_sequences_are_independent() {
    let mut host = host();
    host.insert_progress_report(ReportParent::Order(9));
    host.insert_progress_report(ReportParent::Order(9));
    host.insert_progress_report(ReportParent::Project(1));

    let rule = ProgressReportNumbering;

    let on_order = ReportDocument {
        project_id: None,
        order_id: Some(9),
    };
    assert_eq!(rule.next_ref(&host, &on_order).unwrap(), "P22112-PO0003-0003");

    let on_project = ReportDocument {
        project_id: Some(1),
        order_id: None,
    };
    assert_eq!(rule.next_ref(&host, &on_project).unwrap(), "P22112-EA0002");
}

#[test]
fn orphan_report_is_rejected() {
    let rule = ProgressReportNumbering;
    let doc = ReportDocument {
        project_id: None,
        order_id: None,
    };
    assert!(matches!(
        rule.next_ref(&host(), &doc).unwrap_err(),
        NumberingError::MissingParent
    ));
}
