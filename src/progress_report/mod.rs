//! Progress-report references numbered per parent document.

use serde::{Deserialize, Serialize};

use crate::core::{NumberingError, NumberingModel};
use crate::store::{HostDatabase, ReportParent};

/// The progress report as the numbering rule sees it.
///
/// A report hangs off an order or, failing that, a project; the order link
/// wins when both are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Project the report belongs to.
    pub project_id: Option<i64>,
    /// Order the report belongs to, taking precedence over the project.
    pub order_id: Option<i64>,
}

/// Progress-report references: `{project}-EA0001` for project reports,
/// `{order}-0001` for order reports.
///
/// The sequence is one past the number of reports already attached to the
/// same parent, left-padded to four digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressReportNumbering;

impl NumberingModel for ProgressReportNumbering {
    type Document = ReportDocument;

    fn name(&self) -> &'static str {
        "per-parent"
    }

    fn description(&self) -> &'static str {
        "Progress-report counters kept per parent project or order"
    }

    fn example(&self) -> &'static str {
        "P22112-EA0001 (project) or P22112-PO0003-0002 (order)"
    }

    fn next_ref(
        &self,
        db: &dyn HostDatabase,
        report: &ReportDocument,
    ) -> Result<String, NumberingError> {
        let (parent, parent_ref, separator) = if let Some(order_id) = report.order_id {
            let order = db.order(order_id)?;
            (ReportParent::Order(order.id), order.reference, "-")
        } else if let Some(project_id) = report.project_id {
            let project = db.project(project_id)?;
            (
                ReportParent::Project(project.id),
                project.reference,
                "-EA",
            )
        } else {
            return Err(NumberingError::MissingParent);
        };

        let sequence = db.progress_report_count(parent)? + 1;
        Ok(format!("{parent_ref}{separator}{sequence:04}"))
    }
}
