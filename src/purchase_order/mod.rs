//! Purchase-order references numbered per project.

use serde::{Deserialize, Serialize};

use crate::core::{Mode, NumberingError, NumberingModel, format_counter};
use crate::store::{DocumentTable, HostDatabase};

/// The purchase order as the numbering rule sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDocument {
    /// Project the order is placed under. Required for numbering.
    pub project_id: Option<i64>,
    /// Billing entity linked to the order, if any.
    pub entity_id: Option<i64>,
    /// Third party (supplier) the order is addressed to.
    pub third_party_id: i64,
}

/// Purchase-order references of the form `{project}-PO0001`.
///
/// Orders addressed to the billing entity's own company are internal and
/// carry the `-I-PO` marker instead, each marker keeping its own counter per
/// project.
#[derive(Debug, Clone, Copy, Default)]
pub struct PurchaseOrderNumbering;

impl PurchaseOrderNumbering {
    /// An order is internal when its billing entity is itself the supplier.
    fn is_internal(
        &self,
        db: &dyn HostDatabase,
        order: &OrderDocument,
    ) -> Result<bool, NumberingError> {
        let Some(entity_id) = order.entity_id else {
            return Ok(false);
        };
        let entity = db.entity(entity_id)?;
        Ok(entity.company_id == Some(order.third_party_id))
    }
}

impl NumberingModel for PurchaseOrderNumbering {
    type Document = OrderDocument;

    fn name(&self) -> &'static str {
        "project-po"
    }

    fn description(&self) -> &'static str {
        "Per-project purchase-order counters, split between external and internal orders"
    }

    fn example(&self) -> &'static str {
        "P21156-PO0001 (external) or P21156-I-PO0001 (internal)"
    }

    fn next_ref(
        &self,
        db: &dyn HostDatabase,
        order: &OrderDocument,
    ) -> Result<String, NumberingError> {
        let project_id = order.project_id.ok_or(NumberingError::MissingProject)?;
        let project = db.project(project_id)?;

        let marker = if self.is_internal(db, order)? {
            "-I-PO"
        } else {
            "-PO"
        };
        let base = format!("{}{marker}", project.reference);

        let max = db
            .max_counter(
                DocumentTable::PurchaseOrder,
                std::slice::from_ref(&base),
                base.len(),
            )?
            .unwrap_or(0);

        Ok(format!("{base}{}", format_counter(max, Mode::Next, 4)))
    }
}
