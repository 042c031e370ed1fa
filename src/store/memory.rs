use std::collections::HashMap;

use super::{
    BusinessUnitRecord, DocumentTable, EntityRecord, HostDatabase, OrderRecord, ProjectRecord,
    ReportParent, StoreError,
};

/// In-memory [`HostDatabase`] used by the tests, the demos, and hosts that
/// keep their documents outside SQL.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    entities: HashMap<i64, EntityRecord>,
    business_units: HashMap<i64, BusinessUnitRecord>,
    projects: HashMap<i64, ProjectRecord>,
    orders: HashMap<i64, OrderRecord>,
    refs: HashMap<DocumentTable, Vec<String>>,
    report_counts: HashMap<ReportParent, u64>,
}

impl MemoryHost {
    /// Empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a billing entity.
    pub fn with_entity(mut self, entity: EntityRecord) -> Self {
        self.entities.insert(entity.id, entity);
        self
    }

    /// Add a business unit.
    pub fn with_business_unit(mut self, unit: BusinessUnitRecord) -> Self {
        self.business_units.insert(unit.id, unit);
        self
    }

    /// Add a project.
    pub fn with_project(mut self, project: ProjectRecord) -> Self {
        self.projects.insert(project.id, project);
        self
    }

    /// Add an order.
    pub fn with_order(mut self, order: OrderRecord) -> Self {
        self.orders.insert(order.id, order);
        self
    }

    /// Record an issued reference in a table.
    pub fn insert_ref(&mut self, table: DocumentTable, reference: impl Into<String>) {
        self.refs.entry(table).or_default().push(reference.into());
    }

    /// Record one more progress report under a parent.
    pub fn insert_progress_report(&mut self, parent: ReportParent) {
        *self.report_counts.entry(parent).or_default() += 1;
    }
}

/// Leading digit run parsed as an integer, 0 when there is none. Matches the
/// scoring of `CAST(SUBSTRING(ref FROM n) AS SIGNED)` on non-numeric text.
fn leading_int(s: &str) -> i64 {
    let digits = s.bytes().take_while(|b| b.is_ascii_digit()).count().min(18);
    s[..digits].parse().unwrap_or(0)
}

impl HostDatabase for MemoryHost {
    fn entity(&self, id: i64) -> Result<EntityRecord, StoreError> {
        self.entities
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { what: "entity", id })
    }

    fn business_unit(&self, id: i64) -> Result<BusinessUnitRecord, StoreError> {
        self.business_units
            .get(&id)
            .copied()
            .ok_or(StoreError::NotFound {
                what: "business unit",
                id,
            })
    }

    fn project(&self, id: i64) -> Result<ProjectRecord, StoreError> {
        self.projects
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { what: "project", id })
    }

    fn order(&self, id: i64) -> Result<OrderRecord, StoreError> {
        self.orders
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { what: "order", id })
    }

    fn max_counter(
        &self,
        table: DocumentTable,
        prefixes: &[String],
        counter_pos: usize,
    ) -> Result<Option<i64>, StoreError> {
        let refs = match self.refs.get(&table) {
            Some(refs) => refs,
            None => return Ok(None),
        };
        Ok(refs
            .iter()
            .filter(|r| prefixes.iter().any(|p| r.starts_with(p.as_str())))
            .map(|r| leading_int(r.get(counter_pos..).unwrap_or("")))
            .max())
    }

    fn progress_report_count(&self, parent: ReportParent) -> Result<u64, StoreError> {
        Ok(self.report_counts.get(&parent).copied().unwrap_or(0))
    }
}
