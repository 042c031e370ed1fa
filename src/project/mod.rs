//! Project reference numbering with business-unit counter ranges.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::{Mode, NumberingError, NumberingModel, format_counter};
use crate::store::{DocumentTable, HostDatabase};

/// The project as the numbering rule sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDocument {
    /// Project creation date; its two-digit year goes into the prefix.
    pub created: NaiveDate,
    /// Project kind, selecting the prefix letter.
    pub kind: ProjectKind,
    /// Business unit the project belongs to.
    pub business_unit_id: i64,
}

/// Project kinds relevant to the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectKind {
    /// Regular project — `P` prefix.
    Standard,
    /// Quotation — `D` prefix.
    Quotation,
}

/// Project references of the form `P{yy}NNN` / `D{yy}NNN`.
///
/// Each business unit owns a range of leading counter numbers
/// (`number_start..=number_stop`), so `P22` projects of unit 45 live in
/// `P2245xx` while unit 50 issues `P2250xx`. The counter is read across all
/// leading numbers of the unit's range and seeded at `number_start * 100`
/// when the unit has no project yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectNumbering;

impl NumberingModel for ProjectNumbering {
    type Document = ProjectDocument;

    fn name(&self) -> &'static str {
        "project-code"
    }

    fn description(&self) -> &'static str {
        "Year-prefixed project codes drawn from the business unit's counter range"
    }

    fn example(&self) -> &'static str {
        "P22045 or D21125"
    }

    fn next_ref(
        &self,
        db: &dyn HostDatabase,
        project: &ProjectDocument,
    ) -> Result<String, NumberingError> {
        let year = project.created.year().rem_euclid(100);
        let prefix = match project.kind {
            ProjectKind::Quotation => format!("D{year:02}"),
            ProjectKind::Standard => format!("P{year:02}"),
        };

        let unit = db.business_unit(project.business_unit_id)?;
        let prefixes: Vec<String> = (unit.number_start..=unit.number_stop)
            .map(|n| format!("{prefix}{n}"))
            .collect();

        let max = db
            .max_counter(DocumentTable::Project, &prefixes, prefix.len())?
            .unwrap_or(i64::from(unit.number_start) * 100);

        Ok(format!("{prefix}{}", format_counter(max, Mode::Next, 3)))
    }
}
