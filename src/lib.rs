//! # docnum
//!
//! Document-reference numbering rules for ERP back offices: the small, sharp
//! logic that turns "create this invoice" into `F210001` and "create this
//! purchase order" into `P21156-PO0001`.
//!
//! Each rule is a [`NumberingModel`](core::NumberingModel) the host ERP's
//! document-creation workflow calls with a [`HostDatabase`](store::HostDatabase)
//! handle. The library never owns the data: journal masks live on billing
//! entities, counter ranges on business units, and existing references in the
//! host's tables. A [`MemoryHost`](store::MemoryHost) is bundled for tests and
//! hosts without a SQL backend.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use docnum::core::{JournalMask, Mode, format_counter};
//!
//! let mask = JournalMask::parse("F{yy}{0000}").unwrap();
//! let resolved = mask.resolve(NaiveDate::from_ymd_opt(2021, 3, 9).unwrap());
//!
//! assert_eq!(resolved.base(), "F21");
//! let first = resolved.compose(&format_counter(0, Mode::Next, resolved.width()));
//! assert_eq!(first, "F210001");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Journal masks, counter rules, model trait, host store seam |
//! | `invoice` | Customer & supplier invoice numbering from entity journals |
//! | `project` | Project codes with business-unit counter ranges |
//! | `purchase-order` | Per-project purchase-order references |
//! | `progress-report` | Per-parent progress-report references |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod store;

#[cfg(feature = "invoice")]
pub mod invoice;

#[cfg(feature = "project")]
pub mod project;

#[cfg(feature = "purchase-order")]
pub mod purchase_order;

#[cfg(feature = "progress-report")]
pub mod progress_report;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
