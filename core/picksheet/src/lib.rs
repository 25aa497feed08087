//! FILENAME: core/picksheet/src/lib.rs
//! PURPOSE: Builds the two-page pickup and pick sheet from parsed orders.
//!
//! Page 1 is the carrier pickup list the driver signs (one row per package).
//! Page 2 is the pick list for the warehouse (one row per distinct item).

mod error;
pub mod job;
pub mod render;
pub mod sheet;

pub use error::SheetError;
pub use job::{collect_inputs, output_path, run, JobReport, JobRequest, JobSettings};
pub use render::{render, FontSpec, DEFAULT_FONT_FAMILY};
pub use sheet::{PickRow, PickSheet, PickupRow};
