//! Output collaborators for the final dataset
//!
//! This module handles:
//! - CSV persistence of the record sequence
//! - Chart image generation (affiliation bar chart, accreditation pie chart)
//! - Grid table rendering to the terminal

mod charts;
mod csv_output;
mod table;

pub use charts::{render_accreditation_chart, render_affiliation_chart};
pub use csv_output::write_csv;
pub use table::{print_table, render_table};
