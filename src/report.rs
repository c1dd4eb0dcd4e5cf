//! Report rendering for a spelling [`AnalysisResult`](crate::spelling::AnalysisResult).
//!
//! Each analysis is rendered twice: as a CSV table ([`table`]) and as a
//! paginated PDF summary ([`pdf`]). Both are pure functions of the analysis
//! and the generation timestamp.

pub mod pdf;
pub mod table;

pub use pdf::{PageLayout, render_pdf};
pub use table::render_csv;
