mod insights;
mod summary;
pub mod views;

pub use summary::TriageReport;

pub(crate) use insights::generate_insights;
