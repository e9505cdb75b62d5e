pub mod directory;
pub mod pricing;
pub mod triage;
