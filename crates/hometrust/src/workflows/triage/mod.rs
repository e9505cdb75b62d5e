pub mod consultation;
pub mod domain;
pub mod report;

mod classifier;

pub use classifier::{split_phrases, TriageClassifier};
pub use consultation::{build_context, ConsultationContext, ConsultationError};
pub use domain::{KeywordEntry, KeywordTable, Tier, TriageResult};
pub use report::TriageReport;
