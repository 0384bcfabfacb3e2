pub mod analysis;
pub mod assessment;
pub mod batch;
pub mod classifier;
pub mod hybrid;
pub mod suffix;
pub mod vocabulary;

pub use analysis::message::MessageAnalyzer;
pub use analysis::url::UrlAnalyzer;
pub use assessment::{label_for_score, AssessmentKind, RiskAssessment, RiskLabel, UrlMeta};
pub use batch::{BatchRecord, BatchRunner, Row};
pub use classifier::{
    ClassifierError, ProbabilityClassifier, UrlClassifier, UrlVerdict, VerdictClassifier,
};
pub use hybrid::HybridOverlay;
pub use suffix::{HostParts, PslSplitter, SuffixSplitter};
pub use vocabulary::RuleVocabulary;
