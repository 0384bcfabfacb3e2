use std::fmt;

/// Binary verdict produced by label-only classifier models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlVerdict {
    Benign,
    Malicious,
}

/// Classifier model exposing a malicious-probability in [0,1].
pub trait ProbabilityClassifier: Send + Sync {
    fn malicious_probability(&self, url: &str) -> Result<f64, ClassifierError>;
}

/// Classifier model exposing only a binary verdict.
pub trait VerdictClassifier: Send + Sync {
    fn verdict(&self, url: &str) -> Result<UrlVerdict, ClassifierError>;
}

/// External URL classifier with its capability variant fixed at
/// construction; the variant is never probed at call time.
pub enum UrlClassifier {
    Probability(Box<dyn ProbabilityClassifier>),
    Verdict(Box<dyn VerdictClassifier>),
}

impl UrlClassifier {
    /// Adapt either variant to an integer score in [0,100]: probability
    /// scaled by 100 and floored, or 10/95 for a binary verdict.
    pub fn url_score(&self, url: &str) -> Result<u32, ClassifierError> {
        match self {
            UrlClassifier::Probability(model) => {
                let probability = model.malicious_probability(url)?.clamp(0.0, 1.0);
                Ok((probability * 100.0) as u32)
            }
            UrlClassifier::Verdict(model) => Ok(match model.verdict(url)? {
                UrlVerdict::Benign => 10,
                UrlVerdict::Malicious => 95,
            }),
        }
    }
}

/// Classifier failures are kept distinct from heuristic-rule evaluation,
/// which never errors.
#[derive(Debug)]
pub enum ClassifierError {
    /// The classifier artifact could not be constructed or loaded; the
    /// hybrid overlay is unusable until this is resolved.
    Unavailable(String),
    /// A per-call invocation failed; propagated to the caller, never
    /// masked or retried here.
    Invocation(String),
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifierError::Unavailable(detail) => {
                write!(f, "classifier unavailable: {}", detail)
            }
            ClassifierError::Invocation(detail) => {
                write!(f, "classifier invocation failed: {}", detail)
            }
        }
    }
}

impl std::error::Error for ClassifierError {}
