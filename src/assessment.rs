use serde::Serialize;
use std::fmt;

pub const MALICIOUS_THRESHOLD: u32 = 60;
pub const SUSPICIOUS_THRESHOLD: u32 = 30;
pub const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentKind {
    Message,
    Url,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLabel {
    Safe,
    Suspicious,
    Malicious,
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLabel::Safe => write!(f, "Safe"),
            RiskLabel::Suspicious => write!(f, "Suspicious"),
            RiskLabel::Malicious => write!(f, "Malicious"),
        }
    }
}

/// Single source of truth for the score-to-label thresholds, shared by both
/// rule engines and the hybrid overlay.
pub fn label_for_score(score: u32) -> RiskLabel {
    match score {
        s if s >= MALICIOUS_THRESHOLD => RiskLabel::Malicious,
        s if s >= SUSPICIOUS_THRESHOLD => RiskLabel::Suspicious,
        _ => RiskLabel::Safe,
    }
}

/// Structural host metadata, populated only for URL assessments.
/// Components are empty strings where the input was unparsable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UrlMeta {
    pub host: String,
    pub domain: String,
    pub suffix: String,
    pub subdomain: String,
    pub params: u32,
}

/// Immutable result of one analysis. `reasons` preserves rule-evaluation
/// order; downstream display may truncate it but never reorder it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub kind: AssessmentKind,
    pub score: u32,
    pub label: RiskLabel,
    pub reasons: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<UrlMeta>,
}

/// Accumulator the engines fold their ordered rule list into: each firing
/// rule contributes a points delta and a reason, in evaluation order.
#[derive(Debug, Default)]
pub struct ScoreCard {
    score: u32,
    reasons: Vec<String>,
}

impl ScoreCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hit(&mut self, points: u32, reason: String) {
        self.score += points;
        self.reasons.push(reason);
    }

    pub fn finish(self, kind: AssessmentKind, meta: Option<UrlMeta>) -> RiskAssessment {
        let score = self.score.min(MAX_SCORE);
        RiskAssessment {
            kind,
            score,
            label: label_for_score(score),
            reasons: self.reasons,
            meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_thresholds_full_range() {
        for s in 0..=100u32 {
            let label = label_for_score(s);
            if s >= 60 {
                assert_eq!(label, RiskLabel::Malicious, "score {}", s);
            } else if s >= 30 {
                assert_eq!(label, RiskLabel::Suspicious, "score {}", s);
            } else {
                assert_eq!(label, RiskLabel::Safe, "score {}", s);
            }
        }
    }

    #[test]
    fn test_score_card_accumulates_in_order() {
        let mut card = ScoreCard::new();
        card.hit(12, "first".to_string());
        card.hit(20, "second".to_string());
        let assessment = card.finish(AssessmentKind::Message, None);
        assert_eq!(assessment.score, 32);
        assert_eq!(assessment.label, RiskLabel::Suspicious);
        assert_eq!(assessment.reasons, vec!["first", "second"]);
        assert!(assessment.meta.is_none());
    }

    #[test]
    fn test_score_card_clamps_at_100() {
        let mut card = ScoreCard::new();
        card.hit(80, "a".to_string());
        card.hit(80, "b".to_string());
        let assessment = card.finish(AssessmentKind::Message, None);
        assert_eq!(assessment.score, 100);
        assert_eq!(assessment.label, RiskLabel::Malicious);
    }
}
