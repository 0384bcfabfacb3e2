use crate::assessment::{AssessmentKind, RiskAssessment, ScoreCard, UrlMeta};
use crate::suffix::{is_dotted_decimal, PslSplitter, SuffixSplitter};
use crate::vocabulary::RuleVocabulary;

/// Heuristic rule engine for URLs. Splits the host at the registrable
/// boundary via the injected [`SuffixSplitter`], then runs a fixed ordered
/// rule list; malformed input degrades to empty host components.
pub struct UrlAnalyzer {
    vocab: &'static RuleVocabulary,
    splitter: Box<dyn SuffixSplitter>,
}

impl Default for UrlAnalyzer {
    fn default() -> Self {
        Self::new(Box::new(PslSplitter::new()))
    }
}

impl UrlAnalyzer {
    pub fn new(splitter: Box<dyn SuffixSplitter>) -> Self {
        Self {
            vocab: RuleVocabulary::shared(),
            splitter,
        }
    }

    pub fn analyze(&self, url: &str) -> RiskAssessment {
        let u = url.trim();
        let lower = u.to_lowercase();
        let parts = self.splitter.split(u);
        let host = parts.host();
        let mut card = ScoreCard::new();

        // Protocol
        if !lower.starts_with("https://") {
            card.hit(8, "Non-HTTPS protocol".to_string());
        }

        // IP literal as host
        if is_dotted_decimal(&host) {
            card.hit(20, "IP address used as host".to_string());
        }

        // Deeply nested host
        let dots = host.matches('.').count();
        if dots >= 3 {
            card.hit(8, format!("Many subdomains ({} levels)", dots + 1));
        }

        // Userinfo-spoofing trick
        if u.contains('@') {
            card.hit(
                12,
                "'@' present in URL (potential visual confusion)".to_string(),
            );
        }

        // Internationalized / non-ASCII content
        if lower.contains("xn--") || !u.is_ascii() {
            card.hit(12, "Punycode/Unicode present".to_string());
        }

        // Abused suffixes
        if self.vocab.is_rare_suffix(&parts.suffix) {
            card.hit(6, format!("Rare TLD ({})", parts.suffix));
        }

        // Homoglyph substitutions in the host
        if self.vocab.has_lookalike(&host) {
            card.hit(10, "Lookalike characters detected".to_string());
        }

        // Oversized URL
        let length = u.chars().count();
        if length > 120 {
            card.hit(6, format!("Long URL ({})", length));
        }

        // Query parameter count; recorded in meta even below the threshold
        let params = match u.split_once('?') {
            Some((_, query)) => query.split('&').count() as u32,
            None => 0,
        };
        if params >= 3 {
            card.hit(4, format!("Many query parameters ({})", params));
        }

        // Suspicious vocabulary, 3 points per distinct hit capped at 12
        let term_hits = self.vocab.url_term_hits(&lower);
        if !term_hits.is_empty() {
            card.hit(
                (3 * term_hits.len() as u32).min(12),
                format!("Suspicious terms in URL: {}", term_hits.join(", ")),
            );
        }

        card.finish(
            AssessmentKind::Url,
            Some(UrlMeta {
                host,
                domain: parts.domain,
                suffix: parts.suffix,
                subdomain: parts.subdomain,
                params,
            }),
        )
    }
}
