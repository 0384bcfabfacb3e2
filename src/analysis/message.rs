use crate::assessment::{AssessmentKind, RiskAssessment, ScoreCard};
use crate::vocabulary::RuleVocabulary;
use regex::Regex;

/// Heuristic rule engine for free-text messages. Rules run in a fixed order
/// and are independently additive; any input degrades to zero matches rather
/// than failing.
pub struct MessageAnalyzer {
    vocab: &'static RuleVocabulary,
    caps_run: Regex,
    symbol_spam: Regex,
    otp_code: Regex,
}

impl Default for MessageAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageAnalyzer {
    pub fn new() -> Self {
        Self {
            vocab: RuleVocabulary::shared(),
            caps_run: Regex::new(r"[A-Z]{6,}").unwrap(),
            symbol_spam: Regex::new(r"[^\w\s.,:/@-]").unwrap(),
            otp_code: Regex::new(r"\b\d{4,8}\b").unwrap(),
        }
    }

    pub fn analyze(&self, text: &str) -> RiskAssessment {
        let msg = text.trim();
        let lower = msg.to_lowercase();
        let mut card = ScoreCard::new();

        // Urgency/pressure language
        if self
            .vocab
            .urgency_phrases()
            .iter()
            .any(|phrase| lower.contains(phrase))
        {
            card.hit(12, "Uses urgent/pressure language".to_string());
        }

        // Sensitive terms, 4 points per distinct hit capped at 20
        let term_hits = self.vocab.message_term_hits(&lower);
        if !term_hits.is_empty() {
            card.hit(
                (4 * term_hits.len() as u32).min(20),
                format!("Contains sensitive terms: {}", term_hits.join(", ")),
            );
        }

        // All-caps streaks
        if self.caps_run.is_match(msg) {
            card.hit(6, "Contains ALL-CAPS words".to_string());
        }

        // Emoji/symbol spam
        if self.symbol_spam.find_iter(msg).count() >= 5 {
            card.hit(4, "Contains many special characters/emojis".to_string());
        }

        // Shortened links
        if self.vocab.mentions_shortener(&lower) {
            card.hit(6, "Contains URL shortener".to_string());
        }

        // OTP prompt together with a code-shaped number
        if lower.contains("otp") && self.otp_code.is_match(&lower) {
            card.hit(4, "Mentions OTP with code in the message".to_string());
        }

        card.finish(AssessmentKind::Message, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::RiskLabel;

    #[test]
    fn test_empty_message_is_safe() {
        let analyzer = MessageAnalyzer::new();
        let assessment = analyzer.analyze("");
        assert_eq!(assessment.kind, AssessmentKind::Message);
        assert_eq!(assessment.score, 0);
        assert_eq!(assessment.label, RiskLabel::Safe);
        assert!(assessment.reasons.is_empty());
        assert!(assessment.meta.is_none());
    }

    #[test]
    fn test_whitespace_only_message_is_safe() {
        let analyzer = MessageAnalyzer::new();
        let assessment = analyzer.analyze("   \n\t  ");
        assert_eq!(assessment.score, 0);
        assert!(assessment.reasons.is_empty());
    }

    #[test]
    fn test_classic_scam_message_is_at_least_suspicious() {
        let analyzer = MessageAnalyzer::new();
        let assessment = analyzer
            .analyze("URGENT! Your account is locked. Verify now: http://bank.example-login.com/verify");
        assert!(assessment.score >= 30, "score was {}", assessment.score);
        assert_ne!(assessment.label, RiskLabel::Safe);
        // Urgency rule fires first
        assert_eq!(assessment.reasons[0], "Uses urgent/pressure language");
        // Sensitive-term reason follows with multiple hits
        assert!(assessment.reasons[1].starts_with("Contains sensitive terms:"));
    }

    #[test]
    fn test_sensitive_terms_sorted_alphabetically() {
        let analyzer = MessageAnalyzer::new();
        let assessment = analyzer.analyze("verify your bank account");
        let reason = assessment
            .reasons
            .iter()
            .find(|r| r.starts_with("Contains sensitive terms:"))
            .expect("term rule should fire");
        assert_eq!(reason, "Contains sensitive terms: account, bank, verify");
    }

    #[test]
    fn test_sensitive_term_cap() {
        let analyzer = MessageAnalyzer::new();
        // Seven distinct terms; the rule caps at 20 points.
        let assessment =
            analyzer.analyze("claim your free gift prize, winner! refund payment pending");
        let term_reason = assessment
            .reasons
            .iter()
            .find(|r| r.starts_with("Contains sensitive terms:"))
            .expect("term rule should fire");
        assert!(term_reason.contains("winner"));
        // Urgency never fired here, so the total is the capped term score.
        assert!(!assessment
            .reasons
            .contains(&"Uses urgent/pressure language".to_string()));
        assert_eq!(assessment.score, 20);
    }

    #[test]
    fn test_caps_run_rule() {
        let analyzer = MessageAnalyzer::new();
        let with_caps = analyzer.analyze("WARNING this is bad");
        assert!(with_caps
            .reasons
            .contains(&"Contains ALL-CAPS words".to_string()));

        // Five uppercase letters is below the threshold.
        let short_caps = analyzer.analyze("HELLO there");
        assert!(!short_caps
            .reasons
            .contains(&"Contains ALL-CAPS words".to_string()));
    }

    #[test]
    fn test_symbol_spam_rule() {
        let analyzer = MessageAnalyzer::new();
        let spammy = analyzer.analyze("win big $$$ !!! ***");
        assert!(spammy
            .reasons
            .contains(&"Contains many special characters/emojis".to_string()));

        let plain = analyzer.analyze("see you at 10, bring the docs");
        assert!(!plain
            .reasons
            .contains(&"Contains many special characters/emojis".to_string()));
    }

    #[test]
    fn test_shortener_rule() {
        let analyzer = MessageAnalyzer::new();
        let assessment = analyzer.analyze("track your parcel: bit.ly/3xYz");
        assert!(assessment
            .reasons
            .contains(&"Contains URL shortener".to_string()));
    }

    #[test]
    fn test_otp_rule_requires_both_parts() {
        let analyzer = MessageAnalyzer::new();
        let both = analyzer.analyze("Your OTP is 482913, do not share it");
        assert!(both
            .reasons
            .contains(&"Mentions OTP with code in the message".to_string()));

        let word_only = analyzer.analyze("never share an otp with anyone");
        assert!(!word_only
            .reasons
            .contains(&"Mentions OTP with code in the message".to_string()));

        let digits_only = analyzer.analyze("your code is 482913");
        assert!(!digits_only
            .reasons
            .contains(&"Mentions OTP with code in the message".to_string()));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let analyzer = MessageAnalyzer::new();
        let input = "URGENT: verify your account now";
        assert_eq!(analyzer.analyze(input), analyzer.analyze(input));
    }
}
