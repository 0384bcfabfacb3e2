use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Static lookup data shared by every rule engine: sensitive-term sets,
/// rare top-level suffixes, the homoglyph substitution map, urgency phrases
/// and the URL-shortener token pattern. Built once, never mutated.
pub struct RuleVocabulary {
    message_terms: HashSet<&'static str>,
    url_terms: HashSet<&'static str>,
    rare_suffixes: HashSet<&'static str>,
    lookalike_map: HashMap<char, char>,
    urgency_phrases: &'static [&'static str],
    shortener_pattern: Regex,
}

const MESSAGE_TERMS: &[&str] = &[
    "urgent",
    "immediately",
    "verify",
    "reset",
    "limited",
    "locked",
    "suspend",
    "suspended",
    "click",
    "now",
    "win",
    "winner",
    "gift",
    "free",
    "claim",
    "refund",
    "otp",
    "password",
    "account",
    "bank",
    "wallet",
    "crypto",
    "payment",
    "prize",
    "congratulations",
];

const URL_TERMS: &[&str] = &[
    "login",
    "verify",
    "update",
    "secure",
    "signin",
    "reset",
    "support",
    "account",
    "pay",
    "bank",
    "wallet",
    "crypto",
    "gift",
    "free",
    "win",
    "prize",
    "invoice",
    "password",
    "unlock",
    "limited",
    "urgent",
    "confirm",
    "security",
    "payment",
];

const RARE_SUFFIXES: &[&str] = &[
    "zip", "cam", "gq", "tk", "ml", "cf", "work", "quest", "xin", "men", "party", "click",
    "country", "science", "top", "biz",
];

// Characters commonly substituted for letters in spoofed hostnames.
// Hosts are lowercased during extraction, so only digits, symbols and
// uppercase I are useful keys; a lowercase 'l' key would flag nearly
// every legitimate host.
const LOOKALIKE_PAIRS: &[(char, char)] = &[
    ('0', 'o'),
    ('1', 'l'),
    ('3', 'e'),
    ('5', 's'),
    ('7', 't'),
    ('8', 'b'),
    ('@', 'a'),
    ('$', 's'),
    ('|', 'l'),
    ('I', 'l'),
];

const URGENCY_PHRASES: &[&str] = &["urgent", "immediately", "now", "asap", "minutes", "24 hours"];

impl RuleVocabulary {
    fn new() -> Self {
        Self {
            message_terms: MESSAGE_TERMS.iter().copied().collect(),
            url_terms: URL_TERMS.iter().copied().collect(),
            rare_suffixes: RARE_SUFFIXES.iter().copied().collect(),
            lookalike_map: LOOKALIKE_PAIRS.iter().copied().collect(),
            urgency_phrases: URGENCY_PHRASES,
            shortener_pattern: Regex::new(r"\b(bit\.ly|tinyurl\.com|t\.co|goo\.gl|ow\.ly)\b")
                .unwrap(),
        }
    }

    /// Shared process-wide instance.
    pub fn shared() -> &'static RuleVocabulary {
        static VOCABULARY: OnceLock<RuleVocabulary> = OnceLock::new();
        VOCABULARY.get_or_init(RuleVocabulary::new)
    }

    /// Distinct sensitive message terms found as substrings, alphabetically
    /// sorted so the reason string is reproducible.
    pub fn message_term_hits(&self, lower: &str) -> Vec<&'static str> {
        let mut hits: Vec<&'static str> = self
            .message_terms
            .iter()
            .copied()
            .filter(|term| lower.contains(term))
            .collect();
        hits.sort_unstable();
        hits
    }

    /// Distinct suspicious URL terms found as substrings, alphabetically sorted.
    pub fn url_term_hits(&self, lower: &str) -> Vec<&'static str> {
        let mut hits: Vec<&'static str> = self
            .url_terms
            .iter()
            .copied()
            .filter(|term| lower.contains(term))
            .collect();
        hits.sort_unstable();
        hits
    }

    pub fn is_rare_suffix(&self, suffix: &str) -> bool {
        self.rare_suffixes.contains(suffix)
    }

    /// Whether any character of `s` is a known letter substitute.
    pub fn has_lookalike(&self, s: &str) -> bool {
        s.chars().any(|ch| self.lookalike_map.contains_key(&ch))
    }

    pub fn urgency_phrases(&self) -> &'static [&'static str] {
        self.urgency_phrases
    }

    pub fn mentions_shortener(&self, lower: &str) -> bool {
        self.shortener_pattern.is_match(lower)
    }
}
