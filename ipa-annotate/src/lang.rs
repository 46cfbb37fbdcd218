//! Per-language tokenization policy.
//!
//! Every language code maps to exactly one [`LanguageClass`] and a case-fold
//! flag. Codes missing from [`POLICIES`] get [`LanguagePolicy::DEFAULT`].
use serde::{Deserialize, Serialize};

/// How text in a language is split before dictionary lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageClass {
    /// Words are not separated by whitespace; text is matched character by
    /// character against the longest dictionary key.
    ScriptBoundary,
    /// Words are delimited by whitespace and punctuation and looked up whole.
    TokenBoundary,
}

/// Tokenization class and key normalization for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguagePolicy {
    pub class: LanguageClass,
    /// Lowercase dictionary keys and lookup words before matching.
    pub case_fold: bool,
}

impl LanguagePolicy {
    pub const DEFAULT: LanguagePolicy = LanguagePolicy {
        class: LanguageClass::TokenBoundary,
        case_fold: false,
    };

    const SCRIPT: LanguagePolicy = LanguagePolicy {
        class: LanguageClass::ScriptBoundary,
        case_fold: false,
    };

    const FOLDED: LanguagePolicy = LanguagePolicy {
        class: LanguageClass::TokenBoundary,
        case_fold: true,
    };

    /// Resolves the policy for a language code. Matching is exact.
    pub fn for_language(code: &str) -> LanguagePolicy {
        POLICIES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, policy)| *policy)
            .unwrap_or(LanguagePolicy::DEFAULT)
    }

    #[inline(always)]
    pub fn is_script_boundary(&self) -> bool {
        self.class == LanguageClass::ScriptBoundary
    }
}

impl Default for LanguagePolicy {
    fn default() -> Self {
        LanguagePolicy::DEFAULT
    }
}

/// Languages with a policy other than the default.
pub static POLICIES: &[(&str, LanguagePolicy)] = &[
    ("zh_hans", LanguagePolicy::SCRIPT),
    ("zh_hant", LanguagePolicy::SCRIPT),
    ("ja", LanguagePolicy::SCRIPT),
    ("yue", LanguagePolicy::SCRIPT),
    ("en_US", LanguagePolicy::FOLDED),
    ("en_UK", LanguagePolicy::FOLDED),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_boundary_languages() {
        for code in ["zh_hans", "zh_hant", "ja", "yue"] {
            let policy = LanguagePolicy::for_language(code);
            assert!(policy.is_script_boundary(), "{}", code);
            assert!(!policy.case_fold, "{}", code);
        }
    }

    #[test]
    fn folded_english() {
        for code in ["en_US", "en_UK"] {
            assert_eq!(
                LanguagePolicy::for_language(code),
                LanguagePolicy {
                    class: LanguageClass::TokenBoundary,
                    case_fold: true
                }
            );
        }
    }

    #[test]
    fn unlisted_codes_use_default() {
        assert_eq!(LanguagePolicy::for_language("de"), LanguagePolicy::DEFAULT);
        assert_eq!(LanguagePolicy::for_language("fr_FR"), LanguagePolicy::DEFAULT);
        // Exact match only.
        assert_eq!(LanguagePolicy::for_language("en_us"), LanguagePolicy::DEFAULT);
        assert_eq!(LanguagePolicy::for_language("JA"), LanguagePolicy::DEFAULT);
    }

    #[test]
    fn table_has_no_duplicate_codes() {
        let mut codes = POLICIES.iter().map(|(c, _)| *c).collect::<Vec<_>>();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), POLICIES.len());
    }
}
