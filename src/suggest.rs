//! AI-assisted icon suggestions with a local fallback chain.
//!
//! The upstream model call is an external collaborator hidden behind
//! [`SuggestionBackend`]; everything here is the recovery contract around
//! it: [`suggest_icons`] always produces exactly three names from the fixed
//! vocabulary, no matter how the upstream fails (transport error, malformed
//! payload, names outside the vocabulary, wrong count). Failures degrade to
//! a keyword heuristic and finally to a fixed default triple.

use serde::Deserialize;
use thiserror::Error;

/// The closed vocabulary of icon names the editor ships glyphs for.
pub const ICON_VOCABULARY: [&str; 70] = [
    "Activity",
    "AlertCircle",
    "Archive",
    "BarChart",
    "Bell",
    "Bookmark",
    "Calendar",
    "Camera",
    "Check",
    "ChevronRight",
    "Circle",
    "Clock",
    "Cloud",
    "Code",
    "Copy",
    "CreditCard",
    "Download",
    "Edit",
    "Eye",
    "File",
    "FileText",
    "Filter",
    "Flag",
    "Folder",
    "FolderOpen",
    "Gift",
    "Globe",
    "Heart",
    "Home",
    "Image",
    "Inbox",
    "Info",
    "Link",
    "List",
    "Lock",
    "Mail",
    "Map",
    "MessageCircle",
    "Moon",
    "Music",
    "Package",
    "Phone",
    "PieChart",
    "Play",
    "Plus",
    "Power",
    "Printer",
    "Radio",
    "RefreshCw",
    "Save",
    "Search",
    "Send",
    "Settings",
    "Share",
    "ShoppingBag",
    "ShoppingCart",
    "Smile",
    "Star",
    "Sun",
    "Tag",
    "Terminal",
    "ThumbsUp",
    "Trash",
    "Trophy",
    "Upload",
    "User",
    "Video",
    "Volume2",
    "Wallet",
    "Zap",
];

/// Suggestions used when neither the upstream nor the keyword heuristic
/// produce anything usable.
pub const DEFAULT_SUGGESTIONS: [&str; 3] = ["Search", "Star", "Heart"];

/// Keyword aliases mapping common prompt terms to icon triples.
const ALTERNATIVES: [(&str, [&str; 3]); 17] = [
    ("cycle", ["RefreshCw", "Activity", "Clock"]),
    ("rotate", ["RefreshCw", "Activity", "Clock"]),
    ("spin", ["RefreshCw", "Activity", "Clock"]),
    ("refresh", ["RefreshCw", "Activity", "Clock"]),
    ("shopping", ["ShoppingCart", "ShoppingBag", "Package"]),
    ("cart", ["ShoppingCart", "ShoppingBag", "Package"]),
    ("bag", ["ShoppingBag", "Package", "ShoppingCart"]),
    ("message", ["MessageCircle", "Mail", "Send"]),
    ("chat", ["MessageCircle", "Mail", "Send"]),
    ("email", ["Mail", "Send", "Inbox"]),
    ("time", ["Clock", "Calendar", "Activity"]),
    ("schedule", ["Calendar", "Clock", "Activity"]),
    ("secure", ["Lock", "AlertCircle", "Bell"]),
    ("security", ["Lock", "AlertCircle", "Bell"]),
    ("profile", ["User", "Star", "Heart"]),
    ("person", ["User", "Star", "Heart"]),
    ("avatar", ["User", "Star", "Heart"]),
];

/// Errors an upstream suggestion backend may report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestError {
    /// No backend is configured (e.g. no API key in the environment).
    #[error("no suggestion backend configured")]
    NotConfigured,
    /// The transport failed (network error, upstream error status, ...).
    #[error("suggestion request failed: {0}")]
    Transport(String),
}

/// The upstream suggestion transport. Implementations return the raw
/// response payload, expected to be `{"icons": ["A", "B", "C"]}`.
pub trait SuggestionBackend: Send + Sync {
    /// Requests suggestions for `prompt` from the upstream model.
    ///
    /// # Errors
    ///
    /// Any [`SuggestError`]; the caller recovers locally.
    fn fetch(&self, prompt: &str) -> Result<String, SuggestError>;
}

/// Placeholder backend used when no real transport is configured; always
/// fails, which routes every request through the local fallback chain.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBackend;

impl SuggestionBackend for NullBackend {
    fn fetch(&self, _prompt: &str) -> Result<String, SuggestError> {
        Err(SuggestError::NotConfigured)
    }
}

/// Shape of the upstream response payload.
#[derive(Debug, Deserialize)]
struct SuggestionResponse {
    icons: Vec<String>,
}

/// A resolved suggestion triple, with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestions {
    /// Exactly three names from [`ICON_VOCABULARY`].
    pub icons: [String; 3],
    /// True when the triple came from the local fallback chain rather than
    /// a validated upstream response.
    pub from_fallback: bool,
}

/// Returns exactly three vocabulary icon names for `prompt`.
///
/// Resolution order: validated upstream response, then the keyword
/// heuristic, then [`DEFAULT_SUGGESTIONS`]. This function is total; upstream
/// failures are logged and recovered, never surfaced.
pub fn suggest_icons(prompt: &str, backend: &dyn SuggestionBackend) -> [String; 3] {
    suggest_icons_detailed(prompt, backend).icons
}

/// Like [`suggest_icons`], but reports whether the fallback chain was used
/// so callers can show an advisory.
pub fn suggest_icons_detailed(prompt: &str, backend: &dyn SuggestionBackend) -> Suggestions {
    match backend.fetch(prompt) {
        Ok(raw) => match parse_response(&raw) {
            Some(icons) => Suggestions {
                icons,
                from_fallback: false,
            },
            None => {
                log::warn!("unusable suggestion response, falling back to keyword match");
                Suggestions {
                    icons: fallback_suggestions(prompt),
                    from_fallback: true,
                }
            }
        },
        Err(err) => {
            log::warn!("suggestion backend failed ({err}), falling back to keyword match");
            Suggestions {
                icons: fallback_suggestions(prompt),
                from_fallback: true,
            }
        }
    }
}

/// Parses and validates the upstream payload: it must decode, and it must
/// contain exactly three names from the vocabulary once invalid names are
/// dropped.
fn parse_response(raw: &str) -> Option<[String; 3]> {
    let response: SuggestionResponse = serde_json::from_str(raw).ok()?;
    let valid: Vec<String> = response
        .icons
        .into_iter()
        .filter(|name| in_vocabulary(name))
        .collect();
    match <[String; 3]>::try_from(valid) {
        Ok(icons) => Some(icons),
        Err(_) => None,
    }
}

/// Local keyword heuristic: alias table first, then direct substring
/// matches against the vocabulary, padded with the default triple.
pub fn fallback_suggestions(prompt: &str) -> [String; 3] {
    let query = prompt.to_lowercase();

    for (keyword, icons) in ALTERNATIVES {
        if query.contains(keyword) {
            return icons.map(String::from);
        }
    }

    let mut picks: Vec<&str> = ICON_VOCABULARY
        .iter()
        .copied()
        .filter(|icon| {
            let lower = icon.to_lowercase();
            (!query.is_empty() && lower.contains(&query)) || query.contains(&lower)
        })
        .take(3)
        .collect();

    // Always resolve to exactly three entries.
    for default in DEFAULT_SUGGESTIONS {
        if picks.len() == 3 {
            break;
        }
        if !picks.contains(&default) {
            picks.push(default);
        }
    }

    [
        picks[0].to_string(),
        picks[1].to_string(),
        picks[2].to_string(),
    ]
}

/// Whether `name` belongs to the fixed icon vocabulary.
pub fn in_vocabulary(name: &str) -> bool {
    ICON_VOCABULARY.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OkBackend(&'static str);
    impl SuggestionBackend for OkBackend {
        fn fetch(&self, _prompt: &str) -> Result<String, SuggestError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingBackend;
    impl SuggestionBackend for FailingBackend {
        fn fetch(&self, _prompt: &str) -> Result<String, SuggestError> {
            Err(SuggestError::Transport("connection reset".into()))
        }
    }

    fn assert_valid_triple(icons: &[String; 3]) {
        for name in icons {
            assert!(in_vocabulary(name), "{name} is not in the vocabulary");
        }
    }

    #[test]
    fn valid_upstream_response_is_used() {
        let backend = OkBackend(r#"{"icons": ["Cloud", "Sun", "Moon"]}"#);
        let result = suggest_icons_detailed("weather", &backend);
        assert_eq!(result.icons, ["Cloud", "Sun", "Moon"].map(String::from));
        assert!(!result.from_fallback);
    }

    #[test]
    fn transport_failure_falls_back() {
        let result = suggest_icons_detailed("secure login", &FailingBackend);
        assert_eq!(result.icons, ["Lock", "AlertCircle", "Bell"].map(String::from));
        assert!(result.from_fallback);
    }

    #[test]
    fn malformed_json_falls_back() {
        let backend = OkBackend("here are some icons: Cloud, Sun, Moon");
        let icons = suggest_icons("weather", &backend);
        assert_valid_triple(&icons);
    }

    #[test]
    fn names_outside_the_vocabulary_fall_back() {
        let backend = OkBackend(r#"{"icons": ["Cloud", "Sparkles", "Moon"]}"#);
        let icons = suggest_icons("night sky", &backend);
        assert_valid_triple(&icons);
        assert!(!icons.contains(&"Sparkles".to_string()));
    }

    #[test]
    fn wrong_count_falls_back() {
        for raw in [
            r#"{"icons": ["Cloud"]}"#,
            r#"{"icons": []}"#,
            r#"{"icons": ["Cloud", "Sun", "Moon", "Star"]}"#,
        ] {
            let icons = suggest_icons("weather", &OkBackend(raw));
            assert_valid_triple(&icons);
        }
    }

    #[test]
    fn extra_invalid_names_are_dropped_before_counting() {
        // Three valid names survive filtering, so the response is accepted.
        let backend = OkBackend(r#"{"icons": ["Cloud", "NotAnIcon", "Sun", "Moon"]}"#);
        let icons = suggest_icons("weather", &backend);
        assert_eq!(icons, ["Cloud", "Sun", "Moon"].map(String::from));
    }

    #[test]
    fn direct_matches_are_padded_to_three() {
        let icons = fallback_suggestions("trophy");
        assert_eq!(icons[0], "Trophy");
        assert_valid_triple(&icons);
        // No duplicates from padding.
        assert_ne!(icons[0], icons[1]);
        assert_ne!(icons[1], icons[2]);
    }

    #[test]
    fn unmatched_prompt_yields_the_default_triple() {
        let icons = fallback_suggestions("qwzzyx");
        assert_eq!(icons, DEFAULT_SUGGESTIONS.map(String::from));
    }

    #[test]
    fn vocabulary_substrings_inside_longer_words_match() {
        // "xylophone" contains "phone", so the heuristic picks it up.
        let icons = fallback_suggestions("xylophone quartet");
        assert_eq!(icons[0], "Phone");
        assert_valid_triple(&icons);
    }

    #[test]
    fn null_backend_always_recovers() {
        let icons = suggest_icons("", &NullBackend);
        assert_valid_triple(&icons);
    }
}
