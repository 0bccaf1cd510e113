//! Reference data store: stop words and lemma mappings
//!
//! Loaded once at startup and shared read-only across all requests. The crate
//! ships a compiled-in English stop-word list and lemma table so the service
//! can run without external corpus files; deployments may override either
//! with their own files.

use sentira_core::{Error, Result};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, warn};

static DEFAULT_STOP_WORDS: &str = include_str!("../data/stop_words_en.txt");
static DEFAULT_LEMMAS: &str = include_str!("../data/lemmas_en.txt");

/// Read-only stop-word set and lemma table
#[derive(Debug, Clone)]
pub struct ReferenceData {
    stop_words: HashSet<String>,
    lemmas: HashMap<String, String>,
}

impl ReferenceData {
    /// Build from explicit collections (mainly for tests and embedding)
    pub fn new(stop_words: HashSet<String>, lemmas: HashMap<String, String>) -> Self {
        Self { stop_words, lemmas }
    }

    /// The compiled-in English stop words and lemma table
    pub fn builtin() -> Self {
        Self {
            stop_words: parse_stop_words(DEFAULT_STOP_WORDS),
            lemmas: parse_lemmas(DEFAULT_LEMMAS),
        }
    }

    /// Load from optional file overrides, falling back to the built-in data.
    ///
    /// A missing or unreadable file is fatal; the service must not come up
    /// with partial reference data.
    pub fn from_sources(stop_words: Option<&Path>, lemma_dict: Option<&Path>) -> Result<Self> {
        let stop_words = match stop_words {
            Some(path) => parse_stop_words(&read_source(path, "stop-word list")?),
            None => parse_stop_words(DEFAULT_STOP_WORDS),
        };
        let lemmas = match lemma_dict {
            Some(path) => parse_lemmas(&read_source(path, "lemma dictionary")?),
            None => parse_lemmas(DEFAULT_LEMMAS),
        };

        debug!(
            stop_words = stop_words.len(),
            lemmas = lemmas.len(),
            "loaded reference data"
        );

        Ok(Self { stop_words, lemmas })
    }

    /// Check a lower-cased token against the stop-word set
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Map a token to its lemma; unknown tokens pass through unchanged
    pub fn lemma<'a>(&'a self, token: &'a str) -> &'a str {
        self.lemmas.get(token).map(String::as_str).unwrap_or(token)
    }

    /// Number of stop words
    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }

    /// Number of lemma mappings
    pub fn lemma_count(&self) -> usize {
        self.lemmas.len()
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

fn read_source(path: &Path, kind: &str) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        Error::reference_data(format!("failed to read {kind} {}: {e}", path.display()))
    })
}

fn parse_stop_words(source: &str) -> HashSet<String> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

fn parse_lemmas(source: &str) -> HashMap<String, String> {
    let mut lemmas = HashMap::new();
    for (line_no, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next()) {
            (Some(inflected), Some(lemma)) => {
                lemmas.insert(inflected.to_lowercase(), lemma.to_lowercase());
            }
            _ => {
                warn!(line = line_no + 1, "skipping malformed lemma entry");
            }
        }
    }
    lemmas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_data_is_usable() {
        let reference = ReferenceData::builtin();
        assert!(reference.is_stop_word("the"));
        assert!(reference.is_stop_word("is"));
        assert!(!reference.is_stop_word("race"));
        assert_eq!(reference.lemma("running"), "run");
        assert_eq!(reference.lemma("unmapped"), "unmapped");
    }

    #[test]
    fn parses_comments_and_blanks() {
        let stop = parse_stop_words("# header\n\nthe\n  is  \n");
        assert_eq!(stop.len(), 2);
        assert!(stop.contains("is"));

        let lemmas = parse_lemmas("# header\nrunning\trun\n\nbroken-line\nwalked walk\n");
        assert_eq!(lemmas.len(), 2);
        assert_eq!(lemmas.get("walked").map(String::as_str), Some("walk"));
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = ReferenceData::from_sources(Some(Path::new("/nonexistent/stops.txt")), None)
            .unwrap_err();
        assert!(matches!(err, Error::ReferenceData(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn file_overrides_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let stops = dir.path().join("stops.txt");
        std::fs::write(&stops, "foo\nbar\n").unwrap();

        let reference = ReferenceData::from_sources(Some(&stops), None).unwrap();
        assert!(reference.is_stop_word("foo"));
        assert!(!reference.is_stop_word("the"));
        // lemma table still the built-in one
        assert_eq!(reference.lemma("running"), "run");
    }
}
