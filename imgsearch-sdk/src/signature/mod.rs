// ABOUTME: Magic byte classifier identifying a file's true format from its leading bytes
// ABOUTME: Patterns support wildcard positions; the table is tried longest pattern first

mod builtin;

use crate::error::SearchError;
use crate::Result;
use once_cell::sync::Lazy;
use std::fmt;

pub use builtin::BUILTIN_SIGNATURES;

/// Token that marks an "any byte" position in pattern text
pub const WILDCARD_TOKEN: &str = "??";

/// Extensions the upload endpoint accepts as images
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "png", "gif", "bmp", "webp", "tif", "ico"];

static BUILTIN_TABLE: Lazy<SignatureTable> = Lazy::new(|| {
    SignatureTable::from_patterns(BUILTIN_SIGNATURES.iter().copied())
        .expect("built-in signature table is well-formed")
});

/// One position of a signature pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteMatcher {
    Exact(u8),
    Any,
}

impl ByteMatcher {
    pub fn matches(self, byte: u8) -> bool {
        match self {
            ByteMatcher::Exact(expected) => expected == byte,
            ByteMatcher::Any => true,
        }
    }

    fn parse(token: &str) -> Option<Self> {
        if token == WILDCARD_TOKEN {
            return Some(ByteMatcher::Any);
        }
        if token.len() != 2 || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u8::from_str_radix(token, 16).ok().map(ByteMatcher::Exact)
    }
}

impl fmt::Display for ByteMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteMatcher::Exact(byte) => write!(f, "{:02X}", byte),
            ByteMatcher::Any => f.write_str(WILDCARD_TOKEN),
        }
    }
}

/// A known file format and the byte pattern its files start with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureEntry {
    extension: String,
    pattern: Vec<ByteMatcher>,
}

impl SignatureEntry {
    pub fn new(extension: impl Into<String>, pattern: Vec<ByteMatcher>) -> Result<Self> {
        let extension = extension.into();
        if extension.trim().is_empty() {
            return Err(SearchError::InvalidSignature(
                "Signature extension must not be empty".to_string(),
            ));
        }
        if pattern.is_empty() {
            return Err(SearchError::InvalidSignature(format!(
                "Signature for '{}' has an empty pattern",
                extension
            )));
        }
        Ok(Self { extension, pattern })
    }

    /// Parse pattern text such as `"52 49 46 46 ?? ?? ?? ?? 57 45 42 50"`
    pub fn parse(extension: impl Into<String>, pattern: &str) -> Result<Self> {
        let extension = extension.into();
        let matchers = pattern
            .split_whitespace()
            .map(|token| {
                ByteMatcher::parse(token).ok_or_else(|| {
                    SearchError::InvalidSignature(format!(
                        "Invalid token '{}' in signature for '{}'",
                        token, extension
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(extension, matchers)
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn pattern(&self) -> &[ByteMatcher] {
        &self.pattern
    }

    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    /// True when `header` starts with this pattern. Missing bytes never match.
    pub fn matches(&self, header: &[u8]) -> bool {
        header.len() >= self.pattern.len()
            && self
                .pattern
                .iter()
                .zip(header)
                .all(|(matcher, byte)| matcher.matches(*byte))
    }
}

impl fmt::Display for SignatureEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, matcher) in self.pattern.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", matcher)?;
        }
        Ok(())
    }
}

/// Signature entries kept sorted by descending pattern length.
///
/// Classification returns the first matching entry, so a longer, more specific
/// pattern always wins over a shorter prefix of it. Entries of equal length keep
/// their declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureTable {
    entries: Vec<SignatureEntry>,
}

impl SignatureTable {
    pub fn new(entries: impl IntoIterator<Item = SignatureEntry>) -> Result<Self> {
        let mut table = Self::default();
        table.extend(entries)?;
        Ok(table)
    }

    /// Build a table from `(extension, pattern text)` pairs
    pub fn from_patterns<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(extension, pattern)| SignatureEntry::parse(extension, pattern))
            .collect::<Result<Vec<_>>>()?;

        Self::new(entries)
    }

    /// The process-wide table of known formats
    pub fn builtin() -> &'static SignatureTable {
        &BUILTIN_TABLE
    }

    /// Add entries, keeping the length-descending order.
    ///
    /// Re-adding an identical entry is a no-op. The same pattern under a different
    /// extension is rejected and leaves the table unchanged.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = SignatureEntry>) -> Result<()> {
        let mut staged: Vec<SignatureEntry> = Vec::new();

        for entry in entries {
            let registered_as = self
                .entries
                .iter()
                .chain(staged.iter())
                .find(|known| known.pattern == entry.pattern)
                .map(|known| known.extension.clone());

            match registered_as {
                Some(extension) if extension == entry.extension => continue,
                Some(extension) => {
                    return Err(SearchError::InvalidSignature(format!(
                        "Pattern {} is already registered as '{}', cannot add it as '{}'",
                        entry, extension, entry.extension
                    )));
                }
                None => staged.push(entry),
            }
        }

        self.entries.extend(staged);
        // Stable sort keeps declaration order within a length
        self.entries
            .sort_by(|a, b| b.pattern_len().cmp(&a.pattern_len()));
        Ok(())
    }

    /// Extension of the most specific entry matching the start of `header`
    pub fn classify(&self, header: &[u8]) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.matches(header))
            .map(SignatureEntry::extension)
    }

    /// How many leading bytes a caller needs to read for a full classification
    pub fn max_pattern_len(&self) -> usize {
        self.entries.first().map_or(0, SignatureEntry::pattern_len)
    }

    pub fn entries(&self) -> &[SignatureEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Classify `header` against the built-in table
pub fn classify(header: &[u8]) -> Option<&'static str> {
    BUILTIN_TABLE.classify(header)
}

pub fn is_image(extension: &str) -> bool {
    IMAGE_EXTENSIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(extension))
}
