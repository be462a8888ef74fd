use once_cell::sync::Lazy;
use regex::Regex;

/// Separators people type into Belgian company numbers ("0403.200.393",
/// "0403 200 393")
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.\s]").unwrap());

/// A Belgian company number (ondernemingsnummer) in normalized form.
///
/// Normalization strips dots and whitespace and keeps everything else
/// as-is. No length or checksum validation happens here; a malformed
/// number simply produces a lookup that finds nothing, and the fetch
/// result surfaces that.
#[derive(Debug, Clone, Eq)]
pub struct CompanyIdentifier {
    raw: String,
    clean: String,
}

impl CompanyIdentifier {
    /// Normalize a raw company number
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            clean: normalize(raw),
        }
    }

    /// The number exactly as the caller supplied it
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The normalized, separator-free number used for lookups
    pub fn clean(&self) -> &str {
        &self.clean
    }
}

// Equality and hashing use only the normalized form, so "0403.200.393"
// and "0403200393" are the same identifier.
impl PartialEq for CompanyIdentifier {
    fn eq(&self, other: &Self) -> bool {
        self.clean == other.clean
    }
}

impl std::hash::Hash for CompanyIdentifier {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.clean.hash(state);
    }
}

impl std::fmt::Display for CompanyIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.clean)
    }
}

/// Strip dot and whitespace separators from a company number
pub fn normalize(raw: &str) -> String {
    SEPARATORS.replace_all(raw, "").to_string()
}
