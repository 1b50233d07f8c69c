use super::{Taxonomy, SENTINEL_CODE};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Characters classifiers wrap bare labels in ("**Narrowing Down**", `"Narrowing Down"`).
const WRAPPING_CHARS: &[char] = &['"', '\'', '`', '*', '“', '”', '‘', '’'];

/// Separators between labels in a compound answer.
pub(crate) const LABEL_SEPARATORS: &[char] = &[',', ';', '\n'];

/// Bidirectional label/code table for one taxonomy.
///
/// `decode` is total: every input produces either a real code, a compound
/// code (multi-label taxonomies only) or [`SENTINEL_CODE`].
#[derive(Debug, Clone)]
pub struct TaxonomyCodec {
    exact: HashMap<String, String>,
    normalized: HashMap<String, String>,
    labels: BTreeMap<String, String>,
    co_occurring: HashSet<String>,
    max_labels: usize,
}

impl TaxonomyCodec {
    pub fn new(taxonomy: &Taxonomy) -> Self {
        let mut exact = HashMap::new();
        let mut normalized = HashMap::new();
        let mut labels = BTreeMap::new();

        for cat in &taxonomy.categories {
            labels.insert(cat.code.clone(), cat.label.clone());
            for name in std::iter::once(&cat.label).chain(cat.aliases.iter()) {
                exact.insert(name.clone(), cat.code.clone());
                normalized.insert(normalize_label(name), cat.code.clone());
            }
        }

        let co_occurring = taxonomy
            .categories
            .iter()
            .filter(|c| taxonomy.co_occurring.contains(&c.label))
            .map(|c| c.code.clone())
            .collect();

        Self {
            exact,
            normalized,
            labels,
            co_occurring,
            max_labels: taxonomy.max_labels,
        }
    }

    pub fn decode(&self, label_text: &str) -> String {
        if let Some(code) = self.decode_single(label_text) {
            return code.to_string();
        }
        if self.max_labels > 1 {
            if let Some(code) = self.decode_compound(label_text) {
                return code;
            }
        }
        SENTINEL_CODE.to_string()
    }

    /// Canonical label for a real code.
    pub fn encode(&self, code: &str) -> Option<&str> {
        self.labels.get(code).map(String::as_str)
    }

    /// Human-readable form of a single or compound code, e.g. `"6,8"` becomes
    /// `"Affirming Response, Confirming Response"`. `None` if any part is unknown.
    pub fn describe(&self, code: &str) -> Option<String> {
        let labels = code
            .split(',')
            .map(|part| self.encode(part.trim()))
            .collect::<Option<Vec<_>>>()?;
        Some(labels.join(", "))
    }

    pub fn is_sentinel(code: &str) -> bool {
        code == SENTINEL_CODE
    }

    fn decode_single(&self, text: &str) -> Option<&str> {
        if let Some(code) = self.exact.get(text) {
            return Some(code.as_str());
        }
        let trimmed = text.trim();
        if let Some(code) = self.exact.get(trimmed) {
            return Some(code.as_str());
        }
        let key = normalize_label(trimmed);
        if key.is_empty() {
            return None;
        }
        self.normalized.get(&key).map(String::as_str)
    }

    fn decode_compound(&self, text: &str) -> Option<String> {
        let parts: Vec<&str> = text
            .split(LABEL_SEPARATORS)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() < 2 || parts.len() > self.max_labels {
            return None;
        }

        let mut codes = Vec::with_capacity(parts.len());
        for part in parts {
            let code = self.decode_single(part)?;
            if !codes.contains(&code) {
                codes.push(code);
            }
        }

        // Only co-occurring labels may accompany another label.
        let exclusive = codes
            .iter()
            .filter(|c| !self.co_occurring.contains(**c))
            .count();
        if codes.len() > 1 && exclusive > 1 {
            return None;
        }
        Some(join_codes(codes))
    }
}

/// Lookup key for tolerant matching: unwrapped, trailing period dropped,
/// whitespace collapsed, lowercased.
pub fn normalize_label(text: &str) -> String {
    let mut s = text.trim();
    loop {
        let next = s
            .trim_matches(WRAPPING_CHARS)
            .trim()
            .trim_end_matches('.')
            .trim();
        if next.len() == s.len() {
            break;
        }
        s = next;
    }
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Orders codes numerically; anything non-numeric sorts after, lexicographically.
pub(crate) fn compare_codes(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Compound code form: distinct codes, numerically sorted, comma-joined.
pub(crate) fn join_codes<S: AsRef<str>>(codes: Vec<S>) -> String {
    let mut codes: Vec<&str> = codes.iter().map(|c| c.as_ref()).collect();
    codes.sort_by(|a, b| compare_codes(a, b));
    codes.dedup();
    codes.join(",")
}
