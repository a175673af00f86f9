//! Fixed factor tables with a designated default row
//!
//! Every categorical survey answer is resolved through a [`LookupTable`]:
//! the raw answer is trimmed and lower-cased, matched against the table keys,
//! and replaced by the table's default row when nothing matches. Unknown,
//! mis-cased or padded answers therefore never fail, they degrade to the
//! default-category estimate.

use tracing::debug;

/// How a raw answer is normalised before matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyNormalization {
    /// Trim surrounding whitespace and lower-case
    TrimLowercase,
    /// Lower-case and drop all whitespace ("Extra Large" -> "extralarge")
    StripWhitespace,
}

impl KeyNormalization {
    /// Apply the normalisation to a raw answer
    pub fn apply(self, raw: &str) -> String {
        match self {
            KeyNormalization::TrimLowercase => raw.trim().to_lowercase(),
            KeyNormalization::StripWhitespace => raw
                .chars()
                .filter(|c| !c.is_whitespace())
                .flat_map(char::to_lowercase)
                .collect(),
        }
    }
}

/// Immutable key -> factor table, usable as a process-wide constant.
#[derive(Debug)]
pub struct LookupTable<V: 'static> {
    name: &'static str,
    rows: &'static [(&'static str, V)],
    default_key: &'static str,
    normalization: KeyNormalization,
}

impl<V: Copy + 'static> LookupTable<V> {
    /// Build a table. `default_key` must be one of the row keys, which the
    /// table tests check for every constant table in the crate.
    pub const fn new(
        name: &'static str,
        rows: &'static [(&'static str, V)],
        default_key: &'static str,
    ) -> Self {
        Self {
            name,
            rows,
            default_key,
            normalization: KeyNormalization::TrimLowercase,
        }
    }

    /// Switch the key normalisation rule
    pub const fn with_normalization(mut self, normalization: KeyNormalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Table name used in log output
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Key of the designated default row
    pub fn default_key(&self) -> &'static str {
        self.default_key
    }

    /// All rows in declaration order
    pub fn rows(&self) -> &'static [(&'static str, V)] {
        self.rows
    }

    /// Exact match on an already-normalised key
    pub fn get(&self, key: &str) -> Option<V> {
        self.rows
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| *value)
    }

    /// Value of the default row
    pub fn default_value(&self) -> V {
        match self.get(self.default_key) {
            Some(value) => value,
            None => panic!(
                "lookup table '{}' is missing its default row '{}'",
                self.name, self.default_key
            ),
        }
    }

    /// Resolve a raw survey answer, substituting the default row when the
    /// normalised answer is not in the table.
    pub fn resolve(&self, raw: &str) -> V {
        let key = self.normalization.apply(raw);
        match self.get(&key) {
            Some(value) => value,
            None => {
                debug!(
                    table = self.name,
                    raw,
                    default = self.default_key,
                    "Unrecognized key, using default"
                );
                self.default_value()
            }
        }
    }

    /// Resolve an optional answer; a missing answer takes the default row.
    pub fn resolve_opt(&self, raw: Option<&str>) -> V {
        raw.map_or_else(|| self.default_value(), |r| self.resolve(r))
    }

    /// Whether the raw answer matches a row without falling back
    pub fn recognizes(&self, raw: &str) -> bool {
        self.get(&self.normalization.apply(raw)).is_some()
    }
}

#[cfg(test)]
pub(crate) fn assert_default_present<V: Copy + 'static>(table: &LookupTable<V>) {
    assert!(
        table.rows().iter().any(|(k, _)| *k == table.default_key()),
        "table '{}' lacks default row '{}'",
        table.name(),
        table.default_key()
    );
    for (key, _) in table.rows() {
        assert_eq!(
            table.normalization.apply(key),
            *key,
            "table '{}' key '{}' is not in normalised form",
            table.name(),
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static COLOURS: LookupTable<u8> =
        LookupTable::new("colours", &[("red", 1), ("green", 2), ("deep blue", 3)], "green");

    static SIZES: LookupTable<u8> =
        LookupTable::new("sizes", &[("small", 1), ("extralarge", 4)], "small")
            .with_normalization(KeyNormalization::StripWhitespace);

    #[test]
    fn test_resolve_exact_and_normalized() {
        assert_eq!(COLOURS.resolve("red"), 1);
        assert_eq!(COLOURS.resolve("  RED "), 1);
        assert_eq!(COLOURS.resolve("Deep Blue"), 3);
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(COLOURS.resolve("mauve"), 2);
        assert_eq!(COLOURS.resolve(""), 2);
        assert_eq!(COLOURS.resolve_opt(None), 2);
        assert!(!COLOURS.recognizes("mauve"));
        assert!(COLOURS.recognizes(" Green"));
    }

    #[test]
    fn test_strip_whitespace_normalization() {
        assert_eq!(SIZES.resolve("Extra Large"), 4);
        assert_eq!(SIZES.resolve("extra\tlarge "), 4);
        assert_eq!(SIZES.resolve("huge"), 1);
    }

    #[test]
    fn test_tables_have_defaults() {
        assert_default_present(&COLOURS);
        assert_default_present(&SIZES);
    }
}
