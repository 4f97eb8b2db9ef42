//! Ordered substitution-table remapping with a single-substitution guard.

use std::collections::HashSet;

use crate::ChastotaError;

/// What to do with characters matching a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Replace the matching character.
    Replace(char),
    /// Leave matching characters untouched; the entry is skipped entirely.
    Keep,
}

/// Ordered substitution table.
///
/// Entry order is semantic: entries are applied one after another, and a
/// character rewritten by one entry is immune to all later entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharMap {
    entries: Vec<(char, Rule)>,
}

impl CharMap {
    /// Build a map from ordered (key, rule) pairs.
    ///
    /// Duplicate keys are rejected: with one rule per key, the outcome of a
    /// pass never depends on which duplicate happened to win.
    pub fn new(entries: Vec<(char, Rule)>) -> Result<Self, ChastotaError> {
        let mut seen = HashSet::new();
        for (key, _) in &entries {
            if !seen.insert(*key) {
                return Err(ChastotaError::KeyMap(format!("duplicate key '{key}'")));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[(char, Rule)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Apply `map` to `text`, one entry at a time.
///
/// A position is rewritten when its current character equals the entry key
/// and no earlier entry has already rewritten it. Once rewritten, a
/// position is final: even if its new character equals a later key it will
/// not change again. Mapping `А`→`Б` and then `Б`→`В` therefore turns an
/// original `А` into `Б`, never `В`; only untouched `Б`s become `В`.
///
/// Positions are character positions, so multi-byte Cyrillic input is
/// handled the same as ASCII. Characters matching no key carry through
/// unchanged, as do matches of a [`Rule::Keep`] entry.
pub fn remap(text: &str, map: &CharMap) -> String {
    let mut current: Vec<char> = text.chars().collect();
    let mut switched: HashSet<usize> = HashSet::new();

    for (key, rule) in map.entries() {
        let value = match rule {
            Rule::Replace(v) => *v,
            Rule::Keep => continue,
        };

        let next: Vec<char> = current
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if c == *key && !switched.contains(&i) {
                    value
                } else {
                    c
                }
            })
            .collect();

        // Positions that changed in this pass are final from now on.
        for (i, (old, new)) in current.iter().zip(next.iter()).enumerate() {
            if old != new {
                switched.insert(i);
            }
        }

        current = next;
    }

    current.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(char, Rule)]) -> CharMap {
        CharMap::new(entries.to_vec()).unwrap()
    }

    #[test]
    fn replaced_characters_are_immune_to_later_entries() {
        let m = map(&[('А', Rule::Replace('Б')), ('Б', Rule::Replace('В'))]);
        assert_eq!(remap("А", &m), "Б");
        assert_eq!(remap("АБ", &m), "БВ");
    }

    #[test]
    fn keep_entries_are_skipped_entirely() {
        let m = map(&[('А', Rule::Keep)]);
        assert_eq!(remap("А", &m), "А");
    }

    #[test]
    fn unmapped_characters_pass_through() {
        let m = map(&[('А', Rule::Replace('Б'))]);
        assert_eq!(remap("XYZ", &m), "XYZ");
        assert_eq!(remap("", &m), "");
    }

    #[test]
    fn kept_characters_can_still_match_a_later_key() {
        // Keep does not finalize positions, so a later rule still applies.
        let m = map(&[('А', Rule::Keep), ('Б', Rule::Replace('А'))]);
        assert_eq!(remap("АБ", &m), "АА");
    }

    #[test]
    fn swap_map_exchanges_both_letters() {
        let m = map(&[('А', Rule::Replace('Б')), ('Б', Rule::Replace('А'))]);
        assert_eq!(remap("АББА", &m), "БААБ");
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let err = CharMap::new(vec![('А', Rule::Replace('Б')), ('А', Rule::Keep)]);
        assert!(matches!(err, Err(ChastotaError::KeyMap(_))));
    }

    #[test]
    fn empty_map_is_identity() {
        let m = map(&[]);
        assert_eq!(remap("АБВ", &m), "АБВ");
    }
}
