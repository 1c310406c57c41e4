use std::collections::HashMap;

/// Word (or stem) to count, iterated in first-insertion order.
///
/// Counts are always positive: entries are only created by adding a
/// non-zero amount.
#[derive(Debug, Clone, Default)]
pub struct FrequencyMap {
    entries: Vec<(String, usize)>,
    positions: HashMap<String, usize>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the count of `key`, creating the entry on first sight.
    /// Adding zero is a no-op so no zero-count entry is ever materialized.
    pub fn add(&mut self, key: &str, amount: usize) {
        if amount == 0 {
            return;
        }
        match self.positions.get(key) {
            Some(&i) => self.entries[i].1 += amount,
            None => {
                self.positions.insert(key.to_owned(), self.entries.len());
                self.entries.push((key.to_owned(), amount));
            },
        }
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.positions.get(key).map(|&i| self.entries[i].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries.iter().map(|(key, count)| (key.as_str(), *count))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(key, _)| key.as_str())
    }
}

/// Counts of the same keys are equal regardless of insertion order.
impl PartialEq for FrequencyMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(key, count)| other.get(key) == Some(count))
    }
}

impl Eq for FrequencyMap {}

impl<S: AsRef<str>> FromIterator<(S, usize)> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, count) in iter {
            map.add(key.as_ref(), count);
        }
        map
    }
}

impl IntoIterator for FrequencyMap {
    type Item = (String, usize);
    type IntoIter = std::vec::IntoIter<(String, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Aggregates tokens into token -> number of occurrences, in one pass.
pub fn count<S: AsRef<str>>(tokens: impl IntoIterator<Item = S>) -> FrequencyMap {
    tokens.into_iter()
        .fold(FrequencyMap::new(), |mut accum, token| {
            accum.add(token.as_ref(), 1);
            accum
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count() {
        let words = vec!["a", "b", "a", "c", "ab", "aa", "a-b", "a'b", "ab", "ab", "a-b", "a'b"];
        let expected: FrequencyMap = vec![
            ("a", 2), ("b", 1), ("c", 1), ("ab", 3), ("aa", 1), ("a-b", 2), ("a'b", 2),
        ].into_iter().collect();

        let counts = count(&words);
        assert_eq!(counts, expected);
        assert_eq!(counts.total(), words.len());
    }

    #[test]
    fn test_count_empty() {
        let counts = count(Vec::<String>::new());
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_first_insertion_order_is_kept() {
        let counts = count(["b", "a", "b", "c", "a"]);
        let keys: Vec<&str> = counts.keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_zero_amount_is_never_stored() {
        let mut map = FrequencyMap::new();
        map.add("a", 0);
        assert!(!map.contains_key("a"));
        map.add("a", 2);
        map.add("a", 0);
        assert_eq!(map.get("a"), Some(2));
    }

    #[test]
    fn test_equality_ignores_order() {
        let left: FrequencyMap = vec![("x", 1), ("y", 2)].into_iter().collect();
        let right: FrequencyMap = vec![("y", 2), ("x", 1)].into_iter().collect();
        let other: FrequencyMap = vec![("y", 2), ("x", 3)].into_iter().collect();
        assert_eq!(left, right);
        assert_ne!(left, other);
    }
}
