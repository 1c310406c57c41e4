use std::{cmp::{Ordering, Reverse}, collections::BinaryHeap};

use serde::{Serialize, Deserialize};

use crate::frequency::FrequencyMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedEntry {
    pub stem: String,
    pub frequency: usize,
}

impl RankedEntry {
    pub fn new(stem: impl Into<String>, frequency: usize) -> Self {
        Self { stem: stem.into(), frequency }
    }
}

/// Ranking order: higher frequency first, then ascending stem.
/// `Ordering::Less` means "ranks before".
impl Ord for RankedEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.frequency.cmp(&self.frequency)
            .then_with(|| self.stem.cmp(&other.stem))
    }
}

impl PartialOrd for RankedEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(&str, usize)> for RankedEntry {
    fn from((stem, frequency): (&str, usize)) -> Self {
        Self::new(stem, frequency)
    }
}

/// Selects the `k` best entries of `frequencies`, best first.
///
/// Keeps a bounded heap whose top is the worst entry kept so far, so the
/// selection is O(m log k) over m keys. Asking for more entries than there
/// are keys returns all of them.
pub fn most_common(frequencies: &FrequencyMap, k: usize) -> Vec<RankedEntry> {
    if k == 0 {
        return vec![];
    }

    let mut heap: BinaryHeap<RankedEntry> = BinaryHeap::with_capacity(k.min(frequencies.len()) + 1);
    for (stem, frequency) in frequencies.iter() {
        if heap.len() == k {
            let worst = heap.peek().map(|e| (Reverse(e.frequency), e.stem.as_str()));
            if worst.map_or(false, |worst| (Reverse(frequency), stem) >= worst) {
                continue;
            }
        }
        heap.push(RankedEntry::new(stem, frequency));
        if heap.len() > k {
            heap.pop();
        }
    }
    heap.into_sorted_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frequencies() -> FrequencyMap {
        vec![("c", 1), ("b", 2), ("a", 1), ("d", 3), ("e", 1), ("f", 5), ("g", 3)]
            .into_iter().collect()
    }

    fn ranked(entries: Vec<(&str, usize)>) -> Vec<RankedEntry> {
        entries.into_iter().map(RankedEntry::from).collect()
    }

    #[test]
    fn test_most_common() {
        let all = vec![("f", 5), ("d", 3), ("g", 3), ("b", 2), ("a", 1), ("c", 1), ("e", 1)];
        let freq = frequencies();

        assert!(most_common(&FrequencyMap::new(), 0).is_empty());
        assert!(most_common(&FrequencyMap::new(), 5).is_empty());
        for k in 0..=all.len() {
            assert_eq!(most_common(&freq, k), ranked(all[..k].to_vec()), "k = {}", k);
        }
        assert_eq!(most_common(&freq, 8), ranked(all.clone()));
        assert_eq!(most_common(&freq, 100), ranked(all));
    }

    #[test]
    fn test_k_exceeds_key_count() {
        let freq: FrequencyMap = vec![("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(most_common(&freq, 100), ranked(vec![("b", 2), ("a", 1)]));
    }

    #[test]
    fn test_matches_full_sort() {
        let words = "the quick brown fox jumps over the lazy dog while the dog sleeps and the fox runs \
                     over hills and over rivers quick quick";
        let freq = crate::frequency::count(words.split_whitespace());

        let mut sorted: Vec<RankedEntry> = freq.iter().map(RankedEntry::from).collect();
        sorted.sort();
        for k in 0..=sorted.len() + 1 {
            let expected: Vec<RankedEntry> = sorted.iter().take(k).cloned().collect();
            assert_eq!(most_common(&freq, k), expected, "k = {}", k);
        }
    }

    #[test]
    fn test_entry_order() {
        assert!(RankedEntry::new("z", 4) < RankedEntry::new("a", 3));
        assert!(RankedEntry::new("a", 3) < RankedEntry::new("b", 3));
        assert_eq!(RankedEntry::new("a", 3).cmp(&RankedEntry::new("a", 3)), Ordering::Equal);
    }
}
