use std::collections::BTreeMap;

use log::debug;

use crate::grid::{Grid, NodeId};
use crate::scoring;
use crate::trie::{Trie, TrieCursor};

/// Shortest path that counts as a word. Shorter terminal paths are walked
/// through but never recorded
pub const MIN_WORD_LENGTH: usize = 3;

/// Every discovered word and the number of distinct cell paths spelling it
pub type WordCounts = BTreeMap<String, usize>;

pub fn find_all_words(grid: &Grid, trie: &Trie) -> WordCounts {
    find_words_with_min_length(grid, trie, MIN_WORD_LENGTH)
}

/// Runs the board and the trie in lockstep from every start cell
pub fn find_words_with_min_length(grid: &Grid, trie: &Trie, min_length: usize) -> WordCounts {
    let mut words = WordCounts::new();
    let mut used = vec![false; grid.len()];
    let mut path = String::new();

    for start in grid.nodes() {
        walk(
            grid,
            start,
            trie.root(),
            &mut used,
            &mut path,
            min_length,
            &mut words,
        );
    }

    debug!(
        "found {} distinct words ({} paths) on a {}x{} board",
        words.len(),
        words.values().sum::<usize>(),
        grid.rows(),
        grid.cols()
    );
    words
}

fn walk(
    grid: &Grid,
    node: NodeId,
    prefix: TrieCursor,
    used: &mut [bool],
    path: &mut String,
    min_length: usize,
    words: &mut WordCounts,
) {
    let letter = match grid.letter(node) {
        Some(l) => l,
        None => return,
    };
    // Dead branch, nothing in the dictionary continues this way
    let prefix = match prefix.next(letter) {
        Some(p) => p,
        None => return,
    };

    used[node.index()] = true;
    path.push(letter);

    if prefix.is_terminal() && path.chars().count() >= min_length {
        *words.entry(path.clone()).or_insert(0) += 1;
    }

    for &n in grid.neighbors(node) {
        if !used[n.index()] {
            walk(grid, n, prefix, used, path, min_length, words);
        }
    }

    path.pop();
    used[node.index()] = false;
}

/// Sums the length points of every word times the number of paths producing it
pub fn score(words: &WordCounts) -> u32 {
    words
        .iter()
        .map(|(w, &count)| scoring::length_points(w.chars().count()) * count as u32)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::KING_MOVES;

    fn board(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows.len(), rows[0].len(), &KING_MOVES);
        grid.preset(rows.iter().map(|r| r.chars())).unwrap();
        grid
    }

    #[test]
    fn test_cat_cats_scoring() {
        let trie = Trie::from_words(["cat", "cats", "ca"]);
        let grid = board(&["cats", "xxxx", "xxxx", "xxxx"]);
        let words = find_all_words(&grid, &trie);

        let expected: WordCounts = [("cat".to_string(), 1), ("cats".to_string(), 1)]
            .into_iter()
            .collect();
        assert_eq!(words, expected);
        assert_eq!(score(&words), 2);
        // "ca" is a word but too short to be recorded
        assert!(!words.contains_key("ca"));
    }

    #[test]
    fn test_min_length_override() {
        let trie = Trie::from_words(["cat", "cats", "ca"]);
        let grid = board(&["cats", "xxxx", "xxxx", "xxxx"]);
        let words = find_words_with_min_length(&grid, &trie, 1);
        assert_eq!(words.get("ca"), Some(&1));
        // short words are worth nothing either way
        assert_eq!(score(&words), 2);
    }

    #[test]
    fn test_multiplicity_counts_paths() {
        // two separate e cells give two paths for "tea"
        let trie = Trie::from_words(["tea"]);
        let grid = board(&["tex", "eax", "xxx"]);
        let words = find_all_words(&grid, &trie);
        assert_eq!(words.get("tea"), Some(&2));
        assert_eq!(score(&words), 2);
    }

    #[test]
    fn test_no_cell_reuse() {
        // "aaaa" would need a cell twice on a board with three a's
        let trie = Trie::from_words(["aaa", "aaaa"]);
        let grid = board(&["aa", "ax"]);
        let words = find_all_words(&grid, &trie);
        assert!(!words.contains_key("aaaa"));
        // 3 cells in 3! orders, all mutually adjacent
        assert_eq!(words.get("aaa"), Some(&6));
    }

    #[test]
    fn test_unset_cells_are_dead() {
        let trie = Trie::from_words(["cat"]);
        let grid = Grid::new(4, 4, &KING_MOVES);
        assert!(find_all_words(&grid, &trie).is_empty());
    }

    #[test]
    fn test_deterministic_under_preset() {
        let trie = Trie::from_words(["rat", "tar", "art", "star", "tars", "rats", "arts"]);
        let grid = board(&["star", "tsar", "rats", "arts"]);
        let first = find_all_words(&grid, &trie);
        let second = find_all_words(&grid, &trie);
        assert!(!first.is_empty());
        assert_eq!(first, second);
        assert_eq!(score(&first), score(&second));
    }

    #[test]
    fn test_long_words_clamped() {
        let mut counts = WordCounts::new();
        counts.insert("abcdefghijkl".into(), 2);
        counts.insert("abcdefgh".into(), 1);
        assert_eq!(score(&counts), 33);
    }
}
