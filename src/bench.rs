use std::time::{Duration, Instant};

use log::{debug, info};
use ndarray::Array1;
use ndarray_stats::QuantileExt;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::boggle::{BoardKind, BoggleBoard, WordCounts};
use crate::error::Result;
use crate::trie::Trie;

/// Wall clock budget. Rounds already running are never interrupted, the
/// drivers only stop starting new ones
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
    budget: Duration,
}

impl Timer {
    pub fn start(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.start.elapsed() < self.budget
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchSummary {
    pub games: usize,
    pub total_score: u64,
    pub mean_score: f64,
    pub std_score: f64,
    pub max_score: u32,
    pub elapsed: Duration,
}

impl BenchSummary {
    pub fn from_scores(scores: Vec<u32>, elapsed: Duration) -> Self {
        let games = scores.len();
        let total_score = scores.iter().map(|&s| s as u64).sum();
        let scores = Array1::from(scores);
        let max_score = scores.max().map_or(0, |&m| m);

        let as_float = scores.mapv(|s| s as f64);
        let (mean_score, std_score) = match as_float.mean() {
            Some(mean) => (mean, as_float.std(0.0)),
            None => (0.0, 0.0),
        };

        Self {
            games,
            total_score,
            mean_score,
            std_score,
            max_score,
            elapsed,
        }
    }

    pub fn games_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.games as f64 / secs
        } else {
            0.0
        }
    }
}

/// Shakes and plays the same board until the budget runs out
pub fn run_benchmark(
    kind: BoardKind,
    trie: &Trie,
    budget: Duration,
    rng: &mut StdRng,
) -> Result<BenchSummary> {
    let mut board = BoggleBoard::new(kind);
    let mut scores = Vec::new();
    let timer = Timer::start(budget);
    while timer.is_valid() {
        let score = board.shake(rng)?.play(trie).score;
        scores.push(score);
    }
    let summary = BenchSummary::from_scores(scores, timer.elapsed());
    info!(
        "played {} games in {:.3}s ({:.1} games/s)",
        summary.games,
        summary.elapsed.as_secs_f64(),
        summary.games_per_second()
    );
    Ok(summary)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BestBoard {
    pub score: u32,
    pub layout: String,
    pub words: WordCounts,
    /// Games played by every worker together
    pub games: usize,
}

impl BestBoard {
    fn merge(self, other: BestBoard) -> BestBoard {
        let games = self.games + other.games;
        let mut best = if other.score > self.score { other } else { self };
        best.games = games;
        best
    }
}

/// Searches random boards in parallel for the highest score. Every worker owns its
/// board and RNG, only the trie is shared
pub fn find_best_board(
    kind: BoardKind,
    trie: &Trie,
    budget: Duration,
    workers: usize,
    seed: u64,
) -> Result<BestBoard> {
    let timer = Timer::start(budget);
    let results = (0..workers.max(1))
        .into_par_iter()
        .map(|worker| -> Result<BestBoard> {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(worker as u64));
            let mut board = BoggleBoard::new(kind);
            let mut best = BestBoard::default();
            while timer.is_valid() {
                board.shake(&mut rng)?;
                let result = board.play(trie);
                best.games += 1;
                if result.score > best.score {
                    best.score = result.score;
                    best.layout = board.render();
                    best.words = result.words;
                }
            }
            debug!("worker {} finished {} games, best {}", worker, best.games, best.score);
            Ok(best)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(results
        .into_iter()
        .fold(BestBoard::default(), BestBoard::merge))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Trie {
        Trie::from_words([
            "tea", "eat", "ate", "rat", "tar", "art", "star", "rats", "tars", "arts", "stone",
            "notes", "onset", "tone", "note", "ten", "net", "nest", "sent", "tens", "rest",
        ])
    }

    #[test]
    fn test_summary_stats() {
        let summary = BenchSummary::from_scores(vec![2, 4, 4, 4, 5, 5, 7, 9], Duration::from_secs(2));
        assert_eq!(summary.games, 8);
        assert_eq!(summary.total_score, 40);
        assert_eq!(summary.max_score, 9);
        assert!((summary.mean_score - 5.0).abs() < 1e-9);
        assert!((summary.std_score - 2.0).abs() < 1e-9);
        assert!((summary.games_per_second() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_summary() {
        let summary = BenchSummary::from_scores(vec![], Duration::from_secs(0));
        assert_eq!(summary.games, 0);
        assert_eq!(summary.max_score, 0);
        assert_eq!(summary.mean_score, 0.0);
        assert_eq!(summary.games_per_second(), 0.0);
    }

    #[test]
    fn test_benchmark_runs_rounds() {
        let trie = vocab();
        let mut rng = StdRng::seed_from_u64(3);
        let summary =
            run_benchmark(BoardKind::Regular, &trie, Duration::from_millis(50), &mut rng).unwrap();
        assert!(summary.games > 0);
        assert!(summary.max_score as u64 <= summary.total_score);
    }

    #[test]
    fn test_best_board_is_consistent() {
        let trie = vocab();
        let best = find_best_board(BoardKind::Regular, &trie, Duration::from_millis(50), 3, 17)
            .unwrap();
        assert!(best.games >= 1);
        assert_eq!(crate::boggle::score(&best.words), best.score);
        if best.score > 0 {
            assert_eq!(best.layout.lines().count(), 4);
        }
    }
}
