use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::boggle::BoardKind;
use crate::error::Result;

/// Settings shared by every driver. Anything left out of a config file takes its
/// default value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Word list, one word per line
    pub dictionary: PathBuf,
    /// Where the compiled trie is cached, if anywhere
    pub cache: Option<PathBuf>,
    pub board: BoardKind,
    /// Time budget of the benchmark drivers, in seconds
    pub seconds: u64,
    /// Worker threads for the parallel drivers. Defaults to rayon's choice
    pub threads: Option<usize>,
    /// Seed for repeatable runs
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from("dictionary.txt"),
            cache: None,
            board: BoardKind::Regular,
            seconds: 60,
            threads: None,
            seed: None,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }
}

/// Reads a preset letter matrix such as `[["c","a"],["t","s"]]` or `["ca","ts"]`.
/// Only the first letter of every cell is used
pub fn read_preset<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<char>>> {
    let file = File::open(path)?;
    let raw: Vec<PresetRow> = serde_json::from_reader(BufReader::new(file))?;
    Ok(raw.into_iter().map(PresetRow::into_letters).collect())
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PresetRow {
    Cells(Vec<String>),
    Line(String),
}

impl PresetRow {
    fn into_letters(self) -> Vec<char> {
        match self {
            Self::Cells(cells) => cells
                .iter()
                .filter_map(|c| c.chars().next())
                .map(|c| c.to_ascii_lowercase())
                .collect(),
            Self::Line(line) => line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| c.to_ascii_lowercase())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config() {
        let cfg = Config::from_json(r#"{"board": "big", "seconds": 5}"#).unwrap();
        assert_eq!(cfg.board, BoardKind::Big);
        assert_eq!(cfg.seconds, 5);
        assert_eq!(cfg.dictionary, PathBuf::from("dictionary.txt"));
        assert!(cfg.threads.is_none());
    }

    #[test]
    fn test_bad_config() {
        assert!(Config::from_json(r#"{"board": "huge"}"#).is_err());
    }

    #[test]
    fn test_preset_rows() {
        let path = std::env::temp_dir().join(format!("wordgrid-preset-{}.json", std::process::id()));
        std::fs::write(&path, r#"[["C","a"], "T S"]"#).unwrap();
        let letters = read_preset(&path).unwrap();
        assert_eq!(letters, vec![vec!['c', 'a'], vec!['t', 's']]);
        std::fs::remove_file(&path).unwrap();
    }
}
