use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::{debug, info, warn};

use crate::error::Result;
use crate::trie::Trie;
use crate::utils::serialization;

/// Reads a word list, one word per line. Words are trimmed and lowercased, and
/// anything that is not purely a-z is skipped
pub fn read_words<R: Read>(reader: R) -> Result<Vec<String>> {
    let reader = BufReader::new(reader);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_lowercase();
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
            continue;
        }
        words.push(word);
    }

    words.sort_unstable();
    words.dedup();
    Ok(words)
}

pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path.as_ref())?;
    let words = read_words(file)?;
    debug!("read {} words from {}", words.len(), path.as_ref().display());
    Ok(words)
}

fn load_cache(cache: &Path) -> Result<Trie> {
    let trie: Trie = serialization::load_from_disk(cache)?;
    trie.validate()?;
    Ok(trie)
}

/// Builds the trie for a word list. With a cache path the compiled trie is
/// loaded from there when present and written there otherwise. A cache that
/// cannot be read back is rebuilt from the word list
pub fn load_trie<P: AsRef<Path>>(path: P, cache: Option<&Path>) -> Result<Trie> {
    if let Some(cache) = cache {
        if cache.exists() {
            match load_cache(cache) {
                Ok(trie) => {
                    info!("loaded {} words from cache {}", trie.len(), cache.display());
                    return Ok(trie);
                }
                Err(e) => warn!("ignoring dictionary cache {}: {}", cache.display(), e),
            }
        }
    }

    let trie = Trie::from_words(load_words(path)?);
    info!("built dictionary of {} words ({} nodes)", trie.len(), trie.node_count());

    if let Some(cache) = cache {
        serialization::save_to_disk(&trie, cache)?;
        debug!("wrote dictionary cache {}", cache.display());
    }
    Ok(trie)
}
