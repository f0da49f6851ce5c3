use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
#[macro_use]
extern crate text_io;

use wordgrid::bench;
use wordgrid::boggle::{BoardKind, BoggleBoard};
use wordgrid::config::{self, Config};
use wordgrid::dictionary;
use wordgrid::scrabble::{find_best_word, Bag, Rack, ScrabbleBoard, ScrabbleGame};
use wordgrid::Trie;

#[derive(Debug, Parser)]
#[command(version, about = "Find every word on a Boggle board or the best word in a Scrabble rack")]
struct Opts {
    /// JSON config file; flags given here override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Word list, one word per line
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Compiled trie cache, written on first use
    #[arg(long)]
    cache: Option<PathBuf>,

    /// Board kind: regular (4x4) or big (5x5)
    #[arg(short, long)]
    board: Option<BoardKind>,

    /// Time budget for bench and best-board, in seconds
    #[arg(short, long)]
    seconds: Option<u64>,

    /// Worker threads for best-board
    #[arg(short, long)]
    threads: Option<usize>,

    /// Seed for repeatable runs
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Shake (or preset) one board and list every word on it
    Solve {
        /// JSON letter matrix to use instead of rolling the dice
        #[arg(short, long)]
        preset: Option<PathBuf>,
    },
    /// Play shaken boards until the time budget runs out
    Bench,
    /// Look for the highest scoring board within the time budget
    BestBoard,
    /// Play the rack game until no word can be formed
    Scrabble {
        /// Read racks from standard input and print the best word for each
        #[arg(short, long)]
        interactive: bool,
    },
}

impl Opts {
    fn config(&self) -> Result<Config> {
        let mut cfg = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("failed to read config {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(d) = &self.dictionary {
            cfg.dictionary = d.clone();
        }
        if let Some(c) = &self.cache {
            cfg.cache = Some(c.clone());
        }
        if let Some(b) = self.board {
            cfg.board = b;
        }
        if let Some(s) = self.seconds {
            cfg.seconds = s;
        }
        if self.threads.is_some() {
            cfg.threads = self.threads;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        Ok(cfg)
    }
}

fn load_trie(cfg: &Config) -> Result<Trie> {
    let start = Instant::now();
    let trie = dictionary::load_trie(&cfg.dictionary, cfg.cache.as_deref())
        .with_context(|| format!("failed to load dictionary {}", cfg.dictionary.display()))?;
    println!(
        "Loaded {} words in {:.5} seconds.",
        trie.len(),
        start.elapsed().as_secs_f64()
    );
    Ok(trie)
}

fn make_rng(cfg: &Config) -> StdRng {
    match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn solve(cfg: &Config, trie: &Trie, preset: Option<&PathBuf>) -> Result<()> {
    let mut board = BoggleBoard::new(cfg.board);
    match preset {
        Some(path) => {
            let letters = config::read_preset(path)
                .with_context(|| format!("failed to read preset {}", path.display()))?;
            board.preset(letters).context("preset does not fit the board")?;
        }
        None => {
            board.shake(&mut make_rng(cfg))?;
        }
    }
    println!("{}", board.render());

    let start = Instant::now();
    let result = board.play(trie);
    println!(
        "Found {} words in {:.5} seconds.\n",
        result.total_words(),
        start.elapsed().as_secs_f64()
    );
    println!(
        "{}\n",
        result.words.keys().cloned().collect::<Vec<_>>().join(", ")
    );
    println!("Score: {}", result.score);
    println!(
        "Mean times the same word appears: {:.2}",
        result.mean_multiplicity()
    );
    Ok(())
}

fn bench(cfg: &Config, trie: &Trie) -> Result<()> {
    let mut rng = make_rng(cfg);
    let summary = bench::run_benchmark(
        cfg.board,
        trie,
        Duration::from_secs(cfg.seconds),
        &mut rng,
    )?;
    println!(
        "Played {} games in {:.5} seconds for a total score of {}",
        summary.games,
        summary.elapsed.as_secs_f64(),
        summary.total_score
    );
    println!(
        "Mean score {:.2} (std {:.2}), best {}",
        summary.mean_score, summary.std_score, summary.max_score
    );
    Ok(())
}

fn best_board(cfg: &Config, trie: &Trie) -> Result<()> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = cfg.threads {
        builder = builder.num_threads(n);
    }
    let pool = builder.build().context("failed to start worker threads")?;
    let seed = cfg.seed.unwrap_or_else(rand::random);
    let budget = Duration::from_secs(cfg.seconds);

    let best = pool.install(|| {
        bench::find_best_board(cfg.board, trie, budget, rayon::current_num_threads(), seed)
    })?;
    println!(
        "Best score was {} out of {} games.\n",
        best.score, best.games
    );
    println!("{}", best.layout);
    println!(
        "{}",
        best.words.keys().cloned().collect::<Vec<_>>().join(", ")
    );
    Ok(())
}

fn scrabble(cfg: &Config, trie: &Trie, interactive: bool) -> Result<()> {
    let board = ScrabbleBoard::empty();
    debug!(
        "scrabble board {}x{}, start at {:?}",
        board.grid().rows(),
        board.grid().cols(),
        board.start_position()
    );

    if interactive {
        loop {
            println!("Enter Tray:");
            let tray: String = match try_read!("{}\n") {
                Ok(t) => t,
                Err(_) => break,
            };
            if tray.trim().is_empty() {
                break;
            }
            match Rack::parse(&tray) {
                Ok(rack) => {
                    let best = find_best_word(&rack, trie, "");
                    if best.is_empty() {
                        println!("No word can be made from {}", rack);
                    } else {
                        println!("{} ({})", best.word, best.score);
                    }
                }
                Err(e) => println!("{}", e),
            }
        }
        return Ok(());
    }

    let mut rng = make_rng(cfg);
    let bag = Bag::shuffled(&mut rng);
    let start = Instant::now();
    let result = ScrabbleGame::new(trie, bag).play(&mut rng)?;
    println!(
        "Found {} words in {:.5} seconds.\n",
        result.words.len(),
        start.elapsed().as_secs_f64()
    );
    println!("{}\n", result.words.join(", "));
    println!("Score: {}", result.score);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = Opts::parse();
    debug!("Command line options: {:?}", opts);
    let cfg = opts.config()?;

    let trie = load_trie(&cfg)?;
    match &opts.command {
        Command::Solve { preset } => solve(&cfg, &trie, preset.as_ref()),
        Command::Bench => bench(&cfg, &trie),
        Command::BestBoard => best_board(&cfg, &trie),
        Command::Scrabble { interactive } => scrabble(&cfg, &trie, *interactive),
    }
}
