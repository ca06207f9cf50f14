use clap::{Parser, Subcommand};
use linked_list::{LinkedList, ListError, Result};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::mem;

mod logger;

#[derive(Parser)]
#[command(version, about = "Exercises the linked-list container")]
struct Cli {
    /// Log level: trace, debug, info, warn or error
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Walk the container API end to end
    Basic,
    /// Drive random operations mirrored against a Vec oracle
    Workout {
        /// Number of random operations
        #[arg(long, default_value_t = 10_000)]
        ops: usize,
        /// RNG seed, fixed for reproducible runs
        #[arg(long, default_value_t = 2026)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(&cli.log_level);
    match cli.command {
        Command::Basic => run_basic(),
        Command::Workout { ops, seed } => {
            run_workout(ops, seed);
            Ok(())
        }
    }
}

fn run_basic() -> Result<()> {
    let mut numbers = LinkedList::new();
    numbers.push_back(1);
    numbers.push_back(3);
    numbers.insert(1, 2)?;
    numbers.push_front(0);
    info!("built {numbers:?}");

    let mut taken = mem::take(&mut numbers);
    debug!("source after move: {numbers:?} (len {})", numbers.len());
    taken.erase(2)?;
    taken.pop_back()?;
    info!("after erase(2) and pop_back: {taken:?}");
    debug!("find_index(1) -> {:?}", taken.find_index(&1));
    if let Err(err) = taken.get(9) {
        debug!("out-of-range probe: {err}");
    }

    let mut words: LinkedList<String> = LinkedList::new();
    for _ in 0..10 {
        words.push_back(String::from("n"));
    }
    let width = words.len();
    for word in words.iter_mut() {
        *word = "b".repeat(width);
    }
    info!("rewritten through the mutable cursor: {words:?}");
    for i in 0..words.len() {
        words[i] = "c".repeat(width);
    }
    info!("rewritten through indexing: {words:?}");
    info!("words.len() = {}", words.len());
    Ok(())
}

#[derive(Debug, Default)]
struct OpCounts {
    push_front: usize,
    push_back: usize,
    insert: usize,
    rejected_insert: usize,
    pop_front: usize,
    pop_back: usize,
    erase: usize,
    reads: usize,
    clears: usize,
}

fn run_workout(ops: usize, seed: u64) {
    info!("workout: {ops} operations, seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut list: LinkedList<i64> = LinkedList::new();
    let mut oracle: Vec<i64> = Vec::new();
    let mut counts = OpCounts::default();

    for _ in 0..ops {
        let value: i64 = rng.gen_range(-1000..1000);
        match rng.gen_range(0..10) {
            0 | 1 => {
                list.push_front(value);
                oracle.insert(0, value);
                counts.push_front += 1;
            }
            2 | 3 => {
                list.push_back(value);
                oracle.push(value);
                counts.push_back += 1;
            }
            4 => {
                let index = rng.gen_range(0..=oracle.len());
                list.insert(index, value).expect("insert within range");
                oracle.insert(index, value);
                counts.insert += 1;
            }
            5 => {
                let index = oracle.len() + 1;
                assert_eq!(
                    list.insert(index, value),
                    Err(ListError::OutOfRange {
                        index,
                        len: oracle.len()
                    })
                );
                counts.rejected_insert += 1;
            }
            6 => {
                if oracle.is_empty() {
                    assert_eq!(list.pop_front(), Err(ListError::Empty));
                } else {
                    assert_eq!(list.pop_front(), Ok(oracle.remove(0)));
                }
                counts.pop_front += 1;
            }
            7 => {
                if oracle.is_empty() {
                    assert_eq!(list.pop_back(), Err(ListError::Empty));
                } else {
                    assert_eq!(list.pop_back(), Ok(oracle.pop().unwrap()));
                }
                counts.pop_back += 1;
            }
            8 => {
                if oracle.is_empty() {
                    assert!(list.erase(0).is_err());
                } else {
                    let index = rng.gen_range(0..oracle.len());
                    assert_eq!(list.erase(index), Ok(oracle.remove(index)));
                }
                counts.erase += 1;
            }
            _ => {
                if let Ok(front) = list.front() {
                    assert_eq!(Some(front), oracle.first());
                }
                if let Ok(back) = list.back() {
                    assert_eq!(Some(back), oracle.last());
                }
                assert_eq!(
                    list.find_index(&value),
                    oracle.iter().position(|&v| v == value)
                );
                counts.reads += 1;
            }
        }

        assert_eq!(list.len(), oracle.len());
        // The back walks are O(n); cap growth so long runs stay quick.
        if oracle.len() > 4096 {
            list.clear();
            oracle.clear();
            counts.clears += 1;
        }
    }

    assert!(
        list.iter().eq(oracle.iter()),
        "contents diverged from the oracle"
    );
    info!("workout passed: final length {}", list.len());
    debug!("operation mix: {counts:?}");
}
