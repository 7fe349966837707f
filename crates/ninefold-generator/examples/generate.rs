//! Example generating sudoku puzzles from the command line.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate
//! ```
//!
//! Pick a difficulty (0 = full board, 100 = empty board):
//!
//! ```sh
//! cargo run --example generate -- --difficulty 70
//! ```
//!
//! Reproducible output from a seed, several puzzles at once:
//!
//! ```sh
//! cargo run --example generate -- --seed 42 -n 3
//! ```

use clap::Parser;
use ninefold_generator::{Difficulty, generate, generate_with_seed, given_count};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty level (0-100); values above 100 are clamped.
    #[arg(short, long, value_name = "LEVEL", default_value_t = 50)]
    difficulty: u8,

    /// Seed for reproducible output.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Number of puzzles to generate.
    #[arg(short = 'n', long, value_name = "COUNT", default_value_t = 1)]
    count: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let difficulty = Difficulty::new(args.difficulty);

    for i in 0..args.count {
        let generated = match args.seed {
            Some(seed) => generate_with_seed(seed.wrapping_add(i), difficulty),
            None => generate(difficulty),
        };

        println!(
            "Puzzle (difficulty {}, {} givens):",
            difficulty.level(),
            given_count(&generated)
        );
        println!("{}", ninefold_io::to_text(&generated.puzzle));
        println!("Solution:");
        println!("{}", ninefold_io::to_text(&generated.solution));
    }
}
