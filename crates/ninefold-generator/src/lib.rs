//! Puzzle generation for the ninefold sudoku crates.
//!
//! Generation runs in two stages:
//!
//! 1. A complete valid board is built by running the solver's
//!    [trial search](ninefold_solver::trial_search) over a fully open grid
//!    with a uniform-random trial order, so every run yields a different
//!    board.
//! 2. Cells are cleared independently at a probability derived from the
//!    requested [`Difficulty`]: level × 10 per mille, so level 0 clears
//!    nothing and level 100 clears everything.
//!
//! No uniqueness guarantee is made: a generated puzzle may admit more than
//! one solution.
//!
//! # Examples
//!
//! ```
//! use ninefold_generator::{Difficulty, generate_with_seed};
//! use ninefold_solver::{Status, evaluate};
//!
//! let generated = generate_with_seed(42, Difficulty::new(40));
//! assert_eq!(evaluate(&generated.solution), Status::Solved);
//! assert_eq!(evaluate(&generated.puzzle), Status::Unsolved);
//! ```

use log::debug;
use ninefold_core::{Candidates, Cursor, Digit, Grid, Position};
use ninefold_solver::{TrialOrder, trial_search};
use rand::{Rng, RngExt as _, SeedableRng as _, seq::IteratorRandom as _};
use rand_pcg::Pcg64Mcg;

/// How much of the solved board is cleared away, from 0 to 100.
///
/// Values above 100 are clamped. The level maps linearly to a per-cell
/// clearing probability of `level × 10` per mille.
///
/// # Examples
///
/// ```
/// use ninefold_generator::Difficulty;
///
/// assert_eq!(Difficulty::new(40).level(), 40);
/// assert_eq!(Difficulty::new(250).level(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Difficulty(u8);

impl Difficulty {
    /// The minimum difficulty: nothing is cleared.
    pub const MIN: Self = Self(0);

    /// The maximum difficulty: every cell is cleared.
    pub const MAX: Self = Self(100);

    /// Creates a difficulty, clamping `level` to 100.
    #[must_use]
    pub const fn new(level: u8) -> Self {
        if level > 100 { Self(100) } else { Self(level) }
    }

    /// Returns the clamped level (0-100).
    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }

    /// The per-cell clearing probability in parts per thousand.
    fn per_mille(self) -> u16 {
        u16::from(self.0) * 10
    }
}

/// A generated puzzle together with the full board it was punched from.
///
/// The solution is one valid completion of the puzzle; when the puzzle has
/// several solutions it need not be the only one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The board with cleared cells: the givens of the puzzle.
    pub puzzle: Grid,
    /// The complete board the puzzle was derived from.
    pub solution: Grid,
}

/// Uniform-random trial order backed by an RNG.
///
/// Plugged into the solver's trial search to turn the deterministic
/// backtracking state machine into a full-board randomizer: at each cell
/// the next digit to try is drawn uniformly from the remaining pool.
#[derive(Debug)]
pub struct RandomOrder<'r, R: Rng + ?Sized> {
    rng: &'r mut R,
}

impl<'r, R: Rng + ?Sized> RandomOrder<'r, R> {
    /// Creates a trial order drawing from `rng`.
    pub fn new(rng: &'r mut R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + ?Sized> TrialOrder for RandomOrder<'_, R> {
    fn next_trial(&mut self, pool: Candidates) -> Option<Digit> {
        pool.iter().choose(self.rng)
    }
}

/// Generates a puzzle using a thread-local RNG.
///
/// See [`generate_with_rng`] for the algorithm and
/// [`generate_with_seed`] for reproducible output.
#[must_use]
pub fn generate(difficulty: Difficulty) -> GeneratedPuzzle {
    generate_with_rng(&mut rand::rng(), difficulty)
}

/// Generates a puzzle from a fixed seed.
///
/// Equal seeds and difficulties produce equal puzzles; benches and tests
/// rely on this.
#[must_use]
pub fn generate_with_seed(seed: u64, difficulty: Difficulty) -> GeneratedPuzzle {
    generate_with_rng(&mut Pcg64Mcg::seed_from_u64(seed), difficulty)
}

/// Generates a puzzle using the provided RNG.
///
/// Builds one complete valid board by randomized backtracking, then walks
/// the 81 cells in traversal order and clears each independently with
/// probability `difficulty × 10` per mille.
pub fn generate_with_rng<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> GeneratedPuzzle {
    let mut solution = Grid::new();
    let status = trial_search(&mut solution, &mut RandomOrder::new(rng));
    debug_assert!(status.is_solved(), "an open board always completes");

    let per_mille = difficulty.per_mille();
    let mut puzzle = solution.clone();
    let mut cleared = 0u32;
    let mut cursor = Cursor::new();
    loop {
        let roll: u16 = rng.random_range(1..=1000);
        if roll <= per_mille {
            puzzle.set(cursor.pos(), None);
            cleared += 1;
        }
        if !cursor.advance() {
            break;
        }
    }
    debug!(
        "generated board at difficulty {}, cleared {cleared} of 81 cells",
        difficulty.level()
    );

    GeneratedPuzzle { puzzle, solution }
}

/// Returns the number of fixed cells of a generated puzzle, counted in
/// traversal order.
#[must_use]
pub fn given_count(puzzle: &GeneratedPuzzle) -> usize {
    Position::ALL
        .iter()
        .filter(|&&pos| puzzle.puzzle.digit(pos).is_some())
        .count()
}
