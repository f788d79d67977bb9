//! SonarSweep - depth increase counter
//!
//! Reads a time series of integer readings (one per line) and reports how
//! often the series increases, both reading-to-reading and across sliding
//! window sums.
//!
//! # Pipeline
//!
//! ```text
//! input.txt ──load──> Readings ──count_increases──────────────> metric 1
//!                        │
//!                        └──window_sums(3)──> Readings ──count──> metric 2
//! ```
//!
//! # Example
//!
//! ```
//! use sonarsweep::{ParseMode, Report, parse_readings};
//!
//! let readings = parse_readings("199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n", ParseMode::Lenient)?;
//! let report = Report::compute(&readings, sonarsweep::DEFAULT_WINDOW_WIDTH);
//! assert_eq!(report.increases, 7);
//! assert_eq!(report.windowed_increases, 5);
//! # Ok::<(), sonarsweep::LoadError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod metrics;
mod readings;

pub use error::LoadError;
pub use loader::{ParseMode, load_readings, parse_readings, read_readings};
pub use metrics::{Report, count_increases, window_sums};
pub use readings::Readings;

/// Input file used when neither the command line nor the config names one
pub const DEFAULT_INPUT_PATH: &str = "input.txt";

/// Number of consecutive readings summed into one window
pub const DEFAULT_WINDOW_WIDTH: usize = 3;
