//! Statistical utilities for the Farkle simulator.
//!
//! This crate provides:
//!
//! - **Descriptive statistics**: min, max, mean, median, variance and standard
//!   deviation of a finished dataset (used to summarize sweep results)
//! - **Running statistics**: single-pass, mergeable mean and variance for
//!   streams too large to keep in memory (used for per-turn points)
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`running`]: Streaming statistics that can be combined across workers
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use farkle_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Merging running statistics
//!
//! ```
//! use farkle_stats::running::RunningStats;
//!
//! let mut a = RunningStats::new();
//! a.extend([1.0, 2.0]);
//! let mut b = RunningStats::new();
//! b.extend([3.0, 4.0, 5.0]);
//!
//! a.merge(&b);
//! assert_eq!(a.count(), 5);
//! assert!((a.mean() - 3.0).abs() < 1e-12);
//! ```

pub mod descriptive;
pub mod running;
