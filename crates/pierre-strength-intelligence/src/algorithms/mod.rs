// ABOUTME: Algorithm abstraction layer enabling pluggable strength calculation methods
// ABOUTME: Provides enum-based dispatch for one-rep-max estimation

//! Algorithm Selection Module
//!
//! Each algorithm family is an enum with a `Default` variant, a `name()` for
//! logging, and a `FromStr` implementation so it can be selected from
//! configuration.
//!
//! ```rust
//! use pierre_strength_intelligence::algorithms::OneRepMaxAlgorithm;
//!
//! let algorithm: OneRepMaxAlgorithm = "epley".parse().unwrap_or_default();
//! let e1rm = algorithm.estimate(225.0, 5);
//! assert!((e1rm - 262.5).abs() < 1e-9);
//! ```

pub mod one_rep_max;

pub use one_rep_max::OneRepMaxAlgorithm;
