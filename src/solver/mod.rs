//! Candidate filtering and guess selection
//!
//! The filter narrows the dictionary after each guess; strategies let the
//! automated solver pick what to guess next.

mod filter;
pub mod strategy;

pub use filter::{Constraint, filter_candidates, is_consistent};
pub use strategy::{FrequencyStrategy, RandomStrategy, Strategy, StrategyType};
