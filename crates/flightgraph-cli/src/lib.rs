//! Flightgraph CLI library.
//!
//! This crate provides command-line interface utilities for the flightgraph
//! route finder, including terminal styling and output formatting.

pub mod output;
pub mod terminal;
