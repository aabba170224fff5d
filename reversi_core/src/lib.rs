//! Core types, rules and move-selection engine for Reversi.

pub mod engine;
pub mod logic;
