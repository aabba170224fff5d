pub mod board;
pub mod game;
pub mod generator;
pub mod rules;
pub mod weights;
