//! **tilepath-core** — core types for the tilepath grid search engine.
//!
//! This crate provides the foundational types shared across the *tilepath*
//! workspace: the [`Cell`] grid coordinate and the editable [`Board`] state
//! (walls plus the two path endpoints). The search algorithms themselves
//! live in `tilepath-paths`.

pub mod board;
pub mod geom;

pub use board::{Board, BoardError};
pub use geom::Cell;
