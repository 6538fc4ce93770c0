//! Game session management for picross.
//!
//! This crate wraps a [`Board`](picross_core::Board) together with a
//! [`HintSolver`](picross_solver::HintSolver) and exposes the operations a
//! frontend drives: querying and toggling cells, requesting hints, and
//! checking whether the puzzle is solved.
//!
//! # Overview
//!
//! - [`Game`]: the session state and its operations
//! - [`GameError`]: failures of session operations

pub use self::{error::*, game::*};

mod error;
mod game;
