//! # Langton's Ant
//!
//! A single ant walks a toroidal grid of on/off cells. On an off cell it turns
//! counter-clockwise, on an on cell clockwise; it flips the cell and steps
//! forward, wrapping at the edges.
//!
//! The [`Automaton`] owns all simulation state. Renderers and run loops read it
//! through [`Automaton::snapshot`] and [`Automaton::agent_state`].

pub mod ant;
pub mod cli;
pub mod direction;
pub mod error;
pub mod grid;
pub mod simulation;

pub use ant::{AgentState, Ant, Position};
pub use cli::Args;
pub use direction::Direction;
pub use error::{AntError, Result};
pub use grid::Grid;
pub use simulation::{Automaton, Renderer, Runner};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        AgentState, AntError, Args, Automaton, Direction, Grid, Position, Renderer, Result,
        Runner,
    };
}
