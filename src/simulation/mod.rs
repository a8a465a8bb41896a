pub mod automaton;
pub mod render;
pub mod runner;

pub use automaton::Automaton;
pub use render::Renderer;
pub use runner::Runner;
