//! Application core: state, input routing and the frame loop.

pub mod input;
pub mod runner;
pub mod state;

pub use input::{InputEvent, Key};
pub use runner::run;
pub use state::App;
