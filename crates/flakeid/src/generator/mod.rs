mod engine;
mod mutex;
mod state;

pub use engine::*;
pub use mutex::*;
pub(crate) use state::*;
