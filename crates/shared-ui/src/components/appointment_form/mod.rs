mod component;
mod handler;
mod state;
mod submit;

pub use component::*;
pub use handler::*;
pub use state::*;
pub use submit::*;
