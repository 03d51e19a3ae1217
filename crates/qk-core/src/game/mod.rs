mod player;
mod roster;
mod session;

pub use player::*;
pub use roster::*;
pub use session::*;
