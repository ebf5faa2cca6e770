pub mod clock;
pub mod handler;

pub use clock::GravityClock;
pub use handler::{handle_input, InputAction};
