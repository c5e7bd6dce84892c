pub use chip8::Chip8;
pub use constants::{CLOCK_SPEED, CYCLES_PER_TIMER_TICK};
pub use error::Error;
pub use state::Quirks;

mod chip8;
pub mod constants;
mod error;
mod instruction;
mod opcode;
mod operations;
pub mod state;
