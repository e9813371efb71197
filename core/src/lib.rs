#![no_std]

extern crate alloc;

pub use difficulty::*;
pub use error::*;
pub use feedback::*;
pub use generator::*;
pub use session::*;
pub use types::*;
pub use validate::*;

mod difficulty;
mod error;
mod feedback;
mod generator;
mod session;
mod types;
mod validate;
