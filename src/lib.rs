// Library surface shared by the drill and quiz binaries and their tests.
pub mod config;
pub mod console;
pub mod drill;
pub mod error;
pub mod logging;
pub mod quiz;
pub mod roster;
pub mod util;

pub use error::{Error, Result};
