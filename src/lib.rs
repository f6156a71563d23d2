#![warn(rust_2018_idioms, missing_debug_implementations)]
pub mod config;
mod domain;
mod io;
pub mod program;

pub use crate::domain::*;
pub use crate::io::*;
pub use crate::program::*;
