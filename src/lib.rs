#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod fifo;
pub mod memory;
pub mod pointer;
pub mod run;
pub mod signals;
pub mod stimulus;
pub mod units;

pub use crate::config::{FifoConfig, ResetTiming};
pub use crate::error::FifoError;
pub use crate::fifo::{Fifo, FifoState};
pub use crate::signals::{StatusFlags, TickInputs, TickOutputs};
