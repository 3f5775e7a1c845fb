pub mod read;
pub mod status;
pub mod write;

pub use read::ReadPointerUnit;
pub use status::{Latch, StatusInputs, StatusUnit};
pub use write::WritePointerUnit;
