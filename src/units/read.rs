use crate::pointer::Pointer;
use serde::{Deserialize, Serialize};

/// Owns the read pointer.
///
/// Unlike the write side, reset here is sampled on the clock edge, so an
/// asserted reset only clears the pointer at the next `clock`. This mirrors
/// the hardware this models and may be an unintended quirk of it;
/// `ResetTiming::Symmetric` opts into the asynchronous behaviour instead.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadPointerUnit {
    pointer: Pointer,
}

impl ReadPointerUnit {
    pub fn new(address_bits: u32) -> Self {
        ReadPointerUnit {
            pointer: Pointer::new(address_bits),
        }
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    pub fn enable(empty: bool, read_request: bool) -> bool {
        !empty && read_request
    }

    pub fn clock(self, read_enable: bool, reset: bool) -> Self {
        let pointer = if reset {
            self.pointer.cleared()
        } else if read_enable {
            self.pointer.advance()
        } else {
            self.pointer
        };
        ReadPointerUnit { pointer }
    }

    pub fn reset_async(&mut self) {
        self.pointer = self.pointer.cleared();
    }
}
