use crate::pointer::Pointer;
use serde::{Deserialize, Serialize};

/// Owns the write pointer.
///
/// Reset on this side is asynchronous: `reset_async` clears the pointer the
/// moment reset is asserted instead of waiting for a clock edge.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WritePointerUnit {
    pointer: Pointer,
}

impl WritePointerUnit {
    pub fn new(address_bits: u32) -> Self {
        WritePointerUnit {
            pointer: Pointer::new(address_bits),
        }
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    pub fn enable(full: bool, write_request: bool) -> bool {
        !full && write_request
    }

    pub fn clock(self, write_enable: bool) -> Self {
        if write_enable {
            WritePointerUnit {
                pointer: self.pointer.advance(),
            }
        } else {
            self
        }
    }

    pub fn reset_async(&mut self) {
        self.pointer = self.pointer.cleared();
    }
}
