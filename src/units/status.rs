use crate::pointer::Pointer;
use crate::signals::StatusFlags;
use serde::{Deserialize, Serialize};

/// Sticky error indicator.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Latch {
    #[default]
    Clear,
    Set,
}

impl Latch {
    /// Priority: reset > set > clear > hold.
    pub fn next(self, reset: bool, set: bool, clear: bool) -> Latch {
        if reset {
            Latch::Clear
        } else if set {
            Latch::Set
        } else if clear {
            Latch::Clear
        } else {
            self
        }
    }

    pub fn is_set(self) -> bool {
        self == Latch::Set
    }
}

/// Everything the status registers sample on a clock edge. `full` and
/// `empty` are the flags from before this tick's pointer updates.
#[derive(Clone, Copy, Debug, Default)]
pub struct StatusInputs {
    pub reset: bool,
    pub full: bool,
    pub empty: bool,
    pub write_request: bool,
    pub read_request: bool,
    pub write_enable: bool,
    pub read_enable: bool,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusUnit {
    overflow: Latch,
    underflow: Latch,
    watermark: usize,
}

impl StatusUnit {
    pub fn new(watermark: usize) -> Self {
        StatusUnit {
            overflow: Latch::Clear,
            underflow: Latch::Clear,
            watermark,
        }
    }

    pub fn watermark(&self) -> usize {
        self.watermark
    }

    pub fn overflow(&self) -> Latch {
        self.overflow
    }

    pub fn underflow(&self) -> Latch {
        self.underflow
    }

    /// Combinational flags from the two pointers plus the latched errors.
    ///
    /// The wrap bits tell full from empty when the index bits coincide: equal
    /// wrap bits mean the pointers meet without a lap, differing wrap bits
    /// mean the writer is exactly one traversal ahead.
    pub fn flags(&self, write: &Pointer, read: &Pointer) -> StatusFlags {
        let wrap_diff = write.wrap_bit() != read.wrap_bit();
        let index_equal = write.index() == read.index();

        StatusFlags {
            full: wrap_diff && index_equal,
            empty: !wrap_diff && index_equal,
            threshold: write.distance_from(read) >= self.watermark,
            overflow: self.overflow.is_set(),
            underflow: self.underflow.is_set(),
        }
    }

    pub fn clock(self, inputs: StatusInputs) -> Self {
        let overflow_set = inputs.full && inputs.write_request && !inputs.read_enable;
        let underflow_set = inputs.empty && inputs.read_request && !inputs.write_enable;

        StatusUnit {
            overflow: self.overflow.next(inputs.reset, overflow_set, inputs.read_enable),
            underflow: self.underflow.next(inputs.reset, underflow_set, inputs.write_enable),
            watermark: self.watermark,
        }
    }

    pub fn reset_async(&mut self) {
        self.overflow = Latch::Clear;
        self.underflow = Latch::Clear;
    }
}
