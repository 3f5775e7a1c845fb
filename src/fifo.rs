use crate::config::{FifoConfig, ResetTiming};
use crate::error::FifoError;
use crate::memory::{Addressable, StorageArray};
use crate::signals::{StatusFlags, TickInputs, TickOutputs};
use crate::units::{Latch, ReadPointerUnit, StatusInputs, StatusUnit, WritePointerUnit};

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use std::fs;

/// Register state of the FIFO. Every tick reads one snapshot of this and
/// commits a new one; nothing observes a half-updated value.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FifoState {
    pub write: WritePointerUnit,
    pub read: ReadPointerUnit,
    pub status: StatusUnit,
}

impl FifoState {
    fn new(config: &FifoConfig) -> Self {
        FifoState {
            write: WritePointerUnit::new(config.address_bits()),
            read: ReadPointerUnit::new(config.address_bits()),
            status: StatusUnit::new(config.threshold()),
        }
    }

    pub fn flags(&self) -> StatusFlags {
        self.status.flags(&self.write.pointer(), &self.read.pointer())
    }

    pub fn occupancy(&self) -> usize {
        self.write.pointer().distance_from(&self.read.pointer())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Fifo {
    state: FifoState,
    storage: StorageArray,
    reset_timing: ResetTiming,
    // level of the out-of-band reset line
    reset_line: bool,
}

impl Fifo {
    pub fn new(config: &FifoConfig) -> Self {
        Fifo {
            state: FifoState::new(config),
            storage: StorageArray::new(config.capacity()),
            reset_timing: config.reset_timing(),
            reset_line: false,
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, FifoError> {
        let config = FifoConfig::new(capacity, None, ResetTiming::Asymmetric)?;
        Ok(Fifo::new(&config))
    }

    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    pub fn state(&self) -> &FifoState {
        &self.state
    }

    pub fn reset_timing(&self) -> ResetTiming {
        self.reset_timing
    }

    pub fn occupancy(&self) -> usize {
        self.state.occupancy()
    }

    pub fn flags(&self) -> StatusFlags {
        self.state.flags()
    }

    /// Combinational read port: the slot at the read index, gated by nothing.
    pub fn data_out(&self) -> u8 {
        self.storage.read(self.state.read.pointer().index())
    }

    /// Outputs as currently driven, without advancing the clock.
    pub fn outputs(&self) -> TickOutputs {
        TickOutputs {
            data_out: self.data_out(),
            flags: self.flags(),
            occupancy: self.occupancy(),
            write_accepted: false,
            read_accepted: false,
            read_data: None,
        }
    }

    /// Raise the reset line between ticks. Asynchronous registers clear
    /// right away; the synchronous read pointer waits for the next tick.
    pub fn assert_reset(&mut self) {
        if !self.reset_line {
            info!("reset asserted ({:?} timing)", self.reset_timing);
        }
        self.reset_line = true;
        self.apply_async_reset();
    }

    pub fn release_reset(&mut self) {
        if self.reset_line {
            info!("reset released");
        }
        self.reset_line = false;
    }

    pub fn reset_asserted(&self) -> bool {
        self.reset_line
    }

    fn apply_async_reset(&mut self) {
        self.state.write.reset_async();
        self.state.status.reset_async();
        if self.reset_timing == ResetTiming::Symmetric {
            self.state.read.reset_async();
        }
    }

    /// One clock edge.
    pub fn tick(&mut self, inputs: TickInputs) -> TickOutputs {
        let reset = inputs.reset_asserted || self.reset_line;
        if inputs.reset_asserted {
            self.apply_async_reset();
        }

        let prev = self.state;
        let flags = prev.flags();

        let write_enable = !reset && WritePointerUnit::enable(flags.full, inputs.write_request);
        let read_enable = !reset && ReadPointerUnit::enable(flags.empty, inputs.read_request);

        // data_out as presented just before the edge
        let read_data = read_enable.then(|| self.data_out());
        if write_enable {
            self.storage.write(prev.write.pointer().index(), inputs.data_in);
        }

        let next = FifoState {
            write: prev.write.clock(write_enable),
            read: prev.read.clock(read_enable, reset),
            status: prev.status.clock(StatusInputs {
                reset,
                full: flags.full,
                empty: flags.empty,
                write_request: inputs.write_request,
                read_request: inputs.read_request,
                write_enable,
                read_enable,
            }),
        };
        log_latch("overflow", prev.status.overflow(), next.status.overflow());
        log_latch("underflow", prev.status.underflow(), next.status.underflow());
        self.state = next;

        trace!(
            "wptr={:#x} rptr={:#x} occupancy={}",
            next.write.pointer().raw(),
            next.read.pointer().raw(),
            next.occupancy()
        );

        TickOutputs {
            write_accepted: write_enable,
            read_accepted: read_enable,
            read_data,
            ..self.outputs()
        }
    }

    pub fn from_state_file(path: &str) -> Result<Self, FifoError> {
        let saved_state = fs::read_to_string(path)?;
        let fifo: Fifo = serde_json::from_str(&saved_state)?;
        fifo.validate()?;
        info!("loaded state from {}", path);
        Ok(fifo)
    }

    pub fn to_state_file(&self, path: &str) -> Result<(), FifoError> {
        let serialized = serde_json::to_string(&self)?;
        fs::write(path, serialized)?;
        info!("saved state to {}", path);
        Ok(())
    }

    fn validate(&self) -> Result<(), FifoError> {
        let storage = self.storage.capacity();
        let write_bits = self.state.write.pointer().address_bits();
        let read_bits = self.state.read.pointer().address_bits();
        let watermark = self.state.status.watermark();

        let consistent = storage.is_power_of_two()
            && self.state.write.pointer().is_in_range()
            && self.state.read.pointer().is_in_range()
            && write_bits == read_bits
            && 1usize.checked_shl(write_bits) == Some(storage)
            && (1..=storage).contains(&watermark);
        if consistent {
            Ok(())
        } else {
            Err(FifoError::SnapshotMismatch { storage })
        }
    }
}

fn log_latch(name: &str, prev: Latch, next: Latch) {
    if prev != next {
        debug!("{} {:?} -> {:?}", name, prev, next);
    }
}
