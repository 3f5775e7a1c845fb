use serde::{Deserialize, Serialize};

/// Inputs sampled once per tick. Stimulus files use the short field names.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TickInputs {
    #[serde(rename = "write")]
    pub write_request: bool,
    #[serde(rename = "read")]
    pub read_request: bool,
    #[serde(rename = "data")]
    pub data_in: u8,
    #[serde(rename = "reset")]
    pub reset_asserted: bool,
}

impl TickInputs {
    pub fn idle() -> Self {
        TickInputs::default()
    }

    pub fn write(data_in: u8) -> Self {
        TickInputs {
            write_request: true,
            data_in,
            ..TickInputs::default()
        }
    }

    pub fn read() -> Self {
        TickInputs {
            read_request: true,
            ..TickInputs::default()
        }
    }

    pub fn write_and_read(data_in: u8) -> Self {
        TickInputs {
            write_request: true,
            read_request: true,
            data_in,
            reset_asserted: false,
        }
    }

    pub fn reset() -> Self {
        TickInputs {
            reset_asserted: true,
            ..TickInputs::default()
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusFlags {
    pub full: bool,
    pub empty: bool,
    pub threshold: bool,
    pub overflow: bool,
    pub underflow: bool,
}

/// Outputs driven after a tick commits.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickOutputs {
    /// Slot at the current read index, regardless of read enable.
    pub data_out: u8,
    #[serde(flatten)]
    pub flags: StatusFlags,
    pub occupancy: usize,
    pub write_accepted: bool,
    pub read_accepted: bool,
    /// Element consumed by this tick's read, if the read was enabled.
    pub read_data: Option<u8>,
}
