use crate::error::FifoError;
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CAPACITY: usize = 16;
const MIN_CAPACITY: usize = 1;
const MAX_CAPACITY: usize = 1 << 16;

/// How the two pointer units respond to reset.
#[derive(clap::ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResetTiming {
    /// Write side clears immediately, read side on the next tick.
    #[default]
    Asymmetric,
    /// Both sides clear immediately.
    Symmetric,
}

/// Validated parameters of a FIFO instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FifoConfig {
    capacity: usize,
    threshold: usize,
    reset_timing: ResetTiming,
}

impl FifoConfig {
    pub fn new(
        capacity: usize,
        threshold: Option<usize>,
        reset_timing: ResetTiming,
    ) -> Result<Self, FifoError> {
        if !capacity.is_power_of_two() || !(MIN_CAPACITY..=MAX_CAPACITY).contains(&capacity) {
            return Err(FifoError::InvalidCapacity(capacity));
        }

        let threshold = threshold.unwrap_or((capacity / 2).max(1));
        if !(1..=capacity).contains(&threshold) {
            return Err(FifoError::InvalidThreshold { threshold, capacity });
        }

        Ok(FifoConfig {
            capacity,
            threshold,
            reset_timing,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// log2 of the capacity; the pointers carry one bit more.
    pub fn address_bits(&self) -> u32 {
        self.capacity.trailing_zeros()
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn reset_timing(&self) -> ResetTiming {
        self.reset_timing
    }
}

impl Default for FifoConfig {
    fn default() -> Self {
        FifoConfig {
            capacity: DEFAULT_CAPACITY,
            threshold: DEFAULT_CAPACITY / 2,
            reset_timing: ResetTiming::Asymmetric,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Clock-driven synchronous FIFO simulator", long_about = None)]
pub struct RawConfig {
    /// Number of slots, a power of two
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Occupancy at which the threshold flag rises, defaults to half the capacity
    #[arg(short, long)]
    threshold: Option<usize>,

    /// Reset behaviour of the read pointer
    #[arg(long, value_enum, default_value_t = ResetTiming::Asymmetric)]
    reset_timing: ResetTiming,

    /// JSON-lines stimulus file, stdin when omitted
    #[arg(short, long)]
    stimulus: Option<String>,

    /// JSON-lines trace output, stdout when omitted
    #[arg(long)]
    trace: Option<String>,

    /// Save state file path to load on startup, optional
    #[arg(long)]
    state: Option<String>,

    /// Save state file path to write after the run, optional
    #[arg(long)]
    save_state: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone)]
pub struct CleanConfig {
    // FIFO geometry and reset behaviour
    pub fifo: FifoConfig,
    // path to stimulus file
    pub stimulus: Option<String>,
    // path to trace output
    pub trace: Option<String>,
    // path to save state to load on startup
    pub state: Option<String>,
    // path to save state to write on exit
    pub save_state: Option<String>,
    pub log_level: log::LevelFilter,
}

impl RawConfig {
    pub fn clean(self) -> Result<CleanConfig, FifoError> {
        let fifo = FifoConfig::new(self.capacity, self.threshold, self.reset_timing)?;

        let log_level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        Ok(CleanConfig {
            fifo,
            stimulus: self.stimulus,
            trace: self.trace,
            state: self.state,
            save_state: self.save_state,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{FifoConfig, RawConfig, ResetTiming};
    use crate::error::FifoError;
    use clap::Parser;

    #[test]
    fn defaults_match_sixteen_entry_buffer() {
        let config = RawConfig::parse_from(["syncfifo"]).clean().unwrap();
        assert_eq!(config.fifo, FifoConfig::default());
        assert_eq!(config.fifo.address_bits(), 4);
        assert_eq!(config.fifo.threshold(), 8);
        assert_eq!(config.log_level, log::LevelFilter::Warn);
    }

    #[test]
    fn parses_all_options() {
        let config = RawConfig::parse_from([
            "syncfifo",
            "--capacity",
            "64",
            "--threshold",
            "48",
            "--reset-timing",
            "symmetric",
            "--stimulus",
            "in.jsonl",
            "-vv",
        ])
        .clean()
        .unwrap();
        assert_eq!(config.fifo.capacity(), 64);
        assert_eq!(config.fifo.address_bits(), 6);
        assert_eq!(config.fifo.threshold(), 48);
        assert_eq!(config.fifo.reset_timing(), ResetTiming::Symmetric);
        assert_eq!(config.stimulus.as_deref(), Some("in.jsonl"));
        assert_eq!(config.log_level, log::LevelFilter::Debug);
    }

    #[test]
    fn rejects_non_power_of_two_capacity() {
        assert!(matches!(
            FifoConfig::new(12, None, ResetTiming::Asymmetric),
            Err(FifoError::InvalidCapacity(12))
        ));
        assert!(matches!(
            FifoConfig::new(0, None, ResetTiming::Asymmetric),
            Err(FifoError::InvalidCapacity(0))
        ));
    }

    #[test]
    fn single_slot_threshold_floors_at_one() {
        let config = FifoConfig::new(1, None, ResetTiming::Asymmetric).unwrap();
        assert_eq!(config.address_bits(), 0);
        assert_eq!(config.threshold(), 1);
    }

    #[test]
    fn rejects_threshold_out_of_range() {
        assert!(matches!(
            FifoConfig::new(16, Some(17), ResetTiming::Asymmetric),
            Err(FifoError::InvalidThreshold { threshold: 17, capacity: 16 })
        ));
        assert!(FifoConfig::new(16, Some(0), ResetTiming::Asymmetric).is_err());
        assert!(FifoConfig::new(16, Some(16), ResetTiming::Asymmetric).is_ok());
    }
}
