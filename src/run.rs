use crate::config::CleanConfig;
use crate::error::FifoError;
use crate::fifo::Fifo;
use crate::stimulus::{Stimulus, TraceWriter};

use log::{info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub writes: u64,
    pub reads: u64,
    // rising edges of the latched flags
    pub overflows: u64,
    pub underflows: u64,
}

/// Ticks `fifo` once per stimulus line and writes one trace record per tick.
pub fn drive<R: BufRead, W: Write>(
    fifo: &mut Fifo,
    input: R,
    output: W,
) -> Result<RunSummary, FifoError> {
    let mut summary = RunSummary::default();
    let mut trace = TraceWriter::new(output);
    let mut last = fifo.flags();

    for inputs in Stimulus::new(input) {
        let outputs = fifo.tick(inputs?);
        trace.record(summary.ticks, &outputs)?;

        summary.ticks += 1;
        summary.writes += u64::from(outputs.write_accepted);
        summary.reads += u64::from(outputs.read_accepted);
        if outputs.flags.overflow && !last.overflow {
            summary.overflows += 1;
            warn!("overflow at tick {}", summary.ticks - 1);
        }
        if outputs.flags.underflow && !last.underflow {
            summary.underflows += 1;
            warn!("underflow at tick {}", summary.ticks - 1);
        }
        last = outputs.flags;
    }

    trace.finish()?;
    Ok(summary)
}

pub fn run(config: &CleanConfig) -> Result<RunSummary, FifoError> {
    let mut fifo = match config.state.as_ref() {
        Some(state) => Fifo::from_state_file(state)?,
        None => Fifo::new(&config.fifo),
    };

    let input: Box<dyn BufRead> = match config.stimulus.as_ref() {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let output: Box<dyn Write> = match config.trace.as_ref() {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    let summary = drive(&mut fifo, input, output)?;
    info!(
        "{} ticks, {} writes, {} reads, {} overflows, {} underflows",
        summary.ticks, summary.writes, summary.reads, summary.overflows, summary.underflows
    );

    if let Some(path) = config.save_state.as_ref() {
        fifo.to_state_file(path)?;
    }
    Ok(summary)
}
