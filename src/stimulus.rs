use crate::error::FifoError;
use crate::signals::{TickInputs, TickOutputs};

use serde::Serialize;
use std::io::{BufRead, Lines, Write};

/// Reads one `TickInputs` per JSON line. Blank lines are skipped.
pub struct Stimulus<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> Stimulus<R> {
    pub fn new(reader: R) -> Self {
        Stimulus {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for Stimulus<R> {
    type Item = Result<TickInputs, FifoError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = match self.lines.next()? {
                Ok(text) => text,
                Err(e) => return Some(Err(e.into())),
            };
            self.line += 1;

            if text.trim().is_empty() {
                continue;
            }
            let line = self.line;
            return Some(
                serde_json::from_str(&text).map_err(|source| FifoError::Stimulus { line, source }),
            );
        }
    }
}

#[derive(Serialize)]
struct TraceRecord<'a> {
    tick: u64,
    #[serde(flatten)]
    outputs: &'a TickOutputs,
}

pub struct TraceWriter<W> {
    out: W,
}

impl<W: Write> TraceWriter<W> {
    pub fn new(out: W) -> Self {
        TraceWriter { out }
    }

    pub fn record(&mut self, tick: u64, outputs: &TickOutputs) -> Result<(), FifoError> {
        serde_json::to_writer(&mut self.out, &TraceRecord { tick, outputs })?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<W, FifoError> {
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::{Stimulus, TraceWriter};
    use crate::error::FifoError;
    use crate::signals::{StatusFlags, TickInputs, TickOutputs};

    #[test]
    fn missing_fields_default_to_idle() {
        let input = "{\"write\":true,\"data\":7}\n\n{}\n{\"reset\":true}\n";
        let ticks: Vec<TickInputs> = Stimulus::new(input.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(ticks, vec![TickInputs::write(7), TickInputs::idle(), TickInputs::reset()]);
    }

    #[test]
    fn malformed_line_reports_its_number() {
        let input = "{}\n\n{\"write\":3}\n";
        let err = Stimulus::new(input.as_bytes())
            .collect::<Result<Vec<_>, _>>()
            .unwrap_err();
        assert!(matches!(err, FifoError::Stimulus { line: 3, .. }));
    }

    #[test]
    fn trace_is_one_flat_object_per_tick() {
        let outputs = TickOutputs {
            data_out: 4,
            flags: StatusFlags {
                empty: true,
                ..StatusFlags::default()
            },
            occupancy: 0,
            write_accepted: false,
            read_accepted: true,
            read_data: Some(4),
        };
        let mut writer = TraceWriter::new(Vec::new());
        writer.record(0, &outputs).unwrap();
        writer.record(1, &outputs).unwrap();
        let text = String::from_utf8(writer.finish().unwrap()).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let record: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(record["tick"], 1);
        assert_eq!(record["empty"], true);
        assert_eq!(record["read_data"], 4);
        assert_eq!(record["data_out"], 4);
    }
}
