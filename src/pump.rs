//! Line pump
//!
//! Streams newline-delimited text from an input source to an output sink,
//! rotating each line through the engine. The pump owns the line loop:
//! bounded reads, line-ending normalization (CRLF input becomes LF output),
//! and the advisory trace lines emitted in verbose mode.
//!
//! Streams the pump opens itself (named files) are closed on every exit
//! path when their handles drop. Caller-standard streams are never closed.

use crate::engine::{self, Shift};
use crate::error::{Result, RotateError};
use log::{debug, info};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Default per-line byte budget. A platform-size choice, not a feature;
/// raise it via [`PumpConfig`].
pub const DEFAULT_MAX_LINE: usize = 256;

/// How a named output path is opened. Named outputs append by default;
/// the rotation table truncates so reruns do not stack tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenMode {
    #[default]
    Append,
    Truncate,
}

/// Per-invocation pump configuration, constructed once by the caller and
/// passed by reference. There is no process-wide flag state.
#[derive(Debug, Clone)]
pub struct PumpConfig {
    /// Normalized rotation amount.
    pub shift: Shift,
    /// Emit advisory trace lines. Never affects transformed output.
    pub verbose: bool,
    /// Emit the full rotation table per line instead of a single rotation.
    pub table: bool,
    /// Open mode for a named output path.
    pub open_mode: OpenMode,
    /// Maximum content bytes kept per line; the rest of an over-long line
    /// is discarded up to its newline.
    pub max_line: usize,
}

impl PumpConfig {
    pub fn new(shift: Shift) -> Self {
        Self {
            shift,
            verbose: false,
            table: false,
            open_mode: OpenMode::default(),
            max_line: DEFAULT_MAX_LINE,
        }
    }
}

/// Run one pump invocation: resolve both streams, then stream every line
/// from input to output. `None` means the process's standard stream.
///
/// Fail-fast: an unopenable path aborts before any line is read; no
/// partial output is rolled back.
pub fn run(input: Option<&Path>, output: Option<&Path>, config: &PumpConfig) -> Result<()> {
    let (mut reader, source) = open_input(input)?;
    let (mut writer, sink) = open_output(output, config.open_mode)?;

    if config.verbose {
        info!(
            "pump start: source={} sink={} shift={} verbose={}",
            source,
            sink,
            config.shift.value(),
            config.verbose
        );
    }

    let lines = pump(&mut reader, &mut writer, config)?;

    if config.verbose {
        info!("pump done: {} line(s) from {} to {}", lines, source, sink);
    }
    Ok(())
}

/// The streaming loop itself, generic over already-open streams. Writes
/// exactly one output record per input line, in input order, and returns
/// the number of lines pumped. End-of-input terminates normally.
pub fn pump<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, config: &PumpConfig) -> Result<u64> {
    let mut line = Vec::with_capacity(config.max_line);
    let mut count: u64 = 0;

    while read_line_bounded(reader, &mut line, config.max_line)? {
        // Trailing \n never reaches the buffer; a \r from CRLF input does.
        if line.last() == Some(&b'\r') {
            line.pop();
        }

        if config.verbose {
            debug!("line {}: applying {}", count + 1, config.shift.mode());
        }

        if config.table {
            write_table(writer, &line)?;
        } else {
            writer.write_all(&engine::transform(&line, config.shift))?;
            writer.write_all(b"\n")?;
        }

        count += 1;
        if config.verbose {
            debug!("line {} written", count);
        }
    }

    writer.flush()?;
    Ok(count)
}

/// Read one line into `buf`, keeping at most `max` content bytes. The
/// newline is consumed but not stored; bytes past the limit are discarded
/// up to the newline so the next read starts on the next input line.
///
/// Returns `false` only at end-of-input with nothing read.
fn read_line_bounded<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>, max: usize) -> Result<bool> {
    buf.clear();
    let mut saw_any = false;

    loop {
        let available = reader.fill_buf()?;
        if available.is_empty() {
            // EOF; a final unterminated line still counts.
            return Ok(saw_any);
        }
        saw_any = true;

        if let Some(pos) = available.iter().position(|&b| b == b'\n') {
            let keep = pos.min(max.saturating_sub(buf.len()));
            buf.extend_from_slice(&available[..keep]);
            reader.consume(pos + 1);
            return Ok(true);
        }

        let len = available.len();
        let keep = len.min(max.saturating_sub(buf.len()));
        buf.extend_from_slice(&available[..keep]);
        reader.consume(len);
    }
}

/// Emit the full rotation table for one line: every ROT-N in 1..=25,
/// then the ROT47 form, then a blank separator.
fn write_table<W: Write>(writer: &mut W, line: &[u8]) -> Result<()> {
    for n in 1..=25 {
        write!(writer, "rot{:02}: ", n)?;
        writer.write_all(&engine::transform(line, Shift::normalize(n)))?;
        writer.write_all(b"\n")?;
    }
    writer.write_all(b"rot47: ")?;
    writer.write_all(&engine::transform(line, Shift::normalize(0)))?;
    writer.write_all(b"\n\n")?;
    Ok(())
}

fn open_input(path: Option<&Path>) -> Result<(Box<dyn BufRead>, String)> {
    match path {
        None => Ok((Box::new(io::stdin().lock()), "stdin".to_string())),
        Some(p) => {
            let file = File::open(p).map_err(|e| RotateError::resource(p, e))?;
            Ok((
                Box::new(BufReader::new(file)),
                p.display().to_string(),
            ))
        }
    }
}

fn open_output(path: Option<&Path>, mode: OpenMode) -> Result<(Box<dyn Write>, String)> {
    match path {
        None => Ok((Box::new(io::stdout().lock()), "stdout".to_string())),
        Some(p) => {
            let mut options = OpenOptions::new();
            options.create(true);
            match mode {
                OpenMode::Append => options.append(true),
                OpenMode::Truncate => options.write(true).truncate(true),
            };
            let file = options.open(p).map_err(|e| RotateError::resource(p, e))?;
            Ok((
                Box::new(BufWriter::new(file)),
                p.display().to_string(),
            ))
        }
    }
}
