//! Reading billing logs into event streams.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::parser::LineParser;
use crate::stream::EventStream;

/// Buffer size for `BufReader` (64KB).
const BUFFER_SIZE: usize = 64 * 1024;

/// The only failures a log read surfaces. Line-level problems never do.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Unable to read file: {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReadError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Line counters for one read.
///
/// `lines == accepted + malformed + out_of_order` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadStats {
    pub lines: usize,
    pub accepted: usize,
    pub malformed: usize,
    pub out_of_order: usize,
}

/// The outcome of reading a log.
#[derive(Debug, Clone)]
pub struct ReadReport {
    pub stream: EventStream,
    pub stats: ReadStats,
}

/// Drives the line parser over a log source.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReader {
    parser: LineParser,
}

impl LogReader {
    pub const fn new(parser: LineParser) -> Self {
        Self { parser }
    }

    /// Reads the log file at `path`.
    pub fn read_path(&self, path: &Path) -> Result<ReadReport, ReadError> {
        let file = File::open(path).map_err(|e| ReadError::from_io(path, e))?;
        let reader = BufReader::with_capacity(BUFFER_SIZE, file);
        let report = self
            .read(reader)
            .map_err(|e| ReadError::from_io(path, e))?;

        tracing::debug!(
            path = %path.display(),
            lines = report.stats.lines,
            accepted = report.stats.accepted,
            malformed = report.stats.malformed,
            out_of_order = report.stats.out_of_order,
            "read billing log"
        );
        Ok(report)
    }

    /// Reads a log from any buffered source.
    ///
    /// Events are kept only when they are not earlier than the last kept
    /// event; nothing is reordered or buffered. Invalid UTF-8 is an I/O error.
    pub fn read<R: BufRead>(&self, source: R) -> io::Result<ReadReport> {
        let mut stream = EventStream::new();
        let mut stats = ReadStats::default();

        for (index, line) in source.lines().enumerate() {
            let line = line?;
            stats.lines += 1;

            let event = match self.parser.parse(&line) {
                Ok(event) => event,
                Err(rejection) => {
                    tracing::trace!(line = index + 1, %rejection, "skipping malformed line");
                    stats.malformed += 1;
                    continue;
                }
            };

            let timestamp = event.timestamp;
            if stream.push(event) {
                stats.accepted += 1;
            } else {
                tracing::trace!(
                    line = index + 1,
                    %timestamp,
                    "skipping line earlier than previous entry"
                );
                stats.out_of_order += 1;
            }
        }

        Ok(ReadReport { stream, stats })
    }
}
