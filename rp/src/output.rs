/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::PathBuf;

/// Where the body of one response is written to.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum OutputDest {
    #[default]
    Stdout,
    File(PathBuf),
}

impl OutputDest {
    /// Open the sink, a file is created or truncated.
    pub fn open(&self) -> io::Result<OutputSink> {
        match self {
            OutputDest::Stdout => Ok(OutputSink::Stdout(io::stdout())),
            OutputDest::File(path) => {
                let file = File::create(path)?;
                Ok(OutputSink::File(BufWriter::new(file)))
            }
        }
    }
}

impl fmt::Display for OutputDest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputDest::Stdout => f.write_str("stdout"),
            OutputDest::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub enum OutputSink {
    Stdout(Stdout),
    File(BufWriter<File>),
}

impl OutputSink {
    /// Flush all written data. A file is closed when the sink is dropped.
    pub fn finish(mut self) -> io::Result<()> {
        match &mut self {
            OutputSink::Stdout(s) => s.flush(),
            OutputSink::File(f) => {
                f.flush()?;
                f.get_ref().sync_data()
            }
        }
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputSink::Stdout(s) => s.write(buf),
            OutputSink::File(f) => f.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            OutputSink::Stdout(s) => s.write_all(buf),
            OutputSink::File(f) => f.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputSink::Stdout(s) => s.flush(),
            OutputSink::File(f) => f.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(&path, b"some old and longer content").unwrap();

        let dest = OutputDest::File(path.clone());
        let mut sink = dest.open().unwrap();
        sink.write_all(b"new").unwrap();
        sink.finish().unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn open_failed() {
        let dir = tempfile::tempdir().unwrap();
        let dest = OutputDest::File(dir.path().join("no-such-dir").join("page.html"));
        assert!(dest.open().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(OutputDest::Stdout.to_string(), "stdout");
        assert_eq!(
            OutputDest::File(PathBuf::from("/tmp/index.html")).to_string(),
            "/tmp/index.html"
        );
    }
}
