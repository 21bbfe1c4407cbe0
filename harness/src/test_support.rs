//! Test-only runtime that records output instead of writing it.

use std::string::String;
use std::vec::Vec;

use crate::runtime::{Runtime, Stream};

/// Captures every byte written, per stream.
#[derive(Debug, Default)]
pub struct Recorder {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl Recorder {
    pub fn stdout_str(&self) -> String {
        String::from_utf8(self.stdout.clone()).expect("transcript is ascii")
    }

    /// Transcript lines, without terminators.
    pub fn lines(&self) -> Vec<String> {
        self.stdout_str().lines().map(String::from).collect()
    }
}

impl Runtime for Recorder {
    fn write_bytes(&mut self, stream: Stream, bytes: &[u8]) {
        match stream {
            Stream::Stdout => self.stdout.extend_from_slice(bytes),
            Stream::Stderr => self.stderr.extend_from_slice(bytes),
        }
    }

    fn terminate(&mut self, code: i32) -> ! {
        panic!("terminate({code})");
    }
}
