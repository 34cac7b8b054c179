//! Bounded read/write cursors over byte buffers

use tracing::trace;

use crate::error::{Result, WireError};

/// Output stream over a pre-sized buffer
///
/// The buffer is sized up front from `serialized_length`, so running past
/// its end means a serializer wrote more than it declared.
#[derive(Debug)]
pub struct OStream<'a> {
    data: &'a mut [u8],
    pos: usize,
}

impl<'a> OStream<'a> {
    pub fn new(data: &'a mut [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Reserve the next `len` bytes for writing
    pub fn advance(&mut self, len: usize) -> Result<&mut [u8]> {
        let start = self.pos;
        let end = checked_end(start, len, self.data.len())?;
        self.pos = end;
        trace!(start, len, "ostream advance");
        Ok(&mut self.data[start..end])
    }

    /// Copy `bytes` into the stream
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.advance(bytes.len())?.copy_from_slice(bytes);
        Ok(())
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

/// Input stream over a borrowed buffer
#[derive(Debug, Clone)]
pub struct IStream<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> IStream<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Consume the next `len` bytes
    pub fn advance(&mut self, len: usize) -> Result<&'a [u8]> {
        let start = self.pos;
        let end = checked_end(start, len, self.data.len())?;
        self.pos = end;
        trace!(start, len, "istream advance");
        Ok(&self.data[start..end])
    }

    /// Consume exactly `N` bytes into an array
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let slice = self.advance(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Ok(out)
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

fn checked_end(start: usize, len: usize, capacity: usize) -> Result<usize> {
    match start.checked_add(len) {
        Some(end) if end <= capacity => Ok(end),
        _ => Err(WireError::StreamOverrun {
            requested: len,
            remaining: capacity - start,
        }),
    }
}
