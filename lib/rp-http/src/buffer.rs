/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io::{self, Read};

/// The receive buffer shared by all responses read from one connection.
///
/// `len` bytes are valid starting at `pos`. Bytes left over by one response
/// are moved to the front of the buffer with [`ReceiveBuffer::shift_remaining`]
/// and become the start of the next response.
pub struct ReceiveBuffer {
    buf: Vec<u8>,
    pos: usize,
    len: usize,
}

fn read_into<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    loop {
        match reader.read(buf) {
            Ok(nr) => return Ok(nr),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
}

impl ReceiveBuffer {
    pub fn with_capacity(cap: usize) -> Self {
        ReceiveBuffer {
            buf: vec![0u8; cap],
            pos: 0,
            len: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Grow the buffer to `size` bytes. It never shrinks.
    pub fn grow_to(&mut self, size: usize) -> bool {
        if size > self.buf.len() {
            self.buf.resize(size, 0);
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.buf[self.pos..self.pos + self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.buf.len()
    }

    pub fn consume(&mut self, n: usize) {
        debug_assert!(n <= self.len);
        self.pos += n;
        self.len -= n;
        if self.len == 0 {
            self.pos = 0;
        }
    }

    /// Drop all buffered bytes.
    pub fn clear(&mut self) {
        self.pos = 0;
        self.len = 0;
    }

    /// Read into the whole buffer, discarding what it held before.
    ///
    /// Returns 0 if the peer has closed the connection.
    pub fn fill_full<R: Read>(&mut self, reader: &mut R) -> io::Result<usize> {
        self.clear();
        let nr = read_into(reader, &mut self.buf)?;
        self.len = nr;
        Ok(nr)
    }

    /// Read at most `max` bytes after the buffered ones.
    ///
    /// The caller should make room first, 0 is returned both if the peer has
    /// closed the connection and if there is no space behind the valid bytes.
    pub fn fill_from_cursor<R: Read>(&mut self, reader: &mut R, max: usize) -> io::Result<usize> {
        let start = self.pos + self.len;
        let end = self.buf.len().min(start.saturating_add(max));
        if start >= end {
            return Ok(0);
        }
        let nr = read_into(reader, &mut self.buf[start..end])?;
        self.len += nr;
        Ok(nr)
    }

    /// Move `count` bytes from offset `src` to the front. The buffer then
    /// holds exactly these bytes.
    pub fn shift_remaining(&mut self, src: usize, count: usize) {
        if src != 0 && count > 0 {
            self.buf.copy_within(src..src + count, 0);
        }
        self.pos = 0;
        self.len = count;
    }

    /// Move the valid bytes to the front of the buffer.
    #[inline]
    pub fn compact(&mut self) {
        self.shift_remaining(self.pos, self.len);
    }

    /// Read more bytes after the buffered ones, compacting first if there is
    /// no space left behind them.
    ///
    /// Returns `None` if the buffer is full, `Some(0)` if the peer has closed.
    pub fn fill_more<R: Read>(&mut self, reader: &mut R) -> io::Result<Option<usize>> {
        if self.is_full() {
            return Ok(None);
        }
        if self.pos + self.len == self.buf.len() {
            self.compact();
        }
        let nr = self.fill_from_cursor(reader, usize::MAX)?;
        Ok(Some(nr))
    }
}
