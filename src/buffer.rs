//! Fixed-capacity byte window for streaming record scans.
//!
//! `BoundedBuffer` is the refill/compaction half of the key tokenizer. It
//! keeps three cursors over its storage:
//!
//! - `start`: beginning of the current unconsumed record,
//! - `end`: scan cursor, the next byte the separator search inspects,
//! - `tail`: end of valid bytes after the latest refill.
//!
//! Invariant: `start <= end <= tail <= capacity`, always.
//!
//! The storage is one byte larger than the capacity; the extra slot at
//! `tail` holds a sentinel separator written by [`BoundedBuffer::seal`], so
//! the inner separator scan never needs a bounds check and never reads past
//! the valid region.

use std::io::{self, ErrorKind, Read};

/// Default scan buffer capacity shared by all benchmark runs.
pub const SCAN_BUFFER_SIZE: usize = 1 << 16;

/// A fixed-capacity byte window with explicit refill and compaction.
pub struct BoundedBuffer {
    /// `capacity + 1` bytes; the last slot is reserved for the sentinel.
    data: Box<[u8]>,
    start: usize,
    end: usize,
    tail: usize,
}

impl BoundedBuffer {
    /// Create an empty window holding up to `capacity` valid bytes.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "scan buffer capacity must be non-zero");
        Self {
            data: vec![0u8; capacity + 1].into_boxed_slice(),
            start: 0,
            end: 0,
            tail: 0,
        }
    }

    /// Maximum number of valid bytes the window can hold.
    pub fn capacity(&self) -> usize {
        self.data.len() - 1
    }

    /// Bytes of free space between `tail` and the capacity.
    pub fn available_to_fill(&self) -> usize {
        self.capacity() - self.tail
    }

    /// Bytes of unconsumed input between `start` and `tail`.
    pub fn available_to_consume(&self) -> usize {
        self.tail - self.start
    }

    /// Read from `reader` into `[tail, capacity)` until the window is full
    /// or the reader reports end of stream. Returns the number of new bytes.
    ///
    /// Short reads are retried; `ErrorKind::Interrupted` is transparent.
    pub fn fill<R: Read>(&mut self, reader: &mut R) -> io::Result<usize> {
        let capacity = self.capacity();
        let mut filled = 0;
        while self.tail < capacity {
            match reader.read(&mut self.data[self.tail..capacity]) {
                Ok(0) => break,
                Ok(n) => {
                    self.tail += n;
                    filled += n;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }

    /// Write the sentinel separator at `tail`, bounding the next scan.
    pub fn seal(&mut self, sep: u8) {
        self.data[self.tail] = sep;
    }

    /// Scan forward from `end` for `sep` and consume one record.
    ///
    /// Returns the `[start, separator)` range of the record and advances
    /// `start` and `end` past the separator. Returns `None` when the scan
    /// hits the sentinel instead, meaning no complete record remains in the
    /// window; the caller should compact and refill. Requires [`seal`] to
    /// have been called after the latest refill.
    ///
    /// [`seal`]: BoundedBuffer::seal
    pub fn take_record(&mut self, sep: u8) -> Option<(usize, usize)> {
        let mut pos = self.end;
        while self.data[pos] != sep {
            pos += 1;
        }
        if pos == self.tail {
            // Only the sentinel matched.
            self.end = self.tail;
            return None;
        }
        let record = (self.start, pos);
        self.start = pos + 1;
        self.end = pos + 1;
        Some(record)
    }

    /// Consume whatever remains between `start` and `tail` as a final,
    /// un-terminated record. Returns `None` when the window is drained.
    pub fn take_remainder(&mut self) -> Option<(usize, usize)> {
        if self.start == self.tail {
            return None;
        }
        let record = (self.start, self.tail);
        self.start = self.tail;
        self.end = self.tail;
        Some(record)
    }

    /// Move the unconsumed tail `[start, tail)` to the front of the window
    /// to make room for the next refill. Preserves byte order and the
    /// relative position of the scan cursor.
    pub fn compact(&mut self) {
        let len = self.tail - self.start;
        let end = self.end - self.start;
        self.data.copy_within(self.start..self.tail, 0);
        self.start = 0;
        self.end = end;
        self.tail = len;
    }

    /// Borrow a byte range previously returned by [`take_record`] or
    /// [`take_remainder`].
    ///
    /// [`take_record`]: BoundedBuffer::take_record
    /// [`take_remainder`]: BoundedBuffer::take_remainder
    pub fn slice(&self, start: usize, end: usize) -> &[u8] {
        &self.data[start..end]
    }
}
