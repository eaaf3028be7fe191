//! Record tokenizers for key and query files.
//!
//! A key file is a flat byte stream of records separated by a single byte:
//! ASCII newline in text mode, NUL in binary mode. [`KeyTokenizer`] streams
//! an arbitrarily large file through a [`BoundedBuffer`] without ever
//! holding more than one buffer's worth of it, correctly handling records
//! that straddle refill boundaries. [`SliceRecords`] applies the same
//! separator convention to a byte slice already in memory, which is how the
//! query phase tokenizes its file.
//!
//! Both tokenizers yield records byte-identical to the input, in input
//! order, including empty records between consecutive separators and a
//! final record that lacks a trailing separator.

use std::io::Read;

use crate::buffer::{BoundedBuffer, SCAN_BUFFER_SIZE};
use crate::error::BenchError;

/// The record separator convention of a key or query file.
///
/// This is a build-time mode selection: the shipped binaries pick `Nul`
/// when compiled with the `binary-data` feature and `Newline` otherwise.
/// A key may itself contain a NUL byte only in `Newline` mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// ASCII newline (`\n`), for text key files.
    Newline,
    /// NUL (`\0`), for binary key files.
    Nul,
}

impl Separator {
    /// The separator byte value.
    pub const fn byte(self) -> u8 {
        match self {
            Separator::Newline => b'\n',
            Separator::Nul => 0,
        }
    }
}

/// Streaming tokenizer over an input stream of separated records.
///
/// Lending-style iteration: each call to [`next_key`] returns a slice
/// borrowed from the internal buffer, valid until the next call.
///
/// ```
/// use keybench::scan::{KeyTokenizer, Separator};
/// use std::io::Cursor;
///
/// let mut keys = KeyTokenizer::new(Cursor::new("a\nbb\n"), Separator::Newline);
/// assert_eq!(keys.next_key().unwrap(), Some(&b"a"[..]));
/// assert_eq!(keys.next_key().unwrap(), Some(&b"bb"[..]));
/// assert_eq!(keys.next_key().unwrap(), None);
/// ```
///
/// [`next_key`]: KeyTokenizer::next_key
pub struct KeyTokenizer<R> {
    reader: R,
    buf: BoundedBuffer,
    sep: u8,
    /// The reader returned zero bytes; no more refills will happen.
    eof: bool,
    /// The first fill has been issued.
    primed: bool,
}

impl<R: Read> KeyTokenizer<R> {
    /// Tokenize `reader` with the default scan buffer capacity.
    pub fn new(reader: R, separator: Separator) -> Self {
        Self::with_capacity(reader, separator, SCAN_BUFFER_SIZE)
    }

    /// Tokenize `reader` with an explicit buffer capacity.
    ///
    /// Tokenization output is invariant under the choice of capacity as
    /// long as every record is shorter than it; a record of `capacity` or
    /// more bytes fails with [`BenchError::KeyTooLong`].
    pub fn with_capacity(reader: R, separator: Separator, capacity: usize) -> Self {
        Self {
            reader,
            buf: BoundedBuffer::new(capacity),
            sep: separator.byte(),
            eof: false,
            primed: false,
        }
    }

    /// Yield the next record, or `None` at end of stream.
    ///
    /// A final record without a trailing separator is still yielded.
    pub fn next_key(&mut self) -> Result<Option<&[u8]>, BenchError> {
        loop {
            if self.primed {
                if let Some((a, b)) = self.buf.take_record(self.sep) {
                    return Ok(Some(self.buf.slice(a, b)));
                }
                if self.eof {
                    return Ok(match self.buf.take_remainder() {
                        Some((a, b)) => Some(self.buf.slice(a, b)),
                        None => None,
                    });
                }
                self.buf.compact();
                if self.buf.available_to_fill() == 0 {
                    // The record fills the whole window with no separator in
                    // sight; it can never be tokenized.
                    return Err(BenchError::KeyTooLong {
                        capacity: self.buf.capacity(),
                    });
                }
            } else {
                self.primed = true;
            }
            if self.buf.fill(&mut self.reader)? == 0 {
                self.eof = true;
            }
            self.buf.seal(self.sep);
        }
    }
}

/// Iterator over separated records of an in-memory byte slice.
///
/// Same conventions as [`KeyTokenizer`], minus the size bound: the data is
/// already fully materialized.
pub struct SliceRecords<'a> {
    data: &'a [u8],
    pos: usize,
    sep: u8,
}

impl<'a> SliceRecords<'a> {
    /// Iterate over the records of `data`.
    pub fn new(data: &'a [u8], separator: Separator) -> Self {
        Self {
            data,
            pos: 0,
            sep: separator.byte(),
        }
    }
}

impl<'a> Iterator for SliceRecords<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        if self.pos >= self.data.len() {
            return None;
        }
        let rest = &self.data[self.pos..];
        match rest.iter().position(|&b| b == self.sep) {
            Some(i) => {
                self.pos += i + 1;
                Some(&rest[..i])
            }
            None => {
                self.pos = self.data.len();
                Some(rest)
            }
        }
    }
}
