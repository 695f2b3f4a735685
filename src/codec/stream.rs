//! Position-tracking reader and int32 field helpers shared by all codecs

use crate::error::{CodecError, ContainerKind, Result};
use crate::scalar::{Scalar, INDEX_WIDTH};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};

/// Upper bound on elements reserved up front when the stream length is unknown
pub const PREALLOC_LIMIT: usize = 1 << 16;

/// Wraps a reader, counting consumed bytes and optionally knowing how many remain
pub(crate) struct StreamReader<R> {
    inner: R,
    offset: u64,
    remaining: Option<usize>,
}

impl<R: Read> StreamReader<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self {
            inner,
            offset: 0,
            remaining: None,
        }
    }

    /// Creates a reader over a source of exactly `len` bytes
    pub(crate) fn with_len(inner: R, len: usize) -> Self {
        Self {
            inner,
            offset: 0,
            remaining: Some(len),
        }
    }

    pub(crate) fn offset(&self) -> u64 {
        self.offset
    }

    pub(crate) fn remaining(&self) -> Option<usize> {
        self.remaining
    }

    fn advance(&mut self, n: usize) {
        self.offset += n as u64;
        if let Some(left) = self.remaining.as_mut() {
            *left = left.saturating_sub(n);
        }
    }

    fn map_err(&self, err: io::Error, what: &'static str) -> CodecError {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            CodecError::Truncated {
                what,
                offset: self.offset,
            }
        } else {
            CodecError::Io(err)
        }
    }

    pub(crate) fn read_i32(&mut self, what: &'static str) -> Result<i32> {
        match self.inner.read_i32::<LittleEndian>() {
            Ok(value) => {
                self.advance(INDEX_WIDTH);
                Ok(value)
            }
            Err(err) => Err(self.map_err(err, what)),
        }
    }

    pub(crate) fn read_scalar<T: Scalar>(&mut self, what: &'static str) -> Result<T> {
        match T::read_le(&mut self.inner) {
            Ok(value) => {
                self.advance(T::WIDTH);
                Ok(value)
            }
            Err(err) => Err(self.map_err(err, what)),
        }
    }

    /// Fails early when a known-length source cannot hold `count` records of
    /// `record_width` bytes
    pub(crate) fn ensure_available(
        &self,
        count: usize,
        record_width: usize,
        what: &'static str,
    ) -> Result<()> {
        if let Some(left) = self.remaining {
            let needed = (count as u128) * (record_width as u128);
            if needed > left as u128 {
                return Err(CodecError::Truncated {
                    what,
                    offset: self.offset + left as u64,
                });
            }
        }
        Ok(())
    }

    /// Capacity to reserve for `count` elements without trusting the header blindly
    pub(crate) fn prealloc_hint(&self, count: usize) -> usize {
        match self.remaining {
            // Length already checked by ensure_available
            Some(_) => count,
            None => count.min(PREALLOC_LIMIT),
        }
    }
}

/// Converts a dimension, index or count to its int32 wire value
pub(crate) fn to_index(field: &'static str, value: usize) -> Result<i32> {
    i32::try_from(value).map_err(|_| CodecError::DimensionOverflow { field, value })
}

/// Writes a dimension, index or count as int32
pub(crate) fn write_index<W: Write + ?Sized>(
    writer: &mut W,
    field: &'static str,
    value: usize,
) -> Result<()> {
    writer.write_i32::<LittleEndian>(to_index(field, value)?)?;
    Ok(())
}

/// Output buffer for an encoding of `encoded_len` bytes
///
/// Reserves nothing when the length is unknown or the allocator refuses it;
/// the buffer then grows as it is written.
pub(crate) fn output_buffer(encoded_len: Option<usize>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(len) = encoded_len {
        if buf.try_reserve_exact(len).is_err() {
            log::debug!("Could not reserve {} bytes up front", len);
        }
    }
    buf
}

/// Rejects a zero dimension, which the format has no encoding for
pub(crate) fn ensure_non_empty(kind: ContainerKind, field: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(CodecError::EmptyDimension { kind, field });
    }
    Ok(())
}
