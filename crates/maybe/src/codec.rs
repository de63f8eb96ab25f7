//! Fixed-layout little-endian field codec.
//!
//! A `Maybe<T>` is laid out as a tag byte followed by the payload when
//! present:
//!
//! | tag | payload            |
//! |-----|--------------------|
//! | `0` | none (`Absent`)    |
//! | `1` | `T` (`Present`)    |
//!
//! Any other tag fails to decode with [`MaybeError::IllegalConstruction`].

use crate::{Maybe, MaybeError};

pub const ABSENT_TAG: u8 = 0;
pub const PRESENT_TAG: u8 = 1;

pub trait EncodeField {
    /// Appends `self` into `buf` at `*offset`, advancing the offset.
    /// Writes that would overrun `buf` are skipped.
    fn encode_field(&self, buf: &mut [u8], offset: &mut usize);

    /// Number of bytes `encode_field` writes for this value.
    fn encoded_len(&self) -> usize;
}

pub trait DecodeField: Sized {
    /// Reads a value from `buf` at `*offset`, advancing the offset past it.
    fn decode_field(buf: &[u8], offset: &mut usize) -> Result<Self, MaybeError>;
}

/// End of a `len`-byte field written at `offset`, if it fits in `buf_len`.
fn field_end(buf_len: usize, offset: usize, len: usize) -> Option<usize> {
    offset.checked_add(len).filter(|end| *end <= buf_len)
}

fn read_bytes<'a>(buf: &'a [u8], offset: &mut usize, needed: usize) -> Result<&'a [u8], MaybeError> {
    let remaining = buf.len().saturating_sub(*offset);
    let Some(end) = field_end(buf.len(), *offset, needed) else {
        return Err(MaybeError::Truncated { needed, remaining });
    };
    let bytes = &buf[*offset..end];
    *offset = end;
    Ok(bytes)
}

impl EncodeField for u8 {
    fn encode_field(&self, buf: &mut [u8], offset: &mut usize) {
        if *offset < buf.len() {
            buf[*offset] = *self;
            *offset += 1;
        }
    }

    fn encoded_len(&self) -> usize {
        1
    }
}

impl DecodeField for u8 {
    fn decode_field(buf: &[u8], offset: &mut usize) -> Result<Self, MaybeError> {
        Ok(read_bytes(buf, offset, 1)?[0])
    }
}

impl EncodeField for bool {
    fn encode_field(&self, buf: &mut [u8], offset: &mut usize) {
        (*self as u8).encode_field(buf, offset);
    }

    fn encoded_len(&self) -> usize {
        1
    }
}

impl DecodeField for bool {
    fn decode_field(buf: &[u8], offset: &mut usize) -> Result<Self, MaybeError> {
        let start = *offset;
        match u8::decode_field(buf, offset)? {
            0 => Ok(false),
            1 => Ok(true),
            byte => {
                *offset = start;
                Err(MaybeError::InvalidBool { byte })
            }
        }
    }
}

macro_rules! impl_le_int {
    ($($int:ty),+) => {$(
        impl EncodeField for $int {
            fn encode_field(&self, buf: &mut [u8], offset: &mut usize) {
                let bytes = self.to_le_bytes();
                if let Some(end) = field_end(buf.len(), *offset, bytes.len()) {
                    buf[*offset..end].copy_from_slice(&bytes);
                    *offset = end;
                }
            }

            fn encoded_len(&self) -> usize {
                core::mem::size_of::<$int>()
            }
        }

        impl DecodeField for $int {
            fn decode_field(buf: &[u8], offset: &mut usize) -> Result<Self, MaybeError> {
                let bytes = read_bytes(buf, offset, core::mem::size_of::<$int>())?;
                let mut raw = [0u8; core::mem::size_of::<$int>()];
                raw.copy_from_slice(bytes);
                Ok(<$int>::from_le_bytes(raw))
            }
        }
    )+};
}

impl_le_int!(u16, u32, u64, i32, i64);

// ——— Array impl for any `[u8; N]` ——————————————————

impl<const N: usize> EncodeField for [u8; N] {
    fn encode_field(&self, buf: &mut [u8], offset: &mut usize) {
        if let Some(end) = field_end(buf.len(), *offset, N) {
            buf[*offset..end].copy_from_slice(self);
            *offset = end;
        }
    }

    fn encoded_len(&self) -> usize {
        N
    }
}

impl<const N: usize> DecodeField for [u8; N] {
    fn decode_field(buf: &[u8], offset: &mut usize) -> Result<Self, MaybeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(read_bytes(buf, offset, N)?);
        Ok(out)
    }
}

// ——— Maybe ——————————————————————————————————————————

impl<T: EncodeField> EncodeField for Maybe<T> {
    fn encode_field(&self, buf: &mut [u8], offset: &mut usize) {
        // Tag and payload go in together or not at all.
        if field_end(buf.len(), *offset, self.encoded_len()).is_none() {
            return;
        }
        match self {
            Maybe::Present(value) => {
                PRESENT_TAG.encode_field(buf, offset);
                value.encode_field(buf, offset);
            }
            Maybe::Absent => ABSENT_TAG.encode_field(buf, offset),
        }
    }

    fn encoded_len(&self) -> usize {
        1 + self.as_ref().map_or(0, |value| value.encoded_len())
    }
}

impl<T: DecodeField> DecodeField for Maybe<T> {
    fn decode_field(buf: &[u8], offset: &mut usize) -> Result<Self, MaybeError> {
        let start = *offset;
        let decoded = match u8::decode_field(buf, offset)? {
            ABSENT_TAG => Ok(Maybe::Absent),
            PRESENT_TAG => T::decode_field(buf, offset).map(Maybe::Present),
            tag => Err(MaybeError::IllegalConstruction { tag }),
        };
        if decoded.is_err() {
            *offset = start;
        }
        decoded
    }
}
