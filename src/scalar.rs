//! Fixed-width little-endian scalar encoding
//!
//! Every value on the wire is written with an explicit byte order and a width
//! fixed by its Rust type, so files are portable between platforms. No type
//! tag is stored: a reader must decode with the same scalar type the writer
//! used.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use num_traits::Num;
use std::fmt;
use std::io::{self, Read, Write};

/// Width in bytes of the int32 fields used for dimensions and indices
pub const INDEX_WIDTH: usize = 4;

/// A numeric type with a fixed-width little-endian wire representation
pub trait Scalar: Copy + Num + fmt::Debug + 'static {
    /// Number of bytes one value occupies on the wire
    const WIDTH: usize;

    /// Reads one value from `reader`
    fn read_le<R: Read + ?Sized>(reader: &mut R) -> io::Result<Self>;

    /// Writes one value to `writer`
    fn write_le<W: Write + ?Sized>(self, writer: &mut W) -> io::Result<()>;
}

macro_rules! impl_scalar {
    ($ty:ty, $width:expr, $read:ident, $write:ident) => {
        impl Scalar for $ty {
            const WIDTH: usize = $width;

            #[inline]
            fn read_le<R: Read + ?Sized>(reader: &mut R) -> io::Result<Self> {
                reader.$read::<LittleEndian>()
            }

            #[inline]
            fn write_le<W: Write + ?Sized>(self, writer: &mut W) -> io::Result<()> {
                writer.$write::<LittleEndian>(self)
            }
        }
    };
}

impl_scalar!(f32, 4, read_f32, write_f32);
impl_scalar!(f64, 8, read_f64, write_f64);
impl_scalar!(i32, 4, read_i32, write_i32);
impl_scalar!(i64, 8, read_i64, write_i64);
impl_scalar!(u32, 4, read_u32, write_u32);
impl_scalar!(u64, 8, read_u64, write_u64);
