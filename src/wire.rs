//! Fixed-width scalars and their little-endian wire representation.
//!
//! Every scalar is paired with a zerocopy byte-order type whose in-memory
//! layout is the wire layout. Converting into it performs the byte swap on
//! big-endian hosts and compiles to nothing on little-endian ones.

use zerocopy::byteorder::little_endian;
use zerocopy::{FromBytes, FromZeros, Immutable, IntoBytes, KnownLayout};

/// A value with a fixed byte width and a canonical little-endian encoding.
///
/// Implemented for the primitive integers and for `f32`/`f64`, which travel
/// as their IEEE-754 bit patterns.
///
/// # Example
///
/// ```
/// use bytestream::FixedWidth;
/// use zerocopy::IntoBytes;
///
/// assert_eq!(<u32 as FixedWidth>::SIZE, 4);
/// assert_eq!(0xdeadbeef_u32.to_wire().as_bytes(), &[0xef, 0xbe, 0xad, 0xde]);
/// ```
pub trait FixedWidth: Copy + Default {
    /// The little-endian representation written to the buffer.
    type Wire: IntoBytes + FromBytes + Immutable + KnownLayout;

    /// Encoded width in bytes.
    const SIZE: usize = core::mem::size_of::<Self::Wire>();

    /// Convert from host order into wire order.
    fn to_wire(self) -> Self::Wire;

    /// Convert from wire order back into host order.
    fn from_wire(wire: Self::Wire) -> Self;

    /// Decode from up to `SIZE` bytes, zero-filling whatever is missing.
    ///
    /// The wire order is little-endian, so a short input loses the
    /// high-order bytes. Bytes past `SIZE` are ignored.
    #[inline]
    fn from_partial(bytes: &[u8]) -> Self {
        let mut wire = <Self::Wire as FromZeros>::new_zeroed();
        let dst = wire.as_mut_bytes();
        let n = bytes.len().min(dst.len());
        dst[..n].copy_from_slice(&bytes[..n]);
        Self::from_wire(wire)
    }
}

// Single bytes have no byte order
impl FixedWidth for u8 {
    type Wire = u8;

    #[inline]
    fn to_wire(self) -> u8 {
        self
    }

    #[inline]
    fn from_wire(wire: u8) -> Self {
        wire
    }
}

impl FixedWidth for i8 {
    type Wire = i8;

    #[inline]
    fn to_wire(self) -> i8 {
        self
    }

    #[inline]
    fn from_wire(wire: i8) -> Self {
        wire
    }
}

macro_rules! impl_fixed_width {
    ($($ty:ty => $wire:ident),+ $(,)?) => {
        $(
            impl FixedWidth for $ty {
                type Wire = little_endian::$wire;

                #[inline]
                fn to_wire(self) -> Self::Wire {
                    little_endian::$wire::new(self)
                }

                #[inline]
                fn from_wire(wire: Self::Wire) -> Self {
                    wire.get()
                }
            }
        )+
    };
}

impl_fixed_width!(
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    f32 => F32,
    f64 => F64,
);
