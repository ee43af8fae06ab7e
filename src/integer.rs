//! The fixed-width integer codec.

use alloc::vec::Vec;

use crate::{
	byteorder::{ByteOrdered, Endian},
	codec::Codec,
	cursor::Cursor,
	error::Result
};

/// A codec for a fixed-width integer, parameterized by its declared
/// endianness and, via `T`, its bit-width and signedness.
///
/// `T` is one of `u8`/`i8`/`u16`/`i16`/`u32`/`i32`/`u64`/`i64` (plus
/// `u128`/`i128` behind the `u128` feature), matching the `bit-width ∈ {8,
/// 16, 32, 64}` and `signedness ∈ {unsigned, signed}` parameters: the
/// record layout is fixed and known at definition time, before any value is
/// presented.
///
/// `pack` always emits exactly `width / 8` bytes and never fails. `unpack`
/// requires at least `width / 8` bytes remaining, failing with
/// [`Error::OutOfBounds`](crate::error::Error::OutOfBounds) naming
/// `"integer"` otherwise.
#[derive(Debug, Clone, Copy)]
pub struct Integer<T> {
	endian: Endian,
	_value: core::marker::PhantomData<T>
}

impl<T: ByteOrdered> Integer<T> {
	/// Creates a fixed-width integer codec with the given declared
	/// endianness.
	pub fn new(endian: Endian) -> Self {
		Self {
			endian,
			_value: core::marker::PhantomData
		}
	}
}

impl<T: ByteOrdered> Codec for Integer<T> {
	type Value = T;

	fn pack(&self, value: &T, out: &mut Vec<u8>) -> Result<()> {
		value.write_ordered(self.endian, out);
		Ok(())
	}

	fn unpack(&self, cursor: &mut Cursor<'_>) -> Result<T> {
		let bytes = cursor.take(T::WIDTH_BYTES, "integer")?;
		log::trace!(
			"integer: read {} byte(s) at offset {}",
			T::WIDTH_BYTES,
			cursor.position() - T::WIDTH_BYTES
		);
		Ok(T::read_ordered(bytes, self.endian))
	}
}
