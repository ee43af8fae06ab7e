//! The fixed-length padded string codec.

use alloc::vec::Vec;

use crate::{codec::Codec, cursor::Cursor, error::Result, padding::Padding};

/// A codec for an opaque byte string occupying exactly `declared_length`
/// bytes on the wire, parameterized by a [`Padding`] policy.
///
/// `pack` delegates to `padding.add_padding`, failing with
/// [`Error::InvalidInput`](crate::error::Error::InvalidInput) under the same
/// conditions the padding policy does. `unpack` consumes exactly
/// `declared_length` bytes and passes them through `padding.strip_padding`.
#[derive(Debug, Clone, Copy)]
pub struct FixedString<P> {
	declared_length: usize,
	padding: P
}

impl<P: Padding> FixedString<P> {
	/// Creates a fixed-length string codec with the given declared length
	/// and padding policy.
	pub fn new(declared_length: usize, padding: P) -> Self {
		Self {
			declared_length,
			padding
		}
	}
}

impl<P: Padding> Codec for FixedString<P> {
	type Value = Vec<u8>;

	fn pack(&self, value: &Vec<u8>, out: &mut Vec<u8>) -> Result<()> {
		let padded = self.padding.add_padding(value, self.declared_length)?;
		out.extend_from_slice(&padded);
		Ok(())
	}

	fn unpack(&self, cursor: &mut Cursor<'_>) -> Result<Vec<u8>> {
		let bytes = cursor.take(self.declared_length, "fixed_string")?;
		Ok(self.padding.strip_padding(bytes))
	}
}
