//! Free-form convenience entry points for single-element pack/unpack.

use alloc::vec::Vec;

use crate::{codec::Codec, cursor::Cursor, error::Result};

/// Packs a single value with `codec`, returning the resulting byte string.
///
/// Equivalent to constructing a one-element [`Format`](crate::format::Format)
/// and calling its `pack`, but without requiring a tuple wrapper when only
/// one codec is involved.
pub fn pack<C: Codec>(codec: &C, value: &C::Value) -> Result<Vec<u8>> {
	let mut out = Vec::new();
	codec.pack(value, &mut out)?;
	Ok(out)
}

/// Unpacks a single value with `codec` from `bytes`.
///
/// Unlike [`Format::unpack`](crate::format::Format::unpack), this does not
/// require `bytes` to be fully consumed; use
/// [`unpack_strict`] for that.
pub fn unpack<C: Codec>(codec: &C, bytes: &[u8]) -> Result<C::Value> {
	let mut cursor = Cursor::new(bytes);
	codec.unpack(&mut cursor)
}

/// Unpacks a single value with `codec` from `bytes`, requiring every byte to
/// be consumed.
pub fn unpack_strict<C: Codec>(codec: &C, bytes: &[u8]) -> Result<C::Value> {
	let mut cursor = Cursor::new(bytes);
	let value = codec.unpack(&mut cursor)?;
	if cursor.position() != cursor.total_len() {
		return Err(crate::error::Error::IncompleteParse {
			consumed: cursor.position(),
			total: cursor.total_len()
		});
	}
	Ok(value)
}
