//! The codec contract every element codec in this crate implements.

use alloc::vec::Vec;

use crate::{cursor::Cursor, error::Result};

/// A named strategy that maps one logical value to and from a byte slice.
///
/// Every codec exposes the same shape — `pack`/`unpack` over an associated
/// [`Value`](Codec::Value) type — regardless of whether it encodes a single
/// integer, a padded string, or a whole sequence of nested values. Codecs are
/// parameterized at construction time and are otherwise stateless, so a
/// single codec instance may be reused, and shared across threads, for any
/// number of pack/unpack calls.
///
/// `pack` and `unpack` are mutual inverses on the subset of inputs a codec
/// accepts: `codec.unpack(&mut Cursor::new(&pack(codec, &v))) == Ok(v)`,
/// except where a codec documents a lossy transform (for instance, a
/// byte-filled fixed-length string strips trailing padding bytes on decode).
pub trait Codec {
	/// The logical value this codec packs and unpacks.
	type Value;

	/// Appends the wire representation of `value` to `out`.
	///
	/// Packing is deterministic: the same `value` always produces the same
	/// bytes. Most codecs in this crate cannot fail to pack any value of
	/// their `Value` type, but some — notably
	/// [`FixedString`](crate::fixed_string::FixedString) with
	/// [`NoPadding`](crate::padding::NoPadding) — reject inputs that violate
	/// a precondition, such as a string of the wrong length. On failure, no
	/// partial output is left in `out`.
	fn pack(&self, value: &Self::Value, out: &mut Vec<u8>) -> Result<()>;

	/// Consumes the wire representation of a value from `cursor`, advancing
	/// it past the bytes read on success.
	///
	/// On failure, the cursor's position must not be trusted; the caller
	/// should discard the whole unpack attempt rather than resume from it.
	fn unpack(&self, cursor: &mut Cursor<'_>) -> Result<Self::Value>;
}
