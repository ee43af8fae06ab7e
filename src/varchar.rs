//! The length-prefixed string codec.

use alloc::vec::Vec;

use crate::{codec::Codec, cursor::Cursor, error::Error, error::Result};

/// A codec for an opaque, length-prefixed byte string, parameterized by a
/// length-encoding codec `L`.
///
/// `pack` emits `length_encoder.pack(len(s))` followed by the raw bytes of
/// `s`. `unpack` decodes the length via `length_encoder`, then fails with
/// [`Error::OutOfBounds`] naming `"varchar"` if fewer bytes remain than the
/// decoded length calls for.
#[derive(Debug, Clone, Copy)]
pub struct Varchar<L> {
	length_encoder: L
}

impl<L> Varchar<L> {
	/// Creates a varchar codec that encodes its length prefix with
	/// `length_encoder`.
	pub fn new(length_encoder: L) -> Self {
		Self { length_encoder }
	}
}

impl<L> Codec for Varchar<L>
where
	L: Codec,
	L::Value: TryFrom<usize> + TryInto<usize> + Copy
{
	type Value = Vec<u8>;

	fn pack(&self, value: &Vec<u8>, out: &mut Vec<u8>) -> Result<()> {
		let len = L::Value::try_from(value.len()).map_err(|_| Error::InvalidInput {
			codec: "varchar",
			reason: alloc::format!("length {} does not fit the length encoder", value.len())
		})?;
		self.length_encoder.pack(&len, out)?;
		out.extend_from_slice(value);
		Ok(())
	}

	fn unpack(&self, cursor: &mut Cursor<'_>) -> Result<Vec<u8>> {
		let declared_len = self.length_encoder.unpack(cursor)?;
		let len: usize = declared_len
			.try_into()
			.map_err(|_| Error::OutOfBounds {
				ty: "varchar",
				needed: usize::MAX,
				remaining: cursor.remaining()
			})?;
		let bytes = cursor.take(len, "varchar")?;
		log::trace!("varchar: read {len} byte(s) at offset {}", cursor.position());
		Ok(bytes.to_vec())
	}
}
