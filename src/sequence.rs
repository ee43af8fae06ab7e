//! The length-prefixed sequence codec.

use alloc::vec::Vec;

use crate::{codec::Codec, cursor::Cursor, error::Error, error::Result};

/// A codec for a length-prefixed sequence of elements, parameterized by an
/// element codec `E` and a length-encoding codec `L`.
///
/// `pack` emits the length-encoded element count followed by each element's
/// encoding in order. `unpack` decodes the count, then invokes `E::unpack`
/// that many times in sequence, eagerly collecting the results into a
/// `Vec`; if any element's unpack fails, its error propagates immediately
/// and no further elements are decoded.
#[derive(Debug, Clone, Copy)]
pub struct Sequence<E, L> {
	element: E,
	length_encoder: L
}

impl<E, L> Sequence<E, L> {
	/// Creates a sequence codec packing/unpacking elements with `element`,
	/// prefixed by a count encoded with `length_encoder`.
	pub fn new(element: E, length_encoder: L) -> Self {
		Self {
			element,
			length_encoder
		}
	}
}

impl<E, L> Codec for Sequence<E, L>
where
	E: Codec,
	L: Codec,
	L::Value: TryFrom<usize> + TryInto<usize> + Copy
{
	type Value = Vec<E::Value>;

	fn pack(&self, value: &Vec<E::Value>, out: &mut Vec<u8>) -> Result<()> {
		let len = L::Value::try_from(value.len()).map_err(|_| Error::InvalidInput {
			codec: "sequence",
			reason: alloc::format!("length {} does not fit the length encoder", value.len())
		})?;
		self.length_encoder.pack(&len, out)?;
		for item in value {
			self.element.pack(item, out)?;
		}
		Ok(())
	}

	fn unpack(&self, cursor: &mut Cursor<'_>) -> Result<Vec<E::Value>> {
		let declared_len = self.length_encoder.unpack(cursor)?;
		let len: usize = declared_len.try_into().map_err(|_| Error::OutOfBounds {
			ty: "sequence",
			needed: usize::MAX,
			remaining: cursor.remaining()
		})?;
		log::trace!("sequence: decoding {len} element(s) at offset {}", cursor.position());
		let mut items = Vec::with_capacity(len.min(cursor.remaining()));
		for _ in 0..len {
			items.push(self.element.unpack(cursor)?);
		}
		Ok(items)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{integer::Integer, byteorder::Endian, varint::VarUint};
	use alloc::vec;

	#[test]
	fn round_trips_a_list_of_integers() {
		let codec = Sequence::new(Integer::<u8>::new(Endian::Little), VarUint::<u64>::little(64));
		let mut out = Vec::new();
		codec.pack(&vec![1u8, 2, 3], &mut out).unwrap();
		assert_eq!(out, vec![0x03, 1, 2, 3]);

		let mut cur = Cursor::new(&out);
		assert_eq!(codec.unpack(&mut cur).unwrap(), vec![1, 2, 3]);
	}

	#[test]
	fn empty_sequence_round_trips() {
		let codec = Sequence::new(Integer::<u8>::new(Endian::Little), VarUint::<u64>::little(64));
		let mut out = Vec::new();
		codec.pack(&Vec::<u8>::new(), &mut out).unwrap();
		assert_eq!(out, vec![0x00]);

		let mut cur = Cursor::new(&out);
		assert_eq!(codec.unpack(&mut cur).unwrap(), Vec::<u8>::new());
	}

	#[test]
	fn element_decode_error_propagates_and_stops() {
		let codec = Sequence::new(Integer::<u32>::new(Endian::Little), VarUint::<u64>::little(64));
		// Declares 2 elements but only has enough bytes for one 32-bit integer.
		let mut cur = Cursor::new(&[0x02, 1, 2, 3, 4]);
		assert!(codec.unpack(&mut cur).is_err());
	}
}
