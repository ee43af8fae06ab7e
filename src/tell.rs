//! The cursor-return sentinel pseudo-codec.

use alloc::vec::Vec;

use crate::{codec::Codec, cursor::Cursor, error::Result};

/// A pseudo-codec that consumes no bytes and contributes nothing to the
/// packed output; on unpack it returns the cursor's current position.
///
/// Placed as the trailing element of a [`Format`](crate::format), `Tell`
/// lets the caller observe how many bytes the preceding codecs consumed,
/// without needing the partial-parse variant of unpack.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tell;

impl Codec for Tell {
	type Value = usize;

	fn pack(&self, _value: &usize, _out: &mut Vec<u8>) -> Result<()> {
		Ok(())
	}

	fn unpack(&self, cursor: &mut Cursor<'_>) -> Result<usize> {
		Ok(cursor.position())
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{byteorder::Endian, integer::Integer};

	#[test]
	fn reports_cursor_position_without_consuming() {
		let int_codec = Integer::<u16>::new(Endian::Big);
		let mut bytes = Vec::new();
		int_codec.pack(&7u16, &mut bytes).unwrap();
		bytes.push(0xFF); // trailing byte Tell should not consume

		let mut cur = Cursor::new(&bytes);
		int_codec.unpack(&mut cur).unwrap();
		assert_eq!(Tell.unpack(&mut cur).unwrap(), 2);
		assert_eq!(cur.remaining(), 1);
	}

	#[test]
	fn pack_emits_nothing() {
		let mut out = Vec::new();
		Tell.pack(&0, &mut out).unwrap();
		assert!(out.is_empty());
	}
}
