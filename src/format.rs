//! The format combinator: composes an ordered list of element codecs into a
//! single record codec.

use alloc::vec::Vec;

use crate::{codec::Codec, cursor::Cursor, error::Error, error::Result};

/// An ordered composition of element codecs, treated as one record codec.
///
/// A format's arity and per-slot value types are fixed by its codec tuple
/// `T` at construction time, before any value is presented — `Format<(A,
/// B)>` only ever packs/unpacks `(A::Value, B::Value)` pairs. Evaluation of
/// the underlying codecs is strictly left-to-right: each codec commits the
/// read cursor before the next one runs, with no lookahead.
#[derive(Debug, Clone, Copy)]
pub struct Format<T>(T);

impl<T> Format<T> {
	/// Creates a format from an ordered tuple of element codecs.
	pub fn new(codecs: T) -> Self {
		Self(codecs)
	}
}

macro_rules! impl_format {
	($(($T:ident, $idx:tt, $v:ident)),+ $(,)?) => {
		impl<$($T: Codec),+> Format<($($T,)+)> {
			/// Packs one value per codec, in declaration order, into a single
			/// concatenated byte string.
			pub fn pack(&self, $($v: &$T::Value),+) -> Result<Vec<u8>> {
				let mut out = Vec::new();
				$( self.0.$idx.pack($v, &mut out)?; )+
				Ok(out)
			}

			/// Unpacks `bytes`, requiring every byte to be consumed by the
			/// format's codecs.
			///
			/// Fails with [`Error::IncompleteParse`] if bytes remain after the
			/// last codec runs. Use [`unpack_with_end`](Self::unpack_with_end)
			/// for partial parses.
			pub fn unpack(&self, bytes: &[u8]) -> Result<($($T::Value,)+)> {
				let mut cursor = Cursor::new(bytes);
				let result = self.unpack_from(&mut cursor)?;
				if cursor.position() != cursor.total_len() {
					return Err(Error::IncompleteParse {
						consumed: cursor.position(),
						total: cursor.total_len()
					});
				}
				Ok(result)
			}

			/// Unpacks `bytes`, returning the decoded tuple alongside the
			/// cursor position reached once every codec has run.
			///
			/// Unlike [`unpack`](Self::unpack), trailing unconsumed bytes are
			/// not an error — this is the partial-parse entry point.
			pub fn unpack_with_end(&self, bytes: &[u8]) -> Result<(($($T::Value,)+), usize)> {
				let mut cursor = Cursor::new(bytes);
				let result = self.unpack_from(&mut cursor)?;
				Ok((result, cursor.position()))
			}

			fn unpack_from(&self, cursor: &mut Cursor<'_>) -> Result<($($T::Value,)+)> {
				Ok(($(
					{
						log::trace!("format: decoding slot {} at offset {}", $idx, cursor.position());
						self.0.$idx.unpack(cursor)?
					},
				)+))
			}
		}
	};
}

impl_format!((A, 0, a));
impl_format!((A, 0, a), (B, 1, b));
impl_format!((A, 0, a), (B, 1, b), (C, 2, c));
impl_format!((A, 0, a), (B, 1, b), (C, 2, c), (D, 3, d));
impl_format!((A, 0, a), (B, 1, b), (C, 2, c), (D, 3, d), (E, 4, e));
impl_format!((A, 0, a), (B, 1, b), (C, 2, c), (D, 3, d), (E, 4, e), (F, 5, f));
impl_format!(
	(A, 0, a),
	(B, 1, b),
	(C, 2, c),
	(D, 3, d),
	(E, 4, e),
	(F, 5, f),
	(G, 6, g)
);
impl_format!(
	(A, 0, a),
	(B, 1, b),
	(C, 2, c),
	(D, 3, d),
	(E, 4, e),
	(F, 5, f),
	(G, 6, g),
	(H, 7, h)
);
