//! The closed error taxonomy surfaced by codec `pack`/`unpack` operations.

use alloc::string::String;
use thiserror::Error;

/// The result type returned by every codec and format operation in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// An error raised while packing or unpacking a value.
///
/// Errors are raised synchronously at the point of detection and are never
/// recovered internally: a codec either completes with an advanced cursor or
/// fails outright. On a failed unpack, the cursor position used to produce the
/// error must not be trusted for further reads.
#[derive(Debug, Error)]
#[allow(variant_size_differences)]
pub enum Error {
	/// A pack input violated the codec's precondition, such as a fixed-length
	/// string whose byte length does not match the declared length.
	#[error("invalid input for {codec}: {reason}")]
	InvalidInput {
		/// The name of the codec that rejected the input.
		codec: &'static str,
		/// A human-readable description of the violated precondition.
		reason: String
	},

	/// An unpack required more bytes than remained in the buffer.
	#[error("out of bounds decoding {ty}: needed {needed} byte(s), {remaining} remaining")]
	OutOfBounds {
		/// The name of the type being decoded when the buffer was exhausted.
		ty: &'static str,
		/// The number of bytes the codec needed to proceed.
		needed: usize,
		/// The number of bytes actually left in the buffer.
		remaining: usize
	},

	/// A variable-length integer decoded to a value exceeding its declared
	/// maximum bit-width.
	#[error("variable-length integer decoded beyond its declared {max_bits}-bit maximum")]
	Overlong {
		/// The declared maximum bit-width of the codec that detected the overflow.
		max_bits: u32
	},

	/// A strict format unpack left bytes unconsumed in the buffer.
	#[error("incomplete parse: consumed {consumed} of {total} byte(s)")]
	IncompleteParse {
		/// The number of bytes consumed by the format's codecs.
		consumed: usize,
		/// The total number of bytes in the buffer that was unpacked.
		total: usize
	}
}
