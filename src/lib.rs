//! `packfmt` is a composable binary packing library: a family of pluggable
//! codecs that pack and unpack heterogeneous tuples of values to and from
//! compact byte strings, for callers who need explicit control over the
//! on-wire representation (endianness, variable-length integers, zigzag
//! encoding, padded fixed-length strings, length-prefixed strings and
//! sequences) without writing byte-shuffling code by hand.
//!
//! # What this crate is not
//!
//! There is no type tag on the wire — a format does not describe itself,
//! and a codec does not validate that the bytes it is handed were produced
//! by a matching codec. There is no schema evolution, no floating-point
//! codec, and no string-encoding conversion: strings are opaque byte
//! sequences throughout. The crate only operates on in-memory byte buffers:
//! it does no file or socket I/O, and manages no threads.
//!
//! # Layout
//!
//! - [`Codec`] is the contract every element codec implements.
//! - [`Integer`](integer::Integer) is the fixed-width integer codec.
//! - [`VarUint`](varint::VarUint) and [`VarInt`](varint::VarInt) are the
//!   variable-length continuation-bit codecs, unsigned and zigzag-signed.
//! - [`FixedString`](fixed_string::FixedString) and its
//!   [`Padding`](padding::Padding) policies encode fixed-length, optionally
//!   padded byte strings.
//! - [`Varchar`](varchar::Varchar) and [`Sequence`](sequence::Sequence) are
//!   length-prefixed: a string and a homogeneous list of elements,
//!   respectively.
//! - [`Tell`](tell::Tell) is the cursor-return sentinel.
//! - [`Format`](format::Format) composes an ordered tuple of codecs into one
//!   record codec; [`pack`]/[`unpack`] are the single-codec equivalents.
//!
//! # Example
//!
//! ```
//! use packfmt::{
//!     byteorder::Endian, fixed_string::FixedString, format::Format,
//!     integer::Integer, padding::ByteFill, varchar::Varchar, varint::VarUint
//! };
//!
//! let format = Format::new((
//!     Integer::<u16>::new(Endian::Big),
//!     FixedString::new(2, ByteFill::space()),
//!     VarUint::<u64>::little(64),
//!     Varchar::new(VarUint::<u64>::little(64))
//! ));
//!
//! let packed = format
//!     .pack(&1u16, &b"a".to_vec(), &300u64, &b"abc".to_vec())
//!     .unwrap();
//! assert_eq!(packed, [0x00, 0x01, b'a', b' ', 0xAC, 0x02, 0x03, b'a', b'b', b'c']);
//!
//! let (id, tag, count, name) = format.unpack(&packed).unwrap();
//! assert_eq!((id, tag, count, name), (1u16, b"a".to_vec(), 300u64, b"abc".to_vec()));
//! ```

#![cfg_attr(feature = "no-std", no_std)]
#![forbid(unsafe_code)]
#![forbid(rustdoc::broken_intra_doc_links)]

extern crate alloc;

pub mod byteorder;
pub mod codec;
pub mod convenience;
pub mod cursor;
pub mod error;
pub mod fixed_string;
pub mod format;
pub mod padding;
pub mod sequence;
pub mod tell;
pub mod varchar;
pub mod varint;

pub mod integer;

pub use codec::Codec;
pub use convenience::{pack, unpack, unpack_strict};
pub use cursor::Cursor;
pub use error::{Error, Result};
pub use format::Format;
