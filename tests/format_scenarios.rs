//! Multi-codec [`Format`] scenarios exercising the concrete byte sequences
//! from the packing library's worked examples, the way `vorbis_bitpack`
//! exercises its own spec example in `src/test.rs`.

use packfmt::{
	byteorder::Endian, fixed_string::FixedString, format::Format, integer::Integer,
	padding::ByteFill, sequence::Sequence, tell::Tell, varchar::Varchar,
	varint::{Direction, VarInt, VarUint}
};

#[test_log::test]
fn header_tag_count_name_round_trips_the_worked_example() {
	let format = Format::new((
		Integer::<u16>::new(Endian::Big),
		FixedString::new(2, ByteFill::space()),
		VarUint::<u64>::little(64),
		Varchar::new(VarUint::<u64>::little(64))
	));

	let packed = format
		.pack(&1u16, &b"a".to_vec(), &300u64, &b"abc".to_vec())
		.expect("all four codecs accept these inputs");

	assert_eq!(
		packed,
		[0x00, 0x01, b'a', b' ', 0xAC, 0x02, 0x03, b'a', b'b', b'c']
	);

	let (id, tag, count, name) = format.unpack(&packed).expect("packed bytes are well-formed");
	assert_eq!(id, 1);
	assert_eq!(tag, b"a");
	assert_eq!(count, 300);
	assert_eq!(name, b"abc");
}

#[test_log::test]
fn tell_reports_offset_after_a_nested_sequence() {
	let format = Format::new((
		Sequence::new(Integer::<u8>::new(Endian::Little), VarUint::<u64>::little(64)),
		Tell
	));

	let packed = format.pack(&vec![10u8, 20, 30], &0usize).unwrap();
	assert_eq!(packed, [0x03, 10, 20, 30]);

	let (items, offset) = format.unpack(&packed).unwrap();
	assert_eq!(items, vec![10, 20, 30]);
	assert_eq!(offset, packed.len());
}

#[test_log::test]
fn big_endian_varint_and_zigzag_signed_round_trip_together() {
	let format = Format::new((
		VarUint::<u64>::big(64),
		VarInt::<i64>::new(Direction::Big, 64)
	));

	let packed = format.pack(&300u64, &-2i64).unwrap();
	assert_eq!(packed, [0x82, 0x2C, 0x03]);

	let (count, delta) = format.unpack(&packed).unwrap();
	assert_eq!(count, 300);
	assert_eq!(delta, -2);
}

#[test_log::test]
fn strict_unpack_rejects_a_format_shorter_than_its_buffer() {
	let format = Format::new((Integer::<u16>::new(Endian::Little),));
	let mut packed = format.pack(&7u16).unwrap();
	packed.push(0xFF);

	assert!(format.unpack(&packed).is_err());
	let ((value,), end) = format.unpack_with_end(&packed).unwrap();
	assert_eq!(value, 7);
	assert_eq!(end, 2);
}

#[test_log::test]
fn overlong_varint_inside_a_format_fails_the_whole_unpack() {
	let producer = Format::new((VarUint::<u64>::little(32),));
	let packed = producer.pack(&65536u64).unwrap();

	let consumer = Format::new((VarUint::<u64>::little(16),));
	assert!(consumer.unpack(&packed).is_err());
}

#[test_log::test]
fn fixed_string_none_padding_rejects_mismatched_length_in_a_format() {
	let format = Format::new((
		Integer::<u8>::new(Endian::Little),
		FixedString::new(4, packfmt::padding::NoPadding)
	));

	assert!(format.pack(&1u8, &b"abc".to_vec()).is_err());
	assert!(format.pack(&1u8, &b"abcd".to_vec()).is_ok());
}
