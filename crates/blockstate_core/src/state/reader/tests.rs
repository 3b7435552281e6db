use crate::state::{Axis, BellAttachmentType, BlockStateReader, CompoundTag, CoralType, DyeColor, Facing, SlabType, StateError, TagKind};

fn int_state(name: &str, raw: i32) -> CompoundTag {
	CompoundTag::new().with_int(name, raw)
}

fn string_state(name: &str, raw: &str) -> CompoundTag {
	CompoundTag::new().with_string(name, raw)
}

mod primitives {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn bool_reads_zero_and_one() {
		let nbt = CompoundTag::new().with_byte("off", 0).with_byte("on", 1);
		let reader = BlockStateReader::new(&nbt);
		assert_eq!(reader.read_bool("off"), Ok(false));
		assert_eq!(reader.read_bool("on"), Ok(true));
	}

	#[test]
	fn bool_rejects_other_byte_values() {
		let nbt = CompoundTag::new().with_byte("open_bit", 2);
		let err = BlockStateReader::new(&nbt).read_bool("open_bit").expect_err("2 is not a bool");
		assert_eq!(err, StateError::bad_value("open_bit", "2", None));
		assert_eq!(err.to_string(), "property \"open_bit\" has unexpected value \"2\"");
	}

	#[test]
	fn bool_does_not_accept_int_leaves() {
		let nbt = int_state("open_bit", 1);
		let err = BlockStateReader::new(&nbt).read_bool("open_bit").expect_err("int is the wrong kind");
		assert_eq!(err.found(), Some(TagKind::Int));
		assert_eq!(err.to_string(), "property \"open_bit\" has unexpected type int");
	}

	#[test]
	fn int_is_returned_verbatim() {
		let nbt = int_state("age", -7);
		assert_eq!(BlockStateReader::new(&nbt).read_int("age"), Ok(-7));
	}

	#[test]
	fn int_rejects_byte_leaves() {
		let nbt = CompoundTag::new().with_byte("age", 3);
		let err = BlockStateReader::new(&nbt).read_int("age").expect_err("byte is the wrong kind");
		assert_eq!(
			err,
			StateError::MissingOrWrongType {
				name: "age".to_owned(),
				found: Some(TagKind::Byte),
			}
		);
	}

	#[test]
	fn bounded_int_reports_range() {
		let nbt = int_state("age", 16);
		let err = BlockStateReader::new(&nbt).read_bounded_int("age", 0, 15).expect_err("16 is out of range");
		assert_eq!(err.value(), Some("16"));
		assert_eq!(err.reason(), Some("must be inside the range 0 ... 15"));
		assert_eq!(err.to_string(), "property \"age\" has unexpected value \"16\" (must be inside the range 0 ... 15)");
	}

	#[test]
	fn bounded_int_propagates_type_failures() {
		let nbt = string_state("age", "3");
		let err = BlockStateReader::new(&nbt).read_bounded_int("age", 0, 15).expect_err("string is the wrong kind");
		assert_eq!(err.found(), Some(TagKind::String));
	}

	#[test]
	fn string_is_returned_verbatim() {
		let nbt = string_state("wood_type", "Not Validated Here");
		assert_eq!(BlockStateReader::new(&nbt).read_string("wood_type"), Ok("Not Validated Here"));
	}

	#[test]
	fn nbt_exposes_wrapped_compound() {
		let nbt = int_state("age", 1);
		assert!(std::ptr::eq(BlockStateReader::new(&nbt).nbt(), &nbt));
	}

	proptest! {
		#[test]
		fn bounded_int_accepts_exactly_the_inclusive_range(min in -1000i32..1000, span in 0i32..1000, offset in 0i32..1000) {
			let max = min + span;
			let inside = min + offset % (span + 1);

			let nbt = int_state("value", inside);
			prop_assert_eq!(BlockStateReader::new(&nbt).read_bounded_int("value", min, max), Ok(inside));

			for outside in [min - 1, max + 1] {
				let nbt = int_state("value", outside);
				let err = BlockStateReader::new(&nbt).read_bounded_int("value", min, max).expect_err("outside range");
				let message = err.to_string();
				prop_assert!(message.contains(&min.to_string()));
				prop_assert!(message.contains(&max.to_string()));
				prop_assert_eq!(err.value().map(str::to_owned), Some(outside.to_string()));
			}
		}

		#[test]
		fn bool_rejects_every_non_binary_byte(raw in any::<i8>().prop_filter("binary", |raw| *raw != 0 && *raw != 1)) {
			let nbt = CompoundTag::new().with_byte("flag", raw);
			let err = BlockStateReader::new(&nbt).read_bool("flag").expect_err("non-binary byte");
			prop_assert_eq!(err, StateError::bad_value("flag", raw.to_string(), None));
		}
	}
}

mod directions {
	use super::*;

	type Read = fn(&BlockStateReader<'_>) -> crate::state::Result<Facing>;

	fn decode_all(name: &str, raws: std::ops::Range<i32>, read: Read) -> Vec<Facing> {
		raws.map(|raw| {
			let nbt = int_state(name, raw);
			read(&BlockStateReader::new(&nbt)).expect("raw value is mapped")
		})
		.collect()
	}

	fn assert_unmapped(name: &str, raw: i32, read: Read) {
		let nbt = int_state(name, raw);
		let err = read(&BlockStateReader::new(&nbt)).expect_err("raw value is unmapped");
		assert_eq!(err.name(), name);
		assert_eq!(err.value(), Some(raw.to_string().as_str()));
		assert!(err.to_string().contains(&format!("unmapped facing value {raw}")));
	}

	#[test]
	fn six_way_table() {
		use Facing::*;
		let read: Read = |reader| reader.read_facing_direction();
		assert_eq!(decode_all("facing_direction", 0..6, read), [Down, Up, North, South, West, East]);
		assert_unmapped("facing_direction", 6, read);
		assert_unmapped("facing_direction", -1, read);
	}

	#[test]
	fn horizontal_table_collapses_vertical_values_to_north() {
		use Facing::*;
		let read: Read = |reader| reader.read_horizontal_facing();
		assert_eq!(decode_all("facing_direction", 0..6, read), [North, North, North, South, West, East]);
		assert_unmapped("facing_direction", 6, read);
	}

	#[test]
	fn weirdo_table() {
		use Facing::*;
		let read: Read = |reader| reader.read_weirdo_horizontal_facing();
		assert_eq!(decode_all("weirdo_direction", 0..4, read), [East, West, South, North]);
		assert_unmapped("weirdo_direction", 4, read);
	}

	#[test]
	fn legacy_horizontal_table() {
		use Facing::*;
		let read: Read = |reader| reader.read_legacy_horizontal_facing();
		assert_eq!(decode_all("direction", 0..4, read), [South, West, North, East]);
		assert_unmapped("direction", 4, read);
	}

	#[test]
	fn coral_table() {
		use Facing::*;
		let read: Read = |reader| reader.read_coral_facing();
		assert_eq!(decode_all("coral_direction", 0..4, read), [West, East, North, South]);
		assert_unmapped("coral_direction", 4, read);
	}

	#[test]
	fn tables_read_their_own_property() {
		let nbt = int_state("facing_direction", 0);
		let reader = BlockStateReader::new(&nbt);
		assert!(reader.read_weirdo_horizontal_facing().expect_err("weirdo_direction absent").is_missing());
		assert!(reader.read_legacy_horizontal_facing().expect_err("direction absent").is_missing());
		assert!(reader.read_coral_facing().expect_err("coral_direction absent").is_missing());
	}

	#[test]
	fn without_down_remaps_down_only() {
		let read: Read = |reader| reader.read_facing_without_down();
		assert_eq!(decode_all("facing_direction", 0..3, read), [Facing::Up, Facing::Up, Facing::North]);
	}

	#[test]
	fn without_up_remaps_up_only() {
		let read: Read = |reader| reader.read_facing_without_up();
		assert_eq!(decode_all("facing_direction", 0..3, read), [Facing::Down, Facing::Down, Facing::North]);
	}

	#[test]
	fn pillar_axis_tokens() {
		for (token, axis) in [("x", Axis::X), ("y", Axis::Y), ("z", Axis::Z)] {
			let nbt = string_state("pillar_axis", token);
			assert_eq!(BlockStateReader::new(&nbt).read_pillar_axis(), Ok(axis));
		}

		let nbt = string_state("pillar_axis", "X");
		let err = BlockStateReader::new(&nbt).read_pillar_axis().expect_err("tokens are case sensitive");
		assert_eq!(err, StateError::bad_value("pillar_axis", "X", Some("invalid axis value".to_owned())));
	}
}

mod materials {
	use super::*;

	#[test]
	fn every_color_token_decodes() {
		let tokens = [
			("black", DyeColor::Black),
			("blue", DyeColor::Blue),
			("brown", DyeColor::Brown),
			("cyan", DyeColor::Cyan),
			("gray", DyeColor::Gray),
			("green", DyeColor::Green),
			("light_blue", DyeColor::LightBlue),
			("lime", DyeColor::Lime),
			("magenta", DyeColor::Magenta),
			("orange", DyeColor::Orange),
			("pink", DyeColor::Pink),
			("purple", DyeColor::Purple),
			("red", DyeColor::Red),
			("silver", DyeColor::LightGray),
			("white", DyeColor::White),
			("yellow", DyeColor::Yellow),
		];
		for (token, color) in tokens {
			let nbt = string_state("color", token);
			assert_eq!(BlockStateReader::new(&nbt).read_color(), Ok(color), "token {token}");
		}
		assert_eq!(tokens.len(), DyeColor::ALL.len());
	}

	#[test]
	fn modern_light_gray_token_is_rejected() {
		let nbt = string_state("color", "light_gray");
		assert!(BlockStateReader::new(&nbt).read_color().is_err());
	}

	#[test]
	fn unknown_color_names_the_literal() {
		let nbt = string_state("color", "neon");
		let err = BlockStateReader::new(&nbt).read_color().expect_err("neon is not a dye");
		assert_eq!(err, StateError::bad_value("color", "neon", None));
		assert!(err.to_string().contains("neon"));
	}

	#[test]
	fn slab_position_follows_top_slot_bit() {
		let top = CompoundTag::new().with_byte("top_slot_bit", 1);
		let bottom = CompoundTag::new().with_byte("top_slot_bit", 0);
		assert_eq!(BlockStateReader::new(&top).read_slab_position(), Ok(SlabType::Top));
		assert_eq!(BlockStateReader::new(&bottom).read_slab_position(), Ok(SlabType::Bottom));

		let bad = CompoundTag::new().with_byte("top_slot_bit", 5);
		assert_eq!(BlockStateReader::new(&bad).read_slab_position(), Err(StateError::bad_value("top_slot_bit", "5", None)));
	}

	#[test]
	fn torch_unknown_and_top_both_point_up() {
		for (token, facing) in [
			("unknown", Facing::Up),
			("top", Facing::Up),
			("north", Facing::North),
			("south", Facing::South),
			("east", Facing::East),
			("west", Facing::West),
		] {
			let nbt = string_state("torch_facing_direction", token);
			assert_eq!(BlockStateReader::new(&nbt).read_torch_facing(), Ok(facing), "token {token}");
		}

		let nbt = string_state("torch_facing_direction", "down");
		let err = BlockStateReader::new(&nbt).read_torch_facing().expect_err("torches never hang");
		assert_eq!(err.reason(), Some("invalid torch facing"));
	}

	#[test]
	fn coral_colors_map_to_species() {
		for (token, coral) in [
			("blue", CoralType::Tube),
			("pink", CoralType::Brain),
			("purple", CoralType::Bubble),
			("red", CoralType::Fire),
			("yellow", CoralType::Horn),
		] {
			let nbt = string_state("coral_color", token);
			assert_eq!(BlockStateReader::new(&nbt).read_coral_type(), Ok(coral), "token {token}");
		}

		let nbt = string_state("coral_color", "tube");
		assert_eq!(BlockStateReader::new(&nbt).read_coral_type(), Err(StateError::bad_value("coral_color", "tube", None)));
	}

	#[test]
	fn bell_attachment_tokens() {
		for (token, attachment) in [
			("hanging", BellAttachmentType::Ceiling),
			("standing", BellAttachmentType::Floor),
			("side", BellAttachmentType::OneWall),
			("multiple", BellAttachmentType::TwoWalls),
		] {
			let nbt = string_state("attachment", token);
			assert_eq!(BlockStateReader::new(&nbt).read_bell_attachment_type(), Ok(attachment), "token {token}");
		}

		let nbt = string_state("attachment", "floating");
		assert!(BlockStateReader::new(&nbt).read_bell_attachment_type().is_err());
	}
}

mod failures {
	use super::*;

	#[test]
	fn every_accessor_reports_missing_property_by_name() {
		let nbt = CompoundTag::new();
		let reader = BlockStateReader::new(&nbt);

		let results: Vec<(&str, StateError)> = vec![
			("flag", reader.read_bool("flag").expect_err("missing")),
			("age", reader.read_int("age").expect_err("missing")),
			("age", reader.read_bounded_int("age", 0, 7).expect_err("missing")),
			("wood_type", reader.read_string("wood_type").expect_err("missing")),
			("facing_direction", reader.read_facing_direction().expect_err("missing")),
			("facing_direction", reader.read_horizontal_facing().expect_err("missing")),
			("weirdo_direction", reader.read_weirdo_horizontal_facing().expect_err("missing")),
			("direction", reader.read_legacy_horizontal_facing().expect_err("missing")),
			("coral_direction", reader.read_coral_facing().expect_err("missing")),
			("facing_direction", reader.read_facing_without_down().expect_err("missing")),
			("facing_direction", reader.read_facing_without_up().expect_err("missing")),
			("pillar_axis", reader.read_pillar_axis().expect_err("missing")),
			("color", reader.read_color().expect_err("missing")),
			("top_slot_bit", reader.read_slab_position().expect_err("missing")),
			("torch_facing_direction", reader.read_torch_facing().expect_err("missing")),
			("coral_color", reader.read_coral_type().expect_err("missing")),
			("attachment", reader.read_bell_attachment_type().expect_err("missing")),
		];

		for (name, err) in results {
			assert!(err.is_missing(), "{name} should be missing");
			assert_eq!(err.name(), name);
			assert_eq!(err.to_string(), format!("property \"{name}\" is missing"));
			assert!(!err.to_string().contains("unexpected type"));
		}
	}

	#[test]
	fn repeated_reads_are_idempotent() {
		let nbt = CompoundTag::new()
			.with_int("facing_direction", 0)
			.with_string("color", "neon")
			.with_byte("top_slot_bit", 1);
		let reader = BlockStateReader::new(&nbt);

		assert_eq!(reader.read_facing_without_down(), reader.read_facing_without_down());
		assert_eq!(reader.read_color(), reader.read_color());
		assert_eq!(reader.read_slab_position(), reader.read_slab_position());
		assert_eq!(reader.read_int("missing"), reader.read_int("missing"));
		assert_eq!(reader.read_facing_without_down(), Ok(Facing::Up));
	}

	#[test]
	fn reader_is_shareable_across_threads() {
		let nbt = CompoundTag::new().with_int("facing_direction", 3);
		let reader = BlockStateReader::new(&nbt);

		std::thread::scope(|scope| {
			let handles: Vec<_> = (0..4).map(|_| scope.spawn(move || reader.read_facing_direction())).collect();
			for handle in handles {
				assert_eq!(handle.join().expect("reader thread completes"), Ok(Facing::South));
			}
		});
	}
}
