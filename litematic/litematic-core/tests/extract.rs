use std::path::Path;

use chrono::{DateTime, Utc};
use litematic_core::{Compound, DecodeError, EnclosingSize, Tag, TagKind, extract};

const SOURCE: &str = "hall.litematic";

fn size(x: i32, y: i32, z: i32) -> Compound {
    Compound::new()
        .with("x", Tag::Int(x))
        .with("y", Tag::Int(y))
        .with("z", Tag::Int(z))
}

/// Root tree of a small but complete schematic.
fn hall() -> Compound {
    let metadata = Compound::new()
        .with("Name", Tag::string("Hall"))
        .with("TotalBlocks", Tag::Int(120))
        .with("EnclosingSize", size(5, 4, 3));
    let regions = Compound::new().with("Main", Compound::new());

    Compound::new()
        .with("Version", Tag::Int(6))
        .with("SubVersion", Tag::Int(1))
        .with("Metadata", metadata)
        .with("Regions", regions)
}

fn with_metadata(fields: impl IntoIterator<Item = (&'static str, Tag)>) -> Compound {
    let mut root = hall();
    let mut metadata = root
        .get("Metadata")
        .and_then(Tag::as_compound)
        .cloned()
        .unwrap();
    for (name, tag) in fields {
        metadata.insert(name, tag);
    }
    root.insert("Metadata", metadata);
    root
}

#[test]
fn extracts_hall_scenario() {
    let meta = extract(&hall(), SOURCE).unwrap();

    assert_eq!(meta.source(), Path::new(SOURCE));
    assert_eq!(meta.version(), 6);
    assert_eq!(meta.sub_version(), 1);
    assert_eq!(meta.data_version(), 0);
    assert_eq!(meta.region_count(), 1);
    assert_eq!(meta.name(), Some("Hall"));
    assert_eq!(meta.total_blocks(), 120);
    assert_eq!(meta.total_volume(), 0);
    assert_eq!(meta.enclosing_size(), Some(EnclosingSize::new(5, 4, 3)));
    assert_eq!(meta.author(), None);
    assert_eq!(meta.description(), None);
    assert_eq!(meta.time_created(), None);
    assert_eq!(meta.time_modified(), None);
    assert_eq!(meta.preview_image(), None);
}

#[test]
fn version_is_carried_exactly() {
    for version in [i32::MIN, -1, 0, 7, i32::MAX] {
        let mut root = hall();
        root.insert("Version", Tag::Int(version));
        assert_eq!(extract(&root, SOURCE).unwrap().version(), version);
    }
}

#[test]
fn missing_version_is_an_error() {
    let mut root = hall();
    root.remove("Version");

    let err = extract(&root, SOURCE).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::MissingField {
            field: "Version",
            ..
        }
    ));
    assert_eq!(err.path(), SOURCE);
    assert_eq!(
        err.to_string(),
        "missing required tag 'Version' in file: hall.litematic"
    );
}

#[test]
fn non_int_version_is_a_type_mismatch() {
    let mut root = hall();
    root.insert("Version", Tag::Long(6));

    match extract(&root, SOURCE).unwrap_err() {
        DecodeError::TypeMismatch {
            field,
            expected,
            actual,
            path,
        } => {
            assert_eq!(field, "Version");
            assert_eq!(expected, TagKind::Int);
            assert_eq!(actual, TagKind::Long);
            assert_eq!(path, SOURCE);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_metadata_is_an_error() {
    let mut root = hall();
    root.remove("Metadata");

    let err = extract(&root, SOURCE).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::MissingField {
            field: "Metadata",
            ..
        }
    ));
}

#[test]
fn non_compound_metadata_is_a_type_mismatch() {
    let mut root = hall();
    root.insert("Metadata", Tag::List(vec![]));

    let err = extract(&root, SOURCE).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::TypeMismatch {
            field: "Metadata",
            expected: TagKind::Compound,
            actual: TagKind::List,
            ..
        }
    ));
    assert!(err.to_string().contains("expected Compound for 'Metadata' but got List"));
}

#[test]
fn version_is_checked_before_metadata() {
    let root = Compound::new();
    let err = extract(&root, SOURCE).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::MissingField {
            field: "Version",
            ..
        }
    ));
}

#[test]
fn region_count_follows_regions_compound() {
    let mut root = hall();
    root.remove("Regions");
    assert_eq!(extract(&root, SOURCE).unwrap().region_count(), 0);

    let regions: Compound = (0..4)
        .map(|i| (format!("Region{i}"), Tag::Compound(Compound::new())))
        .collect();
    root.insert("Regions", regions);
    assert_eq!(extract(&root, SOURCE).unwrap().region_count(), 4);
}

#[test]
fn mistyped_regions_counts_as_zero() {
    let mut root = hall();
    root.insert("Regions", Tag::List(vec![Tag::Compound(Compound::new())]));
    assert_eq!(extract(&root, SOURCE).unwrap().region_count(), 0);
}

#[test]
fn root_level_ints_default_to_zero() {
    let mut root = hall();
    root.insert("SubVersion", Tag::string("1"));
    root.insert("MinecraftDataVersion", Tag::Int(3465));

    let meta = extract(&root, SOURCE).unwrap();
    assert_eq!(meta.sub_version(), 0);
    assert_eq!(meta.data_version(), 3465);
}

#[test]
fn mistyped_strings_are_absent() {
    let root = with_metadata([
        ("Author", Tag::Int(1)),
        ("Name", Tag::ByteArray(vec![1, 2])),
        ("Description", Tag::string("A long hall")),
    ]);

    let meta = extract(&root, SOURCE).unwrap();
    assert_eq!(meta.author(), None);
    assert_eq!(meta.name(), None);
    assert_eq!(meta.description(), Some("A long hall"));
}

#[test]
fn timestamps_decode_from_epoch_millis() {
    let created = 1_700_000_000_123_i64;
    let root = with_metadata([("TimeCreated", Tag::Long(created))]);
    let meta = extract(&root, SOURCE).unwrap();

    let expected: DateTime<Utc> = DateTime::<Utc>::from_timestamp_millis(created).unwrap();
    assert_eq!(meta.time_created(), Some(expected));
    assert_eq!(meta.time_created_millis(), Some(created));
    assert_eq!(meta.time_modified(), None);
    assert_eq!(meta.time_modified_millis(), None);
}

#[test]
fn far_future_timestamp_is_present() {
    let far = 10_000_000_000_000_000_i64;
    let root = with_metadata([
        ("TimeCreated", Tag::Long(far)),
        ("TimeModified", Tag::Long(i64::MIN)),
    ]);
    let meta = extract(&root, SOURCE).unwrap();

    assert_eq!(meta.time_created_millis(), Some(far));
    assert_eq!(meta.time_modified_millis(), Some(i64::MIN));
}

#[test]
fn int_timestamp_is_absent() {
    let root = with_metadata([("TimeModified", Tag::Int(1000))]);
    let meta = extract(&root, SOURCE).unwrap();
    assert_eq!(meta.time_modified(), None);
    assert_eq!(meta.time_modified_millis(), None);
}

#[test]
fn counts_default_to_zero_on_wrong_type() {
    let root = with_metadata([("TotalBlocks", Tag::Long(120))]);
    let meta = extract(&root, SOURCE).unwrap();
    assert_eq!(meta.total_blocks(), 0);

    let root = with_metadata([("TotalVolume", Tag::Int(60))]);
    assert_eq!(extract(&root, SOURCE).unwrap().total_volume(), 60);
}

#[test]
fn enclosing_size_missing_axis_is_absent() {
    let partial = Compound::new().with("x", Tag::Int(5)).with("y", Tag::Int(4));
    let root = with_metadata([("EnclosingSize", Tag::Compound(partial))]);
    assert_eq!(extract(&root, SOURCE).unwrap().enclosing_size(), None);
}

#[test]
fn enclosing_size_negative_axis_is_absent() {
    let root = with_metadata([("EnclosingSize", Tag::Compound(size(-1, 4, 3)))]);
    assert_eq!(extract(&root, SOURCE).unwrap().enclosing_size(), None);
}

#[test]
fn enclosing_size_mistyped_axis_is_absent() {
    let mistyped = size(5, 4, 3).with("z", Tag::Short(3));
    let root = with_metadata([("EnclosingSize", Tag::Compound(mistyped))]);
    assert_eq!(extract(&root, SOURCE).unwrap().enclosing_size(), None);

    let root = with_metadata([("EnclosingSize", Tag::IntArray(vec![5, 4, 3]))]);
    assert_eq!(extract(&root, SOURCE).unwrap().enclosing_size(), None);
}

#[test]
fn enclosing_size_accepts_zero() {
    let root = with_metadata([("EnclosingSize", Tag::Compound(size(0, 0, 0)))]);
    let size = extract(&root, SOURCE).unwrap().enclosing_size().unwrap();
    assert_eq!(size, EnclosingSize::new(0, 0, 0));
    assert_eq!(size.volume(), 0);
    assert_eq!(EnclosingSize::new(5, 4, 3).volume(), 60);
}

#[test]
fn preview_image_copies_are_independent() {
    let pixels = vec![0xff00_00ff_u32 as i32, 0x00ff_00ff, 0x0000_ffff];
    let mut root = with_metadata([("PreviewImageData", Tag::IntArray(pixels.clone()))]);
    let meta = extract(&root, SOURCE).unwrap();

    let mut first = meta.preview_image_vec().unwrap();
    let second = meta.preview_image_vec().unwrap();
    first[0] = 0;
    assert_ne!(first, second);
    assert_eq!(second, pixels);
    assert_eq!(meta.preview_image(), Some(pixels.as_slice()));

    // The record does not alias the tree it was extracted from.
    root.insert("Metadata", Compound::new());
    assert_eq!(meta.preview_image(), Some(pixels.as_slice()));
}

#[test]
fn preview_image_of_wrong_type_is_absent() {
    let root = with_metadata([("PreviewImageData", Tag::LongArray(vec![1, 2, 3]))]);
    let meta = extract(&root, SOURCE).unwrap();
    assert_eq!(meta.preview_image(), None);
    assert_eq!(meta.preview_image_vec(), None);
}

#[test]
fn empty_metadata_yields_defaults() {
    let root = Compound::new()
        .with("Version", Tag::Int(4))
        .with("Metadata", Compound::new());
    let meta = extract(&root, SOURCE).unwrap();

    assert_eq!(meta.version(), 4);
    assert_eq!(meta.sub_version(), 0);
    assert_eq!(meta.region_count(), 0);
    assert_eq!(meta.total_blocks(), 0);
    assert_eq!(meta.total_volume(), 0);
    assert_eq!(meta.name(), None);
    assert_eq!(meta.enclosing_size(), None);
}
