//! End-to-end tests for the numbering part: parse a fixture numbering.xml,
//! read and mutate it through the typed model, and serialize it back.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use wordml_numbering::{NumberingError, NumberingPart};

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

fn parsed_part() -> NumberingPart {
    let xml = load_fixture("numbering.xml");
    NumberingPart::from_xml(&xml).unwrap_or_else(|e| panic!("Failed to parse fixture: {e}"))
}

#[test]
fn test_fixture_templates_and_instances() {
    let part = parsed_part();

    let abstract_nums = part.abstract_nums();
    assert_eq!(abstract_nums.len(), 2);
    assert_eq!(abstract_nums[0].nsid(part.tree()).unwrap(), "0419B6C2");
    assert_eq!(
        abstract_nums[0].multi_level_type(part.tree()).unwrap(),
        "hybridMultilevel"
    );
    assert_eq!(abstract_nums[0].levels(part.tree()).len(), 3);
    assert_eq!(
        abstract_nums[1].multi_level_type(part.tree()).unwrap(),
        "singleLevel"
    );

    let nums = part.nums();
    assert_eq!(nums.len(), 2);
    assert_eq!(nums[0].abstract_num_id(part.tree()).unwrap(), 0);
    assert_eq!(nums[1].abstract_num_id(part.tree()).unwrap(), 1);
}

#[test]
fn test_fixture_level_override_round_trip() {
    let part = parsed_part();
    let num = part.num_with_id(2).unwrap();
    let overrides = num.level_overrides(part.tree());
    assert_eq!(overrides.len(), 1);
    assert_eq!(overrides[0].ilvl(part.tree()).unwrap(), 0);
    assert_eq!(overrides[0].start_override(part.tree()).unwrap(), Some(4));
}

#[test]
fn test_add_num_fills_gap_in_parsed_document() {
    let mut part = parsed_part();
    // fixture ids are {1, 2}; remove 1 to open a gap
    let first = part.num_with_id(1).unwrap();
    let root = part.root();
    part.tree_mut().remove_child(root, first.node());

    let added = part.add_num(0).unwrap();
    assert_eq!(added.num_id(part.tree()).unwrap(), 1);
    let next = part.add_num(0).unwrap();
    assert_eq!(next.num_id(part.tree()).unwrap(), 3);
}

#[test]
fn test_added_num_sorts_after_abstract_definitions() {
    let mut part = parsed_part();
    part.add_num(1).unwrap();

    let tags: Vec<String> = part
        .tree()
        .children(part.root())
        .iter()
        .map(|&child| part.tree().tag(child).to_string())
        .collect();
    assert_eq!(
        tags,
        vec!["w:abstractNum", "w:abstractNum", "w:num", "w:num", "w:num"]
    );
}

#[test]
fn test_lookup_of_unknown_num_id_fails() {
    let part = parsed_part();
    let err = part.num_with_id(99).unwrap_err();
    assert!(matches!(err, NumberingError::NumNotFound { num_id: 99 }));
}

#[test]
fn test_serialization_preserves_fixture() {
    let part = parsed_part();
    assert_eq!(part.to_xml(), load_fixture("numbering.xml"));
}

#[test]
fn test_mutation_shows_up_in_serialized_output() {
    let mut part = parsed_part();
    let num = part.num_with_id(1).unwrap();
    num.add_level_override(part.tree_mut(), 1, Some(10), None)
        .unwrap();

    let xml = part.to_xml();
    assert!(xml.contains(r#"<w:lvlOverride w:ilvl="1"><w:startOverride w:val="10"/></w:lvlOverride>"#));
}
