use canvas_core::model::{DataValue, MAX_LAYOUT_BLOCKS};
use canvas_registry::BlockType;
use canvas_schema::{
    check_invariants, create_default_layout_schema, sanitize_layout_schema,
    sanitize_layout_schema_with_report,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

#[test]
fn mixed_garbage_keeps_survivors_in_order() {
    let input = json!({
        "version": "3.7",
        "blocks": [
            { "type": "hero" },
            { "type": "bogus" },
            { "id": "x", "type": "links", "title": "My Links", "visible": false }
        ]
    });

    let (schema, report) = sanitize_layout_schema_with_report(&input, None);

    assert_eq!(schema.version, 4);
    assert!(!schema.updated_at.is_empty());
    assert_eq!(schema.blocks.len(), 2);

    let hero = &schema.blocks[0];
    assert_eq!(hero.block_type, BlockType::Hero);
    assert!(hero.id.starts_with("hero-"));
    assert_eq!(hero.title, "Hero");
    assert_eq!(hero.position, 0);
    assert!(hero.visible);

    let links = &schema.blocks[1];
    assert_eq!(links.block_type, BlockType::Links);
    assert_eq!(links.id, "x");
    assert_eq!(links.title, "My Links");
    assert_eq!(links.position, 1);
    assert!(!links.visible);

    assert_eq!(report.blocks_dropped_unknown_type, 1);
    assert_eq!(report.ids_regenerated, 1);
    assert_eq!(report.titles_defaulted, 1);
    assert!(report.updated_at_stamped);
    assert!(!report.version_repaired);
    assert!(!report.links_block_appended);
}

#[test]
fn non_object_input_becomes_the_factory_default() {
    for input in [json!(null), json!([1, 2, 3]), json!("schema"), json!(7)] {
        let (schema, report) = sanitize_layout_schema_with_report(&input, None);
        assert!(report.replaced_with_default);

        let default = create_default_layout_schema(None);
        assert_eq!(schema.version, default.version);
        assert_eq!(schema.blocks.len(), 8);

        // Ids and timestamps are fresh; compare the deterministic parts.
        for (got, want) in schema.blocks.iter().zip(default.blocks.iter()) {
            assert_eq!(got.block_type, want.block_type);
            assert_eq!(got.title, want.title);
            assert_eq!(got.visible, want.visible);
            assert_eq!(got.position, want.position);
            assert!(got.data.is_empty());
        }
    }
}

#[test]
fn version_normalization() {
    let version_of = |v: Value| {
        let input = json!({ "version": v, "blocks": [{ "type": "links", "id": "l1" }] });
        sanitize_layout_schema(&input, None).version
    };

    assert_eq!(version_of(json!(3)), 3);
    assert_eq!(version_of(json!(2.4)), 2);
    assert_eq!(version_of(json!("3.7")), 4);
    assert_eq!(version_of(json!(0.6)), 1);
    assert_eq!(version_of(json!(0)), 1);
    assert_eq!(version_of(json!(-5)), 1);
    assert_eq!(version_of(json!("abc")), 1);
    assert_eq!(version_of(json!(null)), 1);
    assert_eq!(version_of(json!([2])), 1);
    assert_eq!(version_of(json!(1e300)), u32::MAX);
}

#[test]
fn updated_at_is_kept_only_when_a_non_empty_string() {
    let schema = sanitize_layout_schema(
        &json!({ "updatedAt": "2026-08-06T10:00:00.000Z", "blocks": [{ "type": "links" }] }),
        None,
    );
    assert_eq!(schema.updated_at, "2026-08-06T10:00:00.000Z");

    for bad in [json!(""), json!(42), json!(null), json!({})] {
        let schema =
            sanitize_layout_schema(&json!({ "updatedAt": bad, "blocks": [{ "type": "links" }] }), None);
        assert!(!schema.updated_at.is_empty());
    }
}

#[test]
fn visible_uses_truthiness_and_defaults_to_true() {
    let visible_of = |v: Value| {
        let input = json!({ "blocks": [{ "type": "links", "visible": v }] });
        sanitize_layout_schema(&input, None).blocks[0].visible
    };

    assert!(!visible_of(json!(false)));
    assert!(!visible_of(json!(0)));
    assert!(!visible_of(json!("")));
    assert!(!visible_of(json!(null)));
    assert!(visible_of(json!(true)));
    assert!(visible_of(json!(1)));
    assert!(visible_of(json!("yes")));
    assert!(visible_of(json!({})));
    assert!(visible_of(json!([])));

    let input = json!({ "blocks": [{ "type": "links" }] });
    assert!(sanitize_layout_schema(&input, None).blocks[0].visible);
}

#[test]
fn data_keeps_primitive_entries_only() {
    let input = json!({
        "blocks": [{
            "type": "embed",
            "id": "e1",
            "data": {
                "url": "https://example.com",
                "height": 320,
                "autoplay": false,
                "caption": null,
                "nested": { "a": 1 },
                "list": [1, 2]
            }
        }]
    });

    let (schema, report) = sanitize_layout_schema_with_report(&input, None);
    let data = &schema.blocks[0].data;

    assert_eq!(data.len(), 4);
    assert_eq!(data["url"], DataValue::String("https://example.com".to_string()));
    assert_eq!(data["autoplay"], DataValue::Bool(false));
    assert_eq!(data["caption"], DataValue::Null);
    assert!(data.contains_key("height"));
    assert!(!data.contains_key("nested"));
    assert!(!data.contains_key("list"));
    assert_eq!(report.data_entries_dropped, 2);

    // Non-object data defaults to empty.
    for bad in [json!([1]), json!("x"), json!(9)] {
        let input = json!({ "blocks": [{ "type": "embed", "data": bad }] });
        assert!(sanitize_layout_schema(&input, None).blocks[0].data.is_empty());
    }
}

#[test]
fn duplicate_and_blank_ids_are_regenerated() {
    let input = json!({
        "blocks": [
            { "id": "dup", "type": "text" },
            { "id": "dup", "type": "image" },
            { "id": "   ", "type": "divider" },
            { "id": "  kept  ", "type": "links" }
        ]
    });

    let (schema, report) = sanitize_layout_schema_with_report(&input, None);

    assert_eq!(schema.blocks[0].id, "dup");
    assert_ne!(schema.blocks[1].id, "dup");
    assert!(schema.blocks[1].id.starts_with("image-"));
    assert!(schema.blocks[2].id.starts_with("divider-"));
    assert_eq!(schema.blocks[3].id, "kept");
    assert_eq!(report.ids_regenerated, 2);

    check_invariants(&schema).expect("sanitized schema must satisfy invariants");
}

#[test]
fn overflow_is_truncated_preserving_first_seen_blocks() {
    let blocks: Vec<Value> = (0..30)
        .map(|i| json!({ "id": format!("b{i}"), "type": "text" }))
        .collect();
    let input = json!({ "blocks": blocks });

    let (schema, report) = sanitize_layout_schema_with_report(&input, None);

    assert_eq!(schema.blocks.len(), MAX_LAYOUT_BLOCKS);
    assert_eq!(report.blocks_truncated, 6);
    assert_eq!(schema.blocks[0].id, "b0");
    assert_eq!(schema.blocks[23].id, "b23");

    // The cap is already reached, so the missing links block is NOT restored.
    assert!(!report.links_block_appended);
    assert!(schema
        .blocks
        .iter()
        .all(|b| b.block_type != BlockType::Links));

    check_invariants(&schema).expect("at-capacity schema is still valid");
}

#[test]
fn missing_links_block_is_restored_below_capacity() {
    let input = json!({ "blocks": [{ "id": "t1", "type": "text" }] });

    let (schema, report) = sanitize_layout_schema_with_report(&input, None);

    assert_eq!(schema.blocks.len(), 2);
    assert!(report.links_block_appended);

    let links = &schema.blocks[1];
    assert_eq!(links.block_type, BlockType::Links);
    assert_eq!(links.title, "Link List");
    assert!(links.visible);
    assert_eq!(links.position, 1);
}

#[test]
fn empty_or_unusable_blocks_yield_a_lone_links_block() {
    for input in [
        json!({}),
        json!({ "blocks": [] }),
        json!({ "blocks": "nope" }),
        json!({ "blocks": [17, "x", null] }),
    ] {
        let (schema, report) = sanitize_layout_schema_with_report(&input, None);
        assert_eq!(schema.blocks.len(), 1);
        assert_eq!(schema.blocks[0].block_type, BlockType::Links);
        assert!(report.links_block_appended);
        check_invariants(&schema).expect("restored schema is valid");
    }
}

#[test]
fn titles_are_trimmed_and_unicode_normalized() {
    let input = json!({
        "blocks": [
            { "id": "a", "type": "links", "title": "  Cafe\u{0301} Links  " },
            { "id": "b", "type": "text", "title": "   " }
        ]
    });

    let schema = sanitize_layout_schema(&input, None);
    assert_eq!(schema.blocks[0].title, "Caf\u{00e9} Links");
    assert_eq!(schema.blocks[1].title, "Text");
}

#[test]
fn stored_positions_are_ignored() {
    let input = json!({
        "blocks": [
            { "id": "a", "type": "links", "position": 9 },
            { "id": "b", "type": "text", "position": 0 }
        ]
    });

    let schema = sanitize_layout_schema(&input, None);
    assert_eq!(schema.blocks[0].id, "a");
    assert_eq!(schema.blocks[0].position, 0);
    assert_eq!(schema.blocks[1].id, "b");
    assert_eq!(schema.blocks[1].position, 1);
}

#[test]
fn clean_input_reports_no_repairs() {
    let schema = create_default_layout_schema(None);
    let value = serde_json::to_value(&schema).expect("schema serializes");

    let (resanitized, report) = sanitize_layout_schema_with_report(&value, None);

    assert!(report.is_clean(), "clean input must not be repaired: {report:?}");
    assert_eq!(resanitized, schema);
}

#[test]
fn seeded_default_round_trips_through_the_sanitizer() {
    let mut seed = canvas_schema::LayoutSeed::default();
    seed.links
        .insert("instagram".to_string(), "https://instagram.com/u".to_string());
    seed.links
        .insert("tidal".to_string(), "https://tidal.com/u".to_string());

    let schema = create_default_layout_schema(Some(&seed));
    let value = serde_json::to_value(&schema).expect("schema serializes");

    assert_eq!(sanitize_layout_schema(&value, Some(&seed)), schema);
}
