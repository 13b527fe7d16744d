use radicalquiz::{CatalogLoadError, RADICAL_COUNT, RadicalCatalog, glyph_for_index};

#[test]
fn bundled_glyphs_follow_catalog_index() {
    let catalog = RadicalCatalog::builtin();

    for entry in catalog.iter() {
        assert_eq!(Some(entry.glyph), glyph_for_index(entry.index));
        assert_eq!(entry.glyph as u32, 0x2F00 + entry.index as u32);
    }
}

#[test]
fn bundled_catalog_round_trips_through_a_file() {
    let catalog = RadicalCatalog::builtin();
    let radicals: Vec<serde_json::Value> = catalog
        .iter()
        .map(|entry| {
            serde_json::json!({
                "number": entry.number(),
                "meaning": entry.meaning,
                "pinyin": entry.pronunciation,
            })
        })
        .collect();

    let root = tempfile::tempdir().expect("temporary directory should be created");
    let path = root.path().join("radicals.json");
    std::fs::write(&path, serde_json::json!({ "radicals": radicals }).to_string())
        .expect("dataset should be written");

    let reloaded = RadicalCatalog::from_path(&path).expect("dataset should load");
    assert_eq!(&reloaded, catalog);
}

#[test]
fn truncated_dataset_surfaces_entry_count() {
    let error = RadicalCatalog::from_json(br#"{"radicals": []}"#)
        .expect_err("empty dataset should be rejected");

    assert_eq!(
        error,
        CatalogLoadError::WrongEntryCount {
            expected: RADICAL_COUNT,
            found: 0,
        }
    );
}
