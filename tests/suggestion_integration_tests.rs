//! Suggestion Integration Tests
//!
//! Exercises the public entry points end to end: analysis, the full
//! suggestion bundle with and without a catalog collaborator, and color
//! advice. Randomness comes from seeded `StdRng` instances, so assertions
//! check membership and distribution rather than exact picks.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashMap;
use serde_json::{json, Value};

use room_suggester::suggestions::layout::{COFFEE_TABLE_TIP, LIGHTING_TIP, MORE_FURNITURE_TIP};
use room_suggester::{
    CatalogError, CatalogLookup, CatalogQuery, CatalogTables, Category, ColorPalette, ColorRole, InMemoryCatalog,
    PaletteRole, PlacedItem, RoomSuggester, Style, SuggestionError,
};

fn items(names: &[&str]) -> Vec<PlacedItem> {
    names.iter().map(|n| PlacedItem::named(*n)).collect()
}

// ============================================================================
// Section 1: End to end without a catalog
// ============================================================================

#[test]
fn test_single_modern_sofa_bundle() {
    let suggester = RoomSuggester::default();
    let mut rng = StdRng::seed_from_u64(2024);

    let bundle = suggester.generate_full_suggestions_with_rng(&items(&["modern sofa"]), None, &mut rng);

    let analysis = &bundle.analysis;
    assert_eq!(analysis.total_items, 1);
    assert_eq!(analysis.count(Category::Seating), 1);
    assert_eq!(analysis.categories.len(), 1);
    assert_eq!(analysis.missing_essentials, vec![Category::Tables, Category::Lighting]);
    assert_eq!(analysis.style_hints.as_slice(), &[Style::Modern]);

    let categories: Vec<Category> = bundle.furniture_suggestions.iter().map(|s| s.category).collect();
    assert_eq!(categories, vec![Category::Tables, Category::Lighting]);

    assert_eq!(bundle.color_suggestions.len(), 3);
    assert_eq!(bundle.layout_suggestions, vec![COFFEE_TABLE_TIP, LIGHTING_TIP, MORE_FURNITURE_TIP]);
    assert_eq!(bundle.style_recommendations.len(), 3);
    assert_eq!(
        bundle.style_recommendations[0],
        "Based on your current setup, consider modern style elements"
    );
    assert!(bundle.suggested_models.is_empty());
}

#[test]
fn test_color_count_thresholds() {
    let suggester = RoomSuggester::default();
    let mut rng = StdRng::seed_from_u64(7);
    let pool = ["sofa", "desk", "floor lamp", "rug", "cabinet", "plant", "bench"];

    for total in 0..=pool.len() {
        let bundle = suggester.generate_full_suggestions_with_rng(&items(&pool[..total]), None, &mut rng);
        let expected = match total {
            0..=2 => 3,
            3..=4 => 4,
            _ => 5,
        };
        assert_eq!(bundle.color_suggestions.len(), expected, "total_items = {}", total);
        if expected >= 4 {
            assert_eq!(bundle.color_suggestions[3].role, ColorRole::Secondary);
        }
        if expected == 5 {
            assert_eq!(bundle.color_suggestions[4].role, ColorRole::Highlight);
        }
    }
}

#[test]
fn test_coffee_table_tip_iff_seating_without_tables() {
    let suggester = RoomSuggester::default();
    let rooms: &[&[&str]] = &[
        &["sofa"],
        &["sofa", "coffee table"],
        &["floor lamp"],
        &["armchair", "bench", "pendant light", "rug"],
        &[],
    ];

    for names in rooms {
        let bundle = suggester.generate_full_suggestions(&items(names), None);
        let fires = bundle.layout_suggestions.iter().any(|s| s == COFFEE_TABLE_TIP);
        let expected =
            bundle.analysis.count(Category::Seating) > 0 && bundle.analysis.count(Category::Tables) == 0;
        assert_eq!(fires, expected, "room = {:?}", names);
    }
}

#[test]
fn test_dominant_style_drives_palette() {
    let suggester = RoomSuggester::default();
    let mut rng = StdRng::seed_from_u64(99);
    let bundle = suggester.generate_full_suggestions_with_rng(
        &items(&["Classic Dresser", "minimal lamp"]),
        None,
        &mut rng,
    );

    assert_eq!(bundle.analysis.style_hints.as_slice(), &[Style::Traditional, Style::Minimalist]);
    let palette = suggester.tables().palette(Style::Traditional);
    assert!(palette.colors(PaletteRole::Primary).contains(&bundle.color_suggestions[0].color));
    assert!(bundle.color_suggestions[0].description.contains("traditional"));
}

#[test]
fn test_gap_fill_covers_whole_vocabulary() {
    let suggester = RoomSuggester::default();
    let mut rng = StdRng::seed_from_u64(12345);
    let mut seen: HashSet<String> = HashSet::new();

    for _ in 0..400 {
        let bundle = suggester.generate_full_suggestions_with_rng(&[], None, &mut rng);
        assert_eq!(bundle.furniture_suggestions.len(), 3);
        for suggestion in bundle.furniture_suggestions {
            seen.insert(suggestion.item);
        }
    }

    let vocabulary = suggester.tables().vocabulary();
    let essentials: HashSet<String> = Category::ESSENTIALS
        .iter()
        .flat_map(|&c| vocabulary.items(c).iter().cloned())
        .collect();
    assert_eq!(seen, essentials);
}

// ============================================================================
// Section 2: Catalog enrichment
// ============================================================================

fn sample_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(vec![
        json!({"_id": "t1", "name": "Oak Coffee Table", "category": "furniture-tables",
               "thumbnailUrl": "thumbs/t1.png", "fileUrl": "models/t1.glb"}),
        json!({"_id": "t2", "name": "Glass Desk", "category": "furniture-tables"}),
        json!({"_id": "t3", "name": "Side Table", "category": "furniture-tables"}),
        json!({"_id": "t4", "name": "Dining Table", "category": "furniture-tables"}),
        json!({"_id": "l1", "name": "Arc Floor Lamp", "category": "furniture-lighting"}),
        json!({"_id": "l2", "name": "Brass Sconce", "tags": ["lighting"]}),
        json!({"_id": "s1", "name": "Velvet Sofa", "category": "furniture-seating"}),
    ])
}

#[test]
fn test_catalog_enrichment_per_missing_category() {
    let suggester = RoomSuggester::default();
    let catalog = sample_catalog();
    let mut rng = StdRng::seed_from_u64(5);

    let bundle = suggester.generate_full_suggestions_with_rng(&items(&["modern sofa"]), Some(&catalog), &mut rng);

    let table_models: Vec<_> = bundle
        .suggested_models
        .iter()
        .filter(|m| m.reason == "Recommended tables to complete your design")
        .collect();
    let lighting_models: Vec<_> = bundle
        .suggested_models
        .iter()
        .filter(|m| m.reason == "Recommended lighting to complete your design")
        .collect();

    assert_eq!(table_models.len(), 3);
    assert_eq!(lighting_models.len(), 2);
    assert_eq!(bundle.suggested_models.len(), 5);
    assert!(bundle.suggested_models.iter().all(|m| m.id != "s1"));

    assert_eq!(table_models[0].id, "t1");
    assert_eq!(table_models[0].thumbnail_url, "thumbs/t1.png");
    assert_eq!(table_models[0].file_url, "models/t1.glb");
}

struct RecordingCatalog {
    queries: Mutex<Vec<CatalogQuery>>,
}

impl CatalogLookup for RecordingCatalog {
    fn find_models(&self, query: &CatalogQuery) -> Result<Vec<Value>, CatalogError> {
        self.queries.lock().unwrap().push(query.clone());
        Ok(Vec::new())
    }
}

#[test]
fn test_one_query_per_missing_category() {
    let suggester = RoomSuggester::default();
    let catalog = RecordingCatalog { queries: Mutex::new(Vec::new()) };
    let mut rng = StdRng::seed_from_u64(8);

    let bundle = suggester.generate_full_suggestions_with_rng(&items(&["rug"]), Some(&catalog), &mut rng);

    let queries = catalog.queries.lock().unwrap();
    assert_eq!(queries.len(), 3);
    let patterns: Vec<&str> = queries.iter().map(|q| q.category_pattern.as_str()).collect();
    assert_eq!(patterns, vec!["furniture-seating", "furniture-tables", "furniture-lighting"]);

    for (query, suggestion) in queries.iter().zip(&bundle.furniture_suggestions) {
        assert_eq!(query.item_pattern, suggestion.item.replace('_', " "));
        assert_eq!(query.tags, vec![query.item_pattern.clone(), suggestion.category.to_string()]);
        assert_eq!(query.limit, 3);
    }
}

#[test]
fn test_failing_catalog_is_contained() {
    let suggester = RoomSuggester::default();
    let failing = |_: &CatalogQuery| -> Result<Vec<Value>, CatalogError> {
        Err(CatalogError::Lookup("connection refused".to_string()))
    };
    let mut rng = StdRng::seed_from_u64(13);

    let bundle = suggester.generate_full_suggestions_with_rng(&items(&["modern sofa"]), Some(&failing), &mut rng);

    assert!(bundle.suggested_models.is_empty());
    assert_eq!(bundle.furniture_suggestions.len(), 2);
    assert_eq!(bundle.color_suggestions.len(), 3);
    assert_eq!(bundle.layout_suggestions.len(), 3);
}

#[test]
#[should_panic(expected = "catalog backend crashed")]
fn test_panicking_catalog_propagates() {
    let suggester = RoomSuggester::default();
    let panicking = |_: &CatalogQuery| -> Result<Vec<Value>, CatalogError> { panic!("catalog backend crashed") };
    let mut rng = StdRng::seed_from_u64(17);

    suggester.generate_full_suggestions_with_rng(&items(&["sofa"]), Some(&panicking), &mut rng);
}

#[test]
fn test_malformed_records_only_affect_their_category() {
    let suggester = RoomSuggester::default();
    let catalog = |query: &CatalogQuery| -> Result<Vec<Value>, CatalogError> {
        if query.category_pattern == "furniture-tables" {
            Ok(vec![json!({"_id": "t1"}), json!({"name": "missing id"})])
        } else {
            Ok(vec![json!({"_id": "l1", "name": "Lamp"})])
        }
    };
    let mut rng = StdRng::seed_from_u64(21);

    let bundle = suggester.generate_full_suggestions_with_rng(&items(&["sofa"]), Some(&catalog), &mut rng);

    assert_eq!(bundle.suggested_models.len(), 1);
    assert_eq!(bundle.suggested_models[0].id, "l1");
    assert_eq!(bundle.suggested_models[0].reason, "Recommended lighting to complete your design");
}

#[test]
fn test_bundle_serializes_wire_names() {
    let suggester = RoomSuggester::default();
    let catalog = sample_catalog();
    let bundle = suggester.generate_full_suggestions(&items(&["sofa"]), Some(&catalog));
    let value = serde_json::to_value(&bundle).unwrap();

    assert_eq!(value["color_suggestions"][0]["type"], "primary");
    assert_eq!(value["furniture_suggestions"][0]["category"], "tables");
    assert!(value["suggested_models"][0]["_id"].is_string());
    assert!(value["suggested_models"][0].get("thumbnailUrl").is_some());
    assert_eq!(value["analysis"]["total_items"], 1);
}

// ============================================================================
// Section 3: Color advice
// ============================================================================

#[test]
fn test_confidence_distribution() {
    let suggester = RoomSuggester::default();
    let analysis = suggester.analyze_current_furniture(&items(&["sofa"]));
    let mut rng = StdRng::seed_from_u64(77);

    let samples: Vec<f64> = (0..2000)
        .map(|_| suggester.suggest_colors_with_rng(&analysis, "sofa", &mut rng).unwrap().confidence)
        .collect();

    assert!(samples.iter().all(|c| (0.8..0.95).contains(c)));
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    assert_abs_diff_eq!(mean, 0.875, epsilon = 0.01);
}

#[test]
fn test_insufficient_accent_palette_surfaces() {
    let mut palettes = FxHashMap::default();
    palettes.insert(
        Style::Modern,
        ColorPalette::new(
            vec!["#111111".to_string()],
            vec!["#222222".to_string()],
            vec!["#333333".to_string()],
        ),
    );
    let tables = CatalogTables::new(Default::default(), palettes).unwrap();
    let suggester = RoomSuggester::new(Arc::new(tables));
    let analysis = suggester.analyze_current_furniture(&items(&["sofa"]));

    let err = suggester.suggest_colors(&analysis, "sofa").unwrap_err();
    assert!(matches!(err, SuggestionError::InsufficientPaletteSize { available: 1, .. }));

    // The bundle itself never samples without replacement
    let bundle = suggester.generate_full_suggestions(&items(&["sofa"]), None);
    assert_eq!(bundle.color_suggestions.len(), 3);
}

// ============================================================================
// Section 4: Sharing across threads
// ============================================================================

#[test]
fn test_suggester_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RoomSuggester>();
    assert_send_sync::<InMemoryCatalog>();

    let suggester = Arc::new(RoomSuggester::default());
    let catalog = Arc::new(sample_catalog());

    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            let suggester = Arc::clone(&suggester);
            let catalog = Arc::clone(&catalog);
            std::thread::spawn(move || {
                let mut rng = StdRng::seed_from_u64(seed);
                let lookup: &dyn CatalogLookup = &*catalog;
                suggester.generate_full_suggestions_with_rng(&items(&["sofa"]), Some(lookup), &mut rng)
            })
        })
        .collect();

    for handle in handles {
        let bundle = handle.join().unwrap();
        assert_eq!(bundle.furniture_suggestions.len(), 2);
        assert_eq!(bundle.suggested_models.len(), 5);
    }
}
