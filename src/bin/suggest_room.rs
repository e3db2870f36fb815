// Room suggestion CLI
//
// Purpose: Print the suggestion bundle for a room as JSON
// Usage: cargo run --features cli --bin suggest_room -- [ITEMS_JSON] [FURNITURE_TYPE]
//
// ITEMS_JSON is a JSON array of placed items (read from stdin when omitted).
// When FURNITURE_TYPE is given, color advice for it is printed as well.

use std::io::Read;

use anyhow::Context;
use room_suggester::{CatalogLookup, PlacedItem, RoomSuggester, SuggesterConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "room_suggester=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let items_path = args.next();
    let furniture_type = args.next();

    let config = SuggesterConfig::from_env();
    tracing::info!("Configuration:");
    tracing::info!("  ROOM_TABLES_PATH: {:?}", config.tables_path);
    tracing::info!("  ROOM_CATALOG_PATH: {:?}", config.catalog_path);

    let suggester = RoomSuggester::new(config.load_tables()?);
    let catalog = config.load_catalog()?;
    if let Some(catalog) = &catalog {
        tracing::info!("Loaded {} catalog documents", catalog.len());
    }

    let raw = match &items_path {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("reading items from stdin")?;
            buf
        }
    };
    let items: Vec<PlacedItem> = serde_json::from_str(&raw).context("parsing placed items")?;
    tracing::info!("Generating suggestions for {} placed items", items.len());

    let bundle = suggester.generate_full_suggestions(&items, catalog.as_ref().map(|c| c as &dyn CatalogLookup));

    let output = match furniture_type {
        Some(furniture_type) => {
            let advice = suggester.suggest_colors(&bundle.analysis, &furniture_type)?;
            serde_json::json!({ "suggestions": bundle, "color_advice": advice })
        }
        None => serde_json::to_value(&bundle)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
