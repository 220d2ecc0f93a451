//! LinkVault — a local-first bookmark manager core with metadata enrichment.
//!
//! Entry point: runs an interactive console demo walking through each
//! component. A real presentation layer would consume the library crate
//! the same way.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║               LinkVault v{} — Demo Mode                   ║", env!("CARGO_PKG_VERSION"));
    println!("║        Local-first bookmark manager core                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_store();
    demo_collection();
    demo_views();
    demo_form_session();
    demo_import_export();
    demo_enrichment_fallbacks();
    demo_app_core();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

/// Snapshot path under the OS temp dir so the demo never touches real data.
fn demo_snapshot_path(tag: &str) -> String {
    std::env::temp_dir()
        .join(format!("linkvault-demo-{}-{}.json", std::process::id(), tag))
        .to_string_lossy()
        .to_string()
}

fn demo_store() {
    use linkvault::store::snapshot::{SnapshotStore, SnapshotStoreTrait};
    section("Snapshot Store");

    let store = SnapshotStore::new(Some(demo_snapshot_path("store")));
    println!("  Snapshot path: {}", store.path());
    println!("  Fresh load: {} bookmarks", store.load().len());
}

fn demo_collection() {
    use linkvault::managers::collection_manager::{CollectionManager, CollectionManagerTrait};
    use linkvault::store::snapshot::SnapshotStore;
    use linkvault::types::bookmark::{BookmarkDraft, Category};

    section("Bookmark Collection");

    let store = SnapshotStore::new(Some(demo_snapshot_path("collection")));
    let mut collection = CollectionManager::new(store);

    let rust = collection
        .add(&BookmarkDraft {
            url: "rust-lang.org".to_string(),
            title: "Rust".to_string(),
            category: Category::Dev,
            tags: vec!["lang".to_string()],
            ..Default::default()
        })
        .expect("add should succeed");
    println!("  Added '{}' → {}", rust.title, rust.url);

    let dup = collection.add(&BookmarkDraft {
        url: "https://rust-lang.org".to_string(),
        ..Default::default()
    });
    println!("  Duplicate URL rejected: {}", dup.unwrap_err());

    collection.toggle_favorite(&rust.id);
    println!(
        "  Favorite toggled: {}",
        collection.get(&rust.id).unwrap().is_favorite
    );
    println!("  Collection size: {}", collection.len());
}

fn demo_views() {
    use linkvault::managers::collection_manager::{CollectionManager, CollectionManagerTrait};
    use linkvault::services::view_pipeline::{category_options, derive_view};
    use linkvault::store::snapshot::SnapshotStore;
    use linkvault::types::bookmark::{BookmarkDraft, Category};
    use linkvault::types::view::{CategoryFilter, SortOrder};

    section("Derived Views");

    let store = SnapshotStore::new(Some(demo_snapshot_path("views")));
    let mut collection = CollectionManager::new(store);
    for (url, title, category) in [
        ("https://docs.rs", "Docs.rs", Category::Dev),
        ("https://news.ycombinator.com", "Hacker News", Category::News),
        ("https://figma.com", "Figma", Category::Design),
    ] {
        collection
            .add(&BookmarkDraft {
                url: url.to_string(),
                title: title.to_string(),
                category,
                ..Default::default()
            })
            .expect("add should succeed");
    }

    let dev = derive_view(
        collection.all(),
        &CategoryFilter::Category(Category::Dev),
        "",
        SortOrder::Alpha,
    );
    println!("  Dev category: {} result(s)", dev.len());

    let search = derive_view(collection.all(), &CategoryFilter::All, "news", SortOrder::DateDesc);
    println!("  Search 'news': {} result(s)", search.len());

    let options = category_options(collection.all());
    println!(
        "  Filter options: {:?} …",
        options.iter().take(4).map(|o| o.label()).collect::<Vec<_>>()
    );
}

fn demo_form_session() {
    use linkvault::managers::collection_manager::CollectionManager;
    use linkvault::managers::form_manager::{FormManager, FormManagerTrait};
    use linkvault::store::snapshot::SnapshotStore;

    section("Form/Edit Session");

    let store = SnapshotStore::new(Some(demo_snapshot_path("form")));
    let mut collection = CollectionManager::new(store);
    let mut form = FormManager::new();

    form.open_create();
    form.draft_mut().url = "example.com".to_string();
    form.draft_mut().tags_input = "demo, , sample ".to_string();

    let generation = form.on_url_blur();
    println!("  Enrichment armed on URL blur: {:?}", generation);
    println!("  Enrichment in progress: {}", form.enrichment_in_progress());

    let saved = form.save(&mut collection).expect("save should succeed");
    println!("  Saved '{}' with tags {:?}", saved.title, saved.tags);
}

fn demo_import_export() {
    use linkvault::managers::collection_manager::{CollectionManager, CollectionManagerTrait};
    use linkvault::services::import_export::{apply_import, export_json, EXPORT_FILE_NAME};
    use linkvault::store::snapshot::SnapshotStore;
    use linkvault::types::bookmark::BookmarkDraft;

    section("Import/Export");

    let store = SnapshotStore::new(Some(demo_snapshot_path("import")));
    let mut collection = CollectionManager::new(store);
    collection
        .add(&BookmarkDraft {
            url: "https://example.com".to_string(),
            ..Default::default()
        })
        .expect("add should succeed");

    let exported = export_json(collection.all()).expect("export should succeed");
    println!("  Exported {} byte(s) as {}", exported.len(), EXPORT_FILE_NAME);

    let imported = apply_import(&mut collection, &exported).expect("import should succeed");
    println!("  Re-imported {} record(s)", imported);

    let rejected = apply_import(&mut collection, "{\"a\":1}");
    println!("  Non-array import rejected: {}", rejected.unwrap_err());
    println!("  Collection still has {} record(s)", collection.len());
}

fn demo_enrichment_fallbacks() {
    use linkvault::services::enrichment_client::favicon_for;
    use linkvault::types::bookmark::{host_of, normalize_url, resolve_title};

    section("Enrichment Fallbacks");

    let normalized = normalize_url("example.com/page");
    println!("  Normalized: {}", normalized);
    println!("  Host: {:?}", host_of(&normalized));
    println!("  Title fallback: {}", resolve_title("", &normalized));
    println!("  Favicon: {}", favicon_for("example.com"));
    println!("  (live lookups run against the metadata service at runtime)");
}

fn demo_app_core() {
    use linkvault::app::App;
    use linkvault::managers::collection_manager::CollectionManagerTrait;
    use linkvault::managers::form_manager::FormManagerTrait;

    section("App Core");

    let mut app = App::new(Some(demo_snapshot_path("app"))).expect("app should initialize");

    app.form.open_create();
    app.form.draft_mut().url = "https://blog.rust-lang.org".to_string();
    let saved = app.form.save(&mut app.collection).expect("save should succeed");
    println!("  Saved through the form: {}", saved.title);
    println!("  Collection size at shutdown: {}", app.collection.len());

    app.shutdown();
}
