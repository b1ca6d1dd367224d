//! lemon-app: headless shell of the Little Lemon ordering app.
//!
//! Opens the local database, makes sure the menu cache is populated from the
//! remote catalog, and reports what the home screen would show.

mod config;

use std::sync::Arc;

use lemon_db::queries::profile;
use lemon_ingest::{Coordinator, HttpCatalog, MenuStore};
use lemon_types::{image_url, section_label, DEFAULT_SECTIONS};
use tracing::{error, info, warn};

use crate::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.log_level)),
        )
        .init();

    info!("Little Lemon starting");

    // 1. Open database
    let data_dir = config.data_dir();
    std::fs::create_dir_all(&data_dir)?;
    let store = MenuStore::open(&config.db_path())?;

    // 2. Session
    {
        let db = store.connection();
        let db = db.lock().await;
        match profile::load_profile(&db)? {
            Some(user) => info!("Signed in as {} ({})", user.first_name, user.initials()),
            None => info!("No profile stored, onboarding required"),
        }
    }

    // 3. Populate the menu cache
    let client = reqwest::Client::builder()
        .timeout(config.fetch_timeout())
        .build()?;
    let source = Arc::new(HttpCatalog::with_client(client, config.catalog.url.clone()));
    let coordinator = Coordinator::new(store, source, config.fetch_timeout());

    let menu = match coordinator.ensure_populated().await {
        Ok(menu) => menu,
        Err(e) if e.is_fetch_fault() => {
            warn!("Menu unavailable: {e}");
            Vec::new()
        }
        Err(e) => {
            error!("Local storage failed: {e}");
            return Err(e.into());
        }
    };
    info!("Menu holds {} items", menu.len());

    // 4. Home screen: no filters selected, empty search
    let selections = [false; DEFAULT_SECTIONS.len()];
    for (i, section) in DEFAULT_SECTIONS.iter().enumerate() {
        let mut only = selections;
        only[i] = true;
        let items = coordinator.query("", &only, &DEFAULT_SECTIONS).await?;
        info!("{}: {} items", section_label(section), items.len());
    }

    for item in coordinator.query("", &selections, &DEFAULT_SECTIONS).await? {
        info!(
            "{} ${} [{}] {}",
            item.name,
            item.price,
            item.category,
            image_url(&config.catalog.image_base_url, &item.image)
        );
    }

    info!("Little Lemon stopped");
    Ok(())
}
