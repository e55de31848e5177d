//! Basic usage example - load the library and add a link item

use folio_library::{LibraryConfig, LibrarySync, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Reads FOLIO_CATALOG_URL, FOLIO_STORAGE_URL, FOLIO_API_KEY, FOLIO_BUCKET
    let config = LibraryConfig::from_env()?;
    let sync = LibrarySync::new(&config)?;

    println!("Loading library from {}", config.catalog_base());
    let items = sync.load_library().await?;

    if items.is_empty() {
        println!("Library is empty.");
    } else {
        println!("Found {} items:", items.len());
        for item in &items {
            println!("  - {} ({})", item.title, item.kind);
        }
    }

    // Link items are session-local; nothing is written remotely
    let link = std::env::args().nth(1);
    if let Some(link) = link {
        let items = sync.add_link_item(&link).await?;
        println!("Added link, library now has {} items", items.len());
    }

    Ok(())
}
