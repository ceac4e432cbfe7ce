//! Browse the catalogue from the command line
//!
//! Usage: cargo run -p shop-client --example browse -- [genre] [sort] [page]
//! e.g.   cargo run -p shop-client --example browse -- FA price 2

use std::sync::Arc;

use shop_client::{BrowseController, BrowseStatus, ClientConfig, ProductCard, logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init_logger("shop_client=info", false)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let genre = args.first().map(String::as_str);
    let sort = args.get(1).map(String::as_str);
    let page: Option<u32> = args.get(2).map(|p| p.parse()).transpose()?;

    let config = ClientConfig::from_env()?;
    let api = Arc::new(config.build_http_client()?);
    let browse = BrowseController::from_config(api, &config);

    match browse.fetch_genre_choices().await {
        Ok(genres) => {
            let codes: Vec<&str> = genres.iter().map(|g| g.code.as_str()).collect();
            tracing::info!("Genres: {}", codes.join(", "));
        }
        Err(e) => tracing::warn!("No genre choices: {e}"),
    }

    browse.initialize().await;
    if genre.is_some() {
        browse.set_filter(genre).await;
    }
    if let Some(sort) = sort {
        browse.set_sort(sort).await;
    }
    if let Some(page) = page {
        browse.set_page(page).await?;
    }

    let view = browse.result();
    if view.status == BrowseStatus::Failed {
        if let Some(err) = &view.last_error {
            anyhow::bail!("browse failed: {}", err.message);
        }
    }

    println!(
        "Page {}/{} ({} items, filter={:?}, sort={:?})",
        view.page, view.total_pages, view.total_items, view.filter, view.sort
    );
    for card in view.items.iter().map(ProductCard::from) {
        println!(
            "  [{}] {} by {} - {}{}",
            card.genre,
            card.title,
            card.author.as_deref().unwrap_or("unknown"),
            card.price_label,
            card.rating_label
                .map(|r| format!(" ({r}/10)"))
                .unwrap_or_default()
        );
    }

    Ok(())
}
