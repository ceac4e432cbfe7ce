//! Cart operations
//!
//! Adding an item posts to the backend and, on success, tells every
//! subscriber to refresh its view of the cart.

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::{ClientError, ClientResult, StoreApi};

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Cart change notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// The cart gained an item and should be reloaded
    Refresh { slug: String },
}

/// Add-to-cart service
pub struct CartService<A: StoreApi> {
    api: Arc<A>,
    events: broadcast::Sender<CartEvent>,
}

impl<A: StoreApi> CartService<A> {
    pub fn new(api: Arc<A>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { api, events }
    }

    /// Receive cart notifications
    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.events.subscribe()
    }

    /// Add one unit of the item identified by `slug`
    pub async fn add_to_cart(&self, slug: &str) -> ClientResult<()> {
        let slug = slug.trim();
        if slug.is_empty() {
            return Err(ClientError::Validation("slug must not be empty".into()));
        }

        if let Err(e) = self.api.add_to_cart(slug).await {
            tracing::warn!(slug, error = %e, "Add to cart failed");
            return Err(e);
        }

        tracing::info!(slug, "Item added to cart");
        // No subscribers is fine
        let _ = self.events.send(CartEvent::Refresh {
            slug: slug.to_string(),
        });
        Ok(())
    }
}
