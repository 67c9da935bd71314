use crate::{
    abstract_trait::cart::{CartStoreTrait, SharedCart},
    domain::cart::Cart,
};
use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc, time::Duration};
use tokio::{sync::Mutex, time::Instant};
use tracing::{debug, info};
use uuid::Uuid;

pub const DEFAULT_CART_IDLE_TIMEOUT: Duration = Duration::from_secs(24 * 60 * 60);

struct Entry {
    cart: SharedCart,
    touched: Instant,
}

/// Process-local carts. Nothing survives a restart, and a cart untouched
/// for longer than the idle timeout is dropped on the next create or lookup.
#[derive(Clone)]
pub struct CartStore {
    carts: Arc<Mutex<HashMap<String, Entry>>>,
    idle_timeout: Duration,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    pub fn new() -> Self {
        Self::with_idle_timeout(DEFAULT_CART_IDLE_TIMEOUT)
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            carts: Arc::new(Mutex::new(HashMap::new())),
            idle_timeout,
        }
    }

    fn is_idle(&self, entry: &Entry) -> bool {
        entry.touched.elapsed() >= self.idle_timeout
    }
}

#[async_trait]
impl CartStoreTrait for CartStore {
    async fn create(&self) -> String {
        let cart_id = Uuid::new_v4().to_string();
        let mut carts = self.carts.lock().await;

        let before = carts.len();
        carts.retain(|_, entry| !self.is_idle(entry));
        let evicted = before - carts.len();
        if evicted > 0 {
            info!("Evicted {evicted} idle carts");
        }

        carts.insert(
            cart_id.clone(),
            Entry {
                cart: Arc::new(Mutex::new(Cart::new())),
                touched: Instant::now(),
            },
        );

        debug!("Cart created: {cart_id}");
        cart_id
    }

    async fn find(&self, cart_id: &str) -> Option<SharedCart> {
        let mut carts = self.carts.lock().await;

        match carts.get_mut(cart_id) {
            Some(entry) if self.is_idle(entry) => {
                carts.remove(cart_id);
                debug!("Cart expired: {cart_id}");
                None
            }
            Some(entry) => {
                entry.touched = Instant::now();
                Some(entry.cart.clone())
            }
            None => {
                debug!("Cart not found: {cart_id}");
                None
            }
        }
    }

    async fn remove(&self, cart_id: &str) -> bool {
        let removed = self.carts.lock().await.remove(cart_id).is_some();

        if removed {
            debug!("Cart removed: {cart_id}");
        }

        removed
    }
}
