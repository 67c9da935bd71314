use crate::{
    abstract_trait::cart::{CartServiceTrait, DynCartStore, SharedCart},
    domain::{
        cart::{CheckoutDetails, DeliveryOption},
        requests::{AddToCartRequest, CheckoutRequest},
        response::{ApiResponse, CartResponse, CheckoutResponse, ProductResponse},
    },
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use shared::{
    abstract_trait::DynProductTable,
    errors::ServiceError,
    utils::{Method, Metrics, OperationTracer, TracingContext},
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

#[derive(Clone)]
pub struct CartService {
    store: DynCartStore,
    products: DynProductTable,
    tracer: OperationTracer,
}

impl CartService {
    pub fn new(
        store: DynCartStore,
        products: DynProductTable,
        metrics: Arc<Mutex<Metrics>>,
    ) -> Self {
        let tracer = OperationTracer::new("cart_service", "cart-service", metrics);

        Self {
            store,
            products,
            tracer,
        }
    }

    async fn open(
        &self,
        cart_id: &str,
        tracing_ctx: &TracingContext,
        method: Method,
    ) -> Result<SharedCart, ServiceError> {
        match self.store.find(cart_id).await {
            Some(cart) => Ok(cart),
            None => {
                self.tracer
                    .error(tracing_ctx, method, "Cart not found")
                    .await;
                Err(ServiceError::NotFound(format!("Cart {cart_id} not found")))
            }
        }
    }

    async fn fail<T>(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        err: impl Into<ServiceError>,
    ) -> Result<T, ServiceError> {
        let err = err.into();
        error!("Cart operation failed: {err}");
        self.tracer
            .error(tracing_ctx, method, &err.to_string())
            .await;
        Err(err)
    }
}

#[async_trait]
impl CartServiceTrait for CartService {
    async fn create_cart(&self) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let method = Method::Post;
        let tracing_ctx = self.tracer.start(
            "CreateCart",
            vec![
                KeyValue::new("component", "cart"),
                KeyValue::new("operation", "create"),
            ],
        );

        let cart_id = self.store.create().await;
        let cart = self.open(&cart_id, &tracing_ctx, method).await?;
        let response = CartResponse::from_cart(&cart_id, &*cart.lock().await, DeliveryOption::default());

        self.tracer
            .success(&tracing_ctx, method, "Cart created")
            .await;

        info!("Created cart {cart_id}");
        Ok(ApiResponse::success("Cart created successfully", response))
    }

    async fn get_cart(
        &self,
        cart_id: &str,
        delivery: DeliveryOption,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "GetCart",
            vec![
                KeyValue::new("component", "cart"),
                KeyValue::new("operation", "get"),
                KeyValue::new("cart.id", cart_id.to_string()),
            ],
        );

        let cart = self.open(cart_id, &tracing_ctx, method).await?;
        let response = CartResponse::from_cart(cart_id, &*cart.lock().await, delivery);

        self.tracer
            .success(&tracing_ctx, method, "Cart fetched")
            .await;

        Ok(ApiResponse::success("Cart fetched successfully", response))
    }

    async fn add_item(
        &self,
        cart_id: &str,
        req: &AddToCartRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        info!("Adding product {} to cart {cart_id}", req.product_id);

        let method = Method::Post;
        let tracing_ctx = self.tracer.start(
            "AddCartItem",
            vec![
                KeyValue::new("component", "cart"),
                KeyValue::new("operation", "add_item"),
                KeyValue::new("cart.id", cart_id.to_string()),
                KeyValue::new("product.id", req.product_id.clone()),
            ],
        );

        let cart = self.open(cart_id, &tracing_ctx, method).await?;

        let product = match self.products.select_by_id(&req.product_id).await {
            Ok(Some(row)) => ProductResponse::from(row),
            Ok(None) => {
                let err = ServiceError::NotFound(format!("Product {} not found", req.product_id));
                return self.fail(&tracing_ctx, method, err).await;
            }
            Err(err) => return self.fail(&tracing_ctx, method, err).await,
        };

        let mut cart = cart.lock().await;
        if let Err(err) = cart.add(&product) {
            return self.fail(&tracing_ctx, method, err).await;
        }
        let response = CartResponse::from_cart(cart_id, &cart, DeliveryOption::default());
        drop(cart);

        self.tracer
            .success(&tracing_ctx, method, "Item added to cart")
            .await;

        Ok(ApiResponse::success(
            format!("{} added to cart", product.name),
            response,
        ))
    }

    async fn update_item(
        &self,
        cart_id: &str,
        item_id: &str,
        quantity: u32,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let method = Method::Put;
        let tracing_ctx = self.tracer.start(
            "UpdateCartItem",
            vec![
                KeyValue::new("component", "cart"),
                KeyValue::new("operation", "update_item"),
                KeyValue::new("cart.id", cart_id.to_string()),
                KeyValue::new("item.id", item_id.to_string()),
                KeyValue::new("quantity", i64::from(quantity)),
            ],
        );

        let cart = self.open(cart_id, &tracing_ctx, method).await?;

        let mut cart = cart.lock().await;
        if let Err(err) = cart.update_quantity(item_id, quantity) {
            return self.fail(&tracing_ctx, method, err).await;
        }
        let response = CartResponse::from_cart(cart_id, &cart, DeliveryOption::default());
        drop(cart);

        self.tracer
            .success(&tracing_ctx, method, "Cart item updated")
            .await;

        Ok(ApiResponse::success("Cart updated successfully", response))
    }

    async fn adjust_item(
        &self,
        cart_id: &str,
        item_id: &str,
        delta: i64,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let method = Method::Patch;
        let tracing_ctx = self.tracer.start(
            "AdjustCartItem",
            vec![
                KeyValue::new("component", "cart"),
                KeyValue::new("operation", "adjust_item"),
                KeyValue::new("cart.id", cart_id.to_string()),
                KeyValue::new("item.id", item_id.to_string()),
                KeyValue::new("delta", delta),
            ],
        );

        let cart = self.open(cart_id, &tracing_ctx, method).await?;

        let mut cart = cart.lock().await;
        if let Err(err) = cart.adjust_quantity(item_id, delta) {
            return self.fail(&tracing_ctx, method, err).await;
        }
        let response = CartResponse::from_cart(cart_id, &cart, DeliveryOption::default());
        drop(cart);

        self.tracer
            .success(&tracing_ctx, method, "Cart item adjusted")
            .await;

        Ok(ApiResponse::success("Cart updated successfully", response))
    }

    async fn remove_item(
        &self,
        cart_id: &str,
        item_id: &str,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let method = Method::Delete;
        let tracing_ctx = self.tracer.start(
            "RemoveCartItem",
            vec![
                KeyValue::new("component", "cart"),
                KeyValue::new("operation", "remove_item"),
                KeyValue::new("cart.id", cart_id.to_string()),
                KeyValue::new("item.id", item_id.to_string()),
            ],
        );

        let cart = self.open(cart_id, &tracing_ctx, method).await?;

        let mut cart = cart.lock().await;
        let removed = match cart.remove(item_id) {
            Ok(item) => item,
            Err(err) => return self.fail(&tracing_ctx, method, err).await,
        };
        let response = CartResponse::from_cart(cart_id, &cart, DeliveryOption::default());
        drop(cart);

        self.tracer
            .success(&tracing_ctx, method, "Cart item removed")
            .await;

        Ok(ApiResponse::success(
            format!("{} removed from cart", removed.name),
            response,
        ))
    }

    async fn checkout(
        &self,
        cart_id: &str,
        req: &CheckoutRequest,
    ) -> Result<ApiResponse<CheckoutResponse>, ServiceError> {
        info!("Checking out cart {cart_id}");

        let method = Method::Post;
        let tracing_ctx = self.tracer.start(
            "Checkout",
            vec![
                KeyValue::new("component", "cart"),
                KeyValue::new("operation", "checkout"),
                KeyValue::new("cart.id", cart_id.to_string()),
            ],
        );

        let cart = self.open(cart_id, &tracing_ctx, method).await?;
        let details = CheckoutDetails::from(req.clone());

        let receipt = match cart.lock().await.checkout(&details) {
            Ok(receipt) => receipt,
            Err(err) => return self.fail(&tracing_ctx, method, err).await,
        };

        let response = CheckoutResponse::from_receipt(cart_id, receipt);

        self.tracer
            .success(&tracing_ctx, method, "Order placed")
            .await;

        info!("Cart {cart_id} checked out for {}", response.total);
        Ok(ApiResponse::success("Order Placed!", response))
    }

    async fn delete_cart(&self, cart_id: &str) -> Result<ApiResponse<()>, ServiceError> {
        let method = Method::Delete;
        let tracing_ctx = self.tracer.start(
            "DeleteCart",
            vec![
                KeyValue::new("component", "cart"),
                KeyValue::new("operation", "delete"),
                KeyValue::new("cart.id", cart_id.to_string()),
            ],
        );

        if !self.store.remove(cart_id).await {
            self.tracer
                .error(&tracing_ctx, method, "Cart not found")
                .await;
            return Err(ServiceError::NotFound(format!("Cart {cart_id} not found")));
        }

        self.tracer
            .success(&tracing_ctx, method, "Cart discarded")
            .await;

        info!("Discarded cart {cart_id}");
        Ok(ApiResponse::success("Cart deleted successfully", ()))
    }
}
