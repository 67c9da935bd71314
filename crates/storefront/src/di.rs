use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
    abstract_trait::{
        admin::DynAdminService, auth::DynAuthService, booking::DynBookingService,
        cart::{DynCartService, DynCartStore}, catalog::DynCatalogService,
        dashboard::DynDashboardService,
    },
    service::{
        AdminService, AuthService, BookingService, CartService, CatalogService, DashboardService,
    },
};
use shared::{
    abstract_trait::{DynAuthBackend, DynMediaUpload, DynProductTable},
    utils::Metrics,
};

/// External collaborators every service is built from.
#[derive(Clone)]
pub struct Backends {
    pub auth: DynAuthBackend,
    pub products: DynProductTable,
    pub media: DynMediaUpload,
    pub carts: DynCartStore,
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub catalog_service: DynCatalogService,
    pub cart_service: DynCartService,
    pub booking_service: DynBookingService,
    pub admin_service: DynAdminService,
    pub dashboard_service: DynDashboardService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"DynAuthService")
            .field("catalog_service", &"DynCatalogService")
            .field("cart_service", &"DynCartService")
            .field("booking_service", &"DynBookingService")
            .field("admin_service", &"DynAdminService")
            .field("dashboard_service", &"DynDashboardService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(backends: Backends, metrics: Arc<Mutex<Metrics>>) -> Self {
        let auth_service: DynAuthService =
            Arc::new(AuthService::new(backends.auth.clone(), metrics.clone()));

        let catalog_service: DynCatalogService =
            Arc::new(CatalogService::new(backends.products.clone(), metrics.clone()));

        let cart_service: DynCartService = Arc::new(CartService::new(
            backends.carts.clone(),
            backends.products.clone(),
            metrics.clone(),
        ));

        let booking_service: DynBookingService = Arc::new(BookingService::new(metrics.clone()));

        let admin_service: DynAdminService = Arc::new(AdminService::new(
            backends.products.clone(),
            backends.media.clone(),
            metrics,
        ));

        let dashboard_service: DynDashboardService = Arc::new(DashboardService);

        Self {
            auth_service,
            catalog_service,
            cart_service,
            booking_service,
            admin_service,
            dashboard_service,
        }
    }
}
