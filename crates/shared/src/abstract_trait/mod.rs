mod auth_backend;
mod media;
mod product_table;

pub use self::auth_backend::{AuthBackendTrait, DynAuthBackend};
pub use self::media::{DynMediaUpload, MediaUploadTrait};
pub use self::product_table::{DynProductTable, ProductTableTrait};
