mod auth;
mod client;
mod media;
mod product;

pub use self::auth::SupabaseAuth;
pub use self::client::{BackendClient, extract_message};
pub use self::media::MediaUploader;
pub use self::product::SupabaseProductTable;
