mod product;
mod user;

pub use self::product::{NewProductRow, ProductRow};
pub use self::user::{AuthSession, AuthUser, UserMetadata};
