mod backend;
mod media;
mod myconfig;

pub use self::backend::{BackendConfig, HttpClientFactory};
pub use self::media::MediaConfig;
pub use self::myconfig::Config;
