//! Runtime configuration: backend URL resolution and application settings.

mod app_config;
mod backend_url;

pub use app_config::AppConfig;
pub use backend_url::{
    backend_url_from_env, backend_url_from_lookup, resolve_backend_url, AppMode,
};
