//! HTTP слой - клиент community API и события для GUI

mod client;
mod events;

pub use client::{ApiClient, ApiError, CSRF_HEADER};
pub use events::ApiEvent;
