//! Proxy Adapters - 反向代理适配器

pub mod http_forwarder;

pub use http_forwarder::{build_target_url, HttpForwarder};
