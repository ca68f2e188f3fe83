//! HTTP Handlers

mod audio;
mod config;
mod ping;
mod proxy;
mod voice;

pub use audio::*;
pub use config::*;
pub use ping::*;
pub use proxy::*;
pub use voice::*;
