//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod media;
pub mod proxy;
pub mod voice;

pub use media::*;
pub use proxy::*;
pub use voice::*;
