//! Application Layer - 应用层
//!
//! 网关无跨请求领域状态，应用层只保留出站端口定义

pub mod ports;

pub use ports::*;
