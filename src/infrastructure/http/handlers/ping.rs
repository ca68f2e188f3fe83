//! Ping Handler - 存活探测

/// 存活探测
pub async fn ping() -> &'static str {
    "pong"
}
