use std::time::Duration;

/// 默认 User-Agent
pub(crate) const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP 传输层配置
///
/// 默认不设置任何超时，需要有界延迟的调用方请自行设置 `timeout`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// 单个请求的总超时（含读取响应体）
    pub timeout: Option<Duration>,
    /// 自定义 User-Agent，未设置时使用 crate 名与版本
    pub user_agent: Option<String>,
}

impl ClientConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    pub(crate) fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}
