use core::fmt;
use std::sync::Arc;

use base64::Engine;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};
use sha2::{Digest, Sha256};
use url::Url;

use crate::internal::auth::structs::client_config::ClientConfig;
use crate::internal::error::structs::CloudError;

/// 认证结构体
///
/// 该结构体定位
/// - 存储服务器根地址与 Basic Auth 凭据
/// - 持有已注入 Authorization 默认请求头的 http 客户端，WebDAV 与 OCS 请求共用
///
/// 默认Eq时会匹配base_url和token，如果需要单独比较token，需使用eq_only_token方法
#[derive(Clone)]
pub struct CloudAuth {
    pub client: Client,     // 内部是Arc，不需要特殊处理
    pub base_url: Arc<Url>, // 客户端需要 Send + Sync，所以这里用 Arc
    pub(crate) username: Arc<str>,
    pub(crate) encrypted_token: Arc<String>, // 对外导出时，不允许直接访问，哪怕它是被加密的
}

impl CloudAuth {
    /// 创建新的认证结构体，不会发起任何网络请求
    pub fn new(
        username: &str,
        password: &str,
        base_url: &str,
        config: &ClientConfig,
    ) -> Result<Self, CloudError> {
        let base_url = format_base_url(base_url)?;

        let http_client =
            InternalHttpClient::create(username, password, config)?;

        Ok(Self {
            client: http_client.client,
            base_url: Arc::new(base_url),
            username: Arc::from(username),
            encrypted_token: Arc::new(http_client.encrypted_token),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// 仅比较token是否相等
    pub fn eq_only_token(&self, other: &Self) -> bool {
        self.encrypted_token == other.encrypted_token
    }
}

/// 用于比较认证结构体是否相等
impl PartialEq for CloudAuth {
    fn eq(&self, other: &Self) -> bool {
        self.encrypted_token == other.encrypted_token
            && self.base_url == other.base_url
    }
}

/// 防止debug泄漏账号
impl fmt::Debug for CloudAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudAuth")
            .field("base_url", &self.base_url.as_str())
            .field("client", &"<Client with hidden authorization>")
            .finish()
    }
}

/// 解析根地址，并保证路径以 `/` 结尾，否则相对路径解析时会丢掉最后一段
pub(crate) fn format_base_url(url: &str) -> Result<Url, CloudError> {
    if url.trim().is_empty() {
        return Err(CloudError::InvalidUrl("地址为空".to_string()));
    }

    let mut base_url =
        Url::parse(url).map_err(|e| CloudError::InvalidUrl(e.to_string()))?;

    if base_url.cannot_be_a_base() {
        return Err(CloudError::InvalidUrl(format!("{url} 不能作为根地址")));
    }

    if !base_url.path().ends_with('/') {
        let new_path = format!("{}/", base_url.path());
        base_url.set_path(&new_path);
    }

    Ok(base_url)
}

/// 内部临时使用的http客户端结构体，在初始化CloudAuth时使用
struct InternalHttpClient {
    client: Client,
    encrypted_token: String,
}

impl InternalHttpClient {
    fn encrypt_str(data: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn create(
        username: &str,
        password: &str,
        config: &ClientConfig,
    ) -> Result<Self, CloudError> {
        let mut headers = HeaderMap::new();

        let token = base64::engine::general_purpose::STANDARD
            .encode(format!("{username}:{password}"));

        let mut auth_value =
            HeaderValue::from_str(&format!("Basic {}", token))
                .map_err(|e| CloudError::InvalidHeader(e.to_string()))?;
        auth_value.set_sensitive(true);

        headers.insert(AUTHORIZATION, auth_value);

        let user_agent = HeaderValue::from_str(config.user_agent())
            .map_err(|e| CloudError::InvalidHeader(e.to_string()))?;
        headers.insert(USER_AGENT, user_agent);

        let mut builder = Client::builder().http1_only().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build()?;

        let encrypted_token = Self::encrypt_str(&token);

        Ok(Self { client, encrypted_token })
    }
}
