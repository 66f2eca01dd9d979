use url::Url;

use crate::internal::auth::structs::client_config::ClientConfig;
use crate::internal::auth::structs::cloud_auth::CloudAuth;
use crate::internal::error::structs::CloudError;

/// {own|next}Cloud 客户端
///
/// 创建后不可变，不持有任何缓存；克隆后共用同一个 http 客户端与凭据，
/// 可以在多个任务中同时操作互不相关的路径
///
/// example:
/// ```
/// use cloud_fs::CloudClient;
///
/// let client = CloudClient::new("http://localhost:8080/", "admin", "password")?;
///
/// client.mkdir("Test").await?;
/// client.upload(b"Hello World!\n".to_vec(), "Test/test.txt").await?;
/// let data = client.download("Test/test.txt").await?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CloudClient {
    pub(crate) auth: CloudAuth,
}

impl CloudClient {
    /// 使用默认传输配置创建客户端，只校验地址，不发起网络请求
    pub fn new(
        base_url: &str,
        username: &str,
        password: &str,
    ) -> Result<Self, CloudError> {
        Self::with_config(base_url, username, password, ClientConfig::default())
    }

    pub fn with_config(
        base_url: &str,
        username: &str,
        password: &str,
        config: ClientConfig,
    ) -> Result<Self, CloudError> {
        let auth = CloudAuth::new(username, password, base_url, &config)?;
        Ok(Self { auth })
    }

    pub fn auth(&self) -> &CloudAuth {
        &self.auth
    }

    /// 规范化后的服务器根地址（以 `/` 结尾）
    pub fn base_url(&self) -> &Url {
        &self.auth.base_url
    }

    pub fn username(&self) -> &str {
        self.auth.username()
    }
}
