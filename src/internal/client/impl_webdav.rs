use bytes::Bytes;

use crate::internal::client::structs::cloud_client::CloudClient;
use crate::internal::error::structs::CloudError;
use crate::internal::webdav::enums::WebDavMethod;
use crate::internal::webdav::functions::send_webdav_request::send_webdav_request;
use crate::internal::webdav::paths::WebDavPath;

impl CloudClient {
    /// 创建目录（MKCOL），父目录需已存在
    pub async fn mkdir(&self, path: &str) -> Result<(), CloudError> {
        let path = WebDavPath::new(path)?;
        send_webdav_request(&self.auth, WebDavMethod::MKCOL, &path, None)
            .await?;
        Ok(())
    }

    /// 删除文件或目录（DELETE）
    ///
    /// 目标不存在时不做特殊处理，由服务器响应决定成败
    pub async fn delete(&self, path: &str) -> Result<(), CloudError> {
        let path = WebDavPath::new(path)?;
        send_webdav_request(&self.auth, WebDavMethod::DELETE, &path, None)
            .await?;
        Ok(())
    }

    /// 上传数据到目标路径（PUT），已存在的文件会被覆盖
    pub async fn upload(
        &self,
        data: impl Into<Bytes>,
        dest: &str,
    ) -> Result<(), CloudError> {
        let dest = WebDavPath::new(dest)?;
        self.upload_to(data.into(), &dest).await
    }

    pub(crate) async fn upload_to(
        &self,
        data: Bytes,
        dest: &WebDavPath,
    ) -> Result<(), CloudError> {
        send_webdav_request(&self.auth, WebDavMethod::PUT, dest, Some(data))
            .await?;
        Ok(())
    }

    /// 下载文件（GET），返回原始响应体
    ///
    /// 响应体是带 exception 的 XML 时返回解析出的 [`CloudError::Server`]
    pub async fn download(&self, path: &str) -> Result<Bytes, CloudError> {
        let path = WebDavPath::new(path)?;
        send_webdav_request(&self.auth, WebDavMethod::GET, &path, None).await
    }

    /// 路径是否存在（PROPFIND）
    ///
    /// 任何失败（不存在、认证失败、网络错误）都返回 false，需要区分时用 [`CloudClient::try_exists`]
    pub async fn exists(&self, path: &str) -> bool {
        let Ok(path) = WebDavPath::new(path) else {
            return false;
        };
        send_webdav_request(&self.auth, WebDavMethod::PROPFIND, &path, None)
            .await
            .is_ok()
    }

    /// 路径是否存在，只有服务器明确报告不存在时才返回 `Ok(false)`
    pub async fn try_exists(&self, path: &str) -> Result<bool, CloudError> {
        let path = WebDavPath::new(path)?;
        match send_webdav_request(
            &self.auth,
            WebDavMethod::PROPFIND,
            &path,
            None,
        )
        .await
        {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }
}
