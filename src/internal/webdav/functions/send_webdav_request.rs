use bytes::Bytes;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use tracing::{debug, warn};

use crate::internal::auth::structs::cloud_auth::CloudAuth;
use crate::internal::error::structs::CloudError;
use crate::internal::webdav::enums::{Depth, WebDavMethod};
use crate::internal::webdav::paths::WebDavPath;
use crate::internal::webdav::raw_xml::raw_dav_error::probe_server_error;

/// 存在性检查使用的PROPFIND请求体，只取资源类型
const PROPFIND_BODY: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<d:propfind xmlns:d="DAV:">
  <d:prop>
    <d:resourcetype/>
  </d:prop>
</d:propfind>"#;

/// 发送一个 WebDAV 请求并读取完整响应体
///
/// 判定顺序：
/// 1. 响应体中嵌入了服务器异常 → [`CloudError::Server`]
/// 2. HTTP 状态不是 2xx → [`CloudError::Status`]
/// 3. 其余情况原样返回响应体
pub(crate) async fn send_webdav_request(
    auth: &CloudAuth,
    method: WebDavMethod,
    path: &WebDavPath,
    body: Option<Bytes>,
) -> Result<Bytes, CloudError> {
    let url = path.to_url(&auth.base_url)?;
    let http_method = method.to_http_method()?;

    debug!(method = method.as_str(), %url, "发送 WebDAV 请求");

    let mut request = auth.client.request(http_method, url.clone());

    if method == WebDavMethod::PROPFIND {
        request = request
            .header("Depth", Depth::Zero.as_str())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/xml"))
            .body(PROPFIND_BODY);
    }

    if let Some(body) = body {
        request = request.body(body);
    }

    let res = request.send().await?;
    let status = res.status();
    let content = res.bytes().await?;

    if let Some(server_error) = probe_server_error(&content) {
        warn!(
            method = method.as_str(),
            %url,
            exception = %server_error.exception,
            "服务器返回 WebDAV 异常"
        );
        return Err(server_error.into());
    }

    if !status.is_success() {
        warn!(method = method.as_str(), %url, %status, "WebDAV 请求状态异常");
        return Err(CloudError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    Ok(content)
}
