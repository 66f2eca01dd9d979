use quick_xml::de::from_str;
use serde::Deserialize;

use crate::internal::error::structs::ServerError;

/// 对应 WebDAV 错误响应的 `<d:error>` 节点
///
/// 根节点名不做校验，只要带有 `exception`/`message` 子节点就能解析
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RawDavError {
    /// `<s:exception>`：异常类型
    #[serde(default)]
    pub exception: String,
    /// `<s:message>`：异常描述
    #[serde(default)]
    pub message: String,
}

impl RawDavError {
    /// 只有 exception 非空时才算服务器异常
    pub fn into_server_error(self) -> Option<ServerError> {
        let RawDavError { exception, message } = self;

        if exception.trim().is_empty() {
            return None;
        }

        Some(ServerError { exception, message })
    }
}

/// 探测响应体中是否嵌入了服务器异常
///
/// - 首字节不是 `<` 的内容视为原始文件数据，直接放行
/// - 看起来像 XML 但解析失败的，同样按原始数据放行
pub fn probe_server_error(body: &[u8]) -> Option<ServerError> {
    if body.first() != Some(&b'<') {
        return None;
    }

    let text = std::str::from_utf8(body).ok()?;
    let raw: RawDavError = from_str(text).ok()?;

    raw.into_server_error()
}
