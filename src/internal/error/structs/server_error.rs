//! 服务器在响应体中返回的 WebDAV 异常。

use thiserror::Error;

/// 服务器以 XML 形式返回的异常信息
///
/// ```xml
/// <d:error xmlns:d="DAV:" xmlns:s="http://sabredav.org/ns">
///   <s:exception>Sabre\DAV\Exception\NotFound</s:exception>
///   <s:message>File with name Test could not be located</s:message>
/// </d:error>
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Exception: {exception}, Message: {message}")]
pub struct ServerError {
    /// 异常类型，例如 `Sabre\DAV\Exception\NotFound`
    pub exception: String,
    /// 服务器给出的错误描述
    pub message: String,
}

impl ServerError {
    /// 服务器是否报告目标不存在
    pub fn is_not_found(&self) -> bool {
        self.exception
            .rsplit('\\')
            .next()
            .is_some_and(|kind| kind == "NotFound")
    }

    /// 服务器是否拒绝了凭据
    pub fn is_not_authenticated(&self) -> bool {
        self.exception
            .rsplit('\\')
            .next()
            .is_some_and(|kind| kind == "NotAuthenticated")
    }
}
