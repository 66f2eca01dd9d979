use reqwest::Method;

use crate::internal::error::structs::CloudError;

/// 客户端会用到的 WebDAV 方法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebDavMethod {
    MKCOL,
    DELETE,
    PUT,
    GET,
    PROPFIND,
}

impl WebDavMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            WebDavMethod::MKCOL => "MKCOL",
            WebDavMethod::DELETE => "DELETE",
            WebDavMethod::PUT => "PUT",
            WebDavMethod::GET => "GET",
            WebDavMethod::PROPFIND => "PROPFIND",
        }
    }

    pub fn to_http_method(&self) -> Result<Method, CloudError> {
        match self {
            WebDavMethod::DELETE => Ok(Method::DELETE),
            WebDavMethod::PUT => Ok(Method::PUT),
            WebDavMethod::GET => Ok(Method::GET),
            // 扩展方法只能从字节构造
            WebDavMethod::MKCOL | WebDavMethod::PROPFIND => {
                Method::from_bytes(self.as_str().as_bytes())
                    .map_err(|e| CloudError::InvalidMethod(e.to_string()))
            }
        }
    }
}

pub enum Depth {
    /// 仅返回当前资源
    Zero,
}

impl Depth {
    pub fn as_str(&self) -> &'static str {
        match self {
            Depth::Zero => "0",
        }
    }
}
