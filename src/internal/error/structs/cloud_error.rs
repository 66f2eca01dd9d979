//! 客户端统一错误类型。
//!
//! 传输/解析错误与服务器在响应体中报告的业务错误是两条独立的通道，
//! 后者分别对应 [`CloudError::Server`] 与 [`CloudError::Ocs`]。

use std::path::PathBuf;

use thiserror::Error;

use super::server_error::ServerError;

#[derive(Debug, Error)]
pub enum CloudError {
    #[error("服务器地址无效: {0}")]
    InvalidUrl(String),

    #[error("路径无效: {0}")]
    InvalidPath(String),

    #[error("请求头无效: {0}")]
    InvalidHeader(String),

    #[error("请求方法无效: {0}")]
    InvalidMethod(String),

    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("服务器返回异常状态 {status}: {url}")]
    Status { status: u16, url: String },

    #[error("XML 解析失败: {0}")]
    Xml(#[from] quick_xml::de::DeError),

    /// WebDAV 响应体中携带了异常
    #[error("服务器返回异常: {0}")]
    Server(#[from] ServerError),

    /// OCS 接口解析成功，但状态码不是成功码
    #[error("OCS 接口返回失败状态码 {status_code}: {message}")]
    Ocs { status_code: u32, message: String },

    #[error("glob 表达式无效: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("遍历本地文件失败: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("读取本地文件失败 {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CloudError {
    /// 服务器是否报告目标不存在（404 或 NotFound 异常）
    pub fn is_not_found(&self) -> bool {
        match self {
            CloudError::Server(server_error) => server_error.is_not_found(),
            CloudError::Status { status, .. } => *status == 404,
            _ => false,
        }
    }

    /// 服务器报告的异常，仅 WebDAV 通道存在
    pub fn server_error(&self) -> Option<&ServerError> {
        match self {
            CloudError::Server(server_error) => Some(server_error),
            _ => None,
        }
    }

    /// OCS 通道返回的状态码
    pub fn ocs_status_code(&self) -> Option<u32> {
        match self {
            CloudError::Ocs { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}
