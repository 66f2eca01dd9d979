//! WebDAV 命名空间下的路径。

use std::fmt;

use url::Url;

use crate::internal::entrance::remote::{
    clean_segments, encode_segment, format_url_path,
};
use crate::internal::error::structs::CloudError;

/// WebDAV 根目录，相对服务器根地址
pub const WEBDAV_ROOT: &str = "remote.php/webdav";

/// 相对 WebDAV 根目录的路径
///
/// 构造时已按文件系统方式清理（多余的 `/`、`.`、`..`），
/// 调用方不需要也不应该自己带上 `remote.php/webdav`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WebDavPath {
    segments: Vec<String>,
}

impl WebDavPath {
    pub fn new(path: &str) -> Result<Self, CloudError> {
        Ok(Self { segments: clean_segments(path)? })
    }

    /// WebDAV 根目录本身
    pub fn root() -> Self {
        Self::default()
    }

    /// 追加子路径，规则与 [`WebDavPath::new`] 相同
    pub fn join(&self, child: &str) -> Result<Self, CloudError> {
        let mut joined = self.segments.join("/");
        joined.push('/');
        joined.push_str(child);
        Self::new(&joined)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// 拼接成相对服务器根地址的已编码路径
    pub fn to_relative(&self) -> String {
        let mut relative = WEBDAV_ROOT.to_string();
        for segment in &self.segments {
            relative.push('/');
            relative.push_str(&encode_segment(segment));
        }
        relative
    }

    /// 解析为完整 URL
    pub fn to_url(&self, base_url: &Url) -> Result<Url, CloudError> {
        format_url_path(base_url, &self.to_relative())
    }
}

impl fmt::Display for WebDavPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segments.join("/"))
    }
}
