//! Apps / OCS 命名空间下的接口路径。
//!
//! 与 WebDAV 路径分开构造，避免两个命名空间的字符串拼接互相串位。

use url::Url;

use crate::internal::entrance::remote::{encode_segment, format_url_path};
use crate::internal::error::structs::CloudError;

/// Apps 接口根目录
pub const APPS_ROOT: &str = "apps";

/// 分享接口（OCS v2）
pub const SHARES_ROOT: &str = "ocs/v2.php/apps/files_sharing/api/v1/shares";

/// `apps/` 下的接口路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppsPath {
    segments: Vec<String>,
}

impl AppsPath {
    fn from_segments(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// `apps/groupfolders/folders`
    pub fn group_folders() -> Self {
        Self::from_segments(vec!["groupfolders".into(), "folders".into()])
    }

    /// `apps/groupfolders/folders/<id>/groups`
    pub fn group_folder_groups(folder_id: u64) -> Self {
        Self::from_segments(vec![
            "groupfolders".into(),
            "folders".into(),
            folder_id.to_string(),
            "groups".into(),
        ])
    }

    /// `apps/apps/groupfolders/folders/<id>/groups/<group>`
    ///
    /// 线上接口就是双 `apps` 前缀，保持原样
    pub fn group_folder_group_permissions(folder_id: u64, group: &str) -> Self {
        Self::from_segments(vec![
            "apps".into(),
            "groupfolders".into(),
            "folders".into(),
            folder_id.to_string(),
            "groups".into(),
            group.to_string(),
        ])
    }

    pub fn to_relative(&self) -> String {
        let mut relative = APPS_ROOT.to_string();
        for segment in &self.segments {
            relative.push('/');
            relative.push_str(&encode_segment(segment));
        }
        relative
    }

    pub fn to_url(&self, base_url: &Url) -> Result<Url, CloudError> {
        format_url_path(base_url, &self.to_relative())
    }
}

/// 分享接口路径
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OcsPath {
    /// 分享集合：创建、按路径查询
    Shares,
    /// 单个分享
    Share(u64),
}

impl OcsPath {
    pub fn to_relative(&self) -> String {
        match self {
            OcsPath::Shares => SHARES_ROOT.to_string(),
            OcsPath::Share(id) => format!("{SHARES_ROOT}/{id}"),
        }
    }

    pub fn to_url(&self, base_url: &Url) -> Result<Url, CloudError> {
        format_url_path(base_url, &self.to_relative())
    }
}
