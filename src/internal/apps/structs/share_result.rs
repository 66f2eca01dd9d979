use chrono::{DateTime, Utc};

use crate::internal::apps::enums::ShareType;

/// OCS 接口的返回结果
///
/// 分享/群组文件夹的管理操作结果，或某个路径下当前的分享列表
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShareResult {
    pub status: String,
    pub status_code: u32,
    pub message: String,
    /// 新建对象的 id，响应中没有时为 0
    pub id: u64,
    /// 公开链接分享的地址
    pub url: Option<String>,
    /// 查询类接口返回的分享列表，可能为空
    pub elements: Vec<ShareElement>,
}

/// 单个分享
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShareElement {
    pub id: u64,
    pub share_type: Option<u32>,
    pub permissions: Option<u32>,
    pub owner: Option<String>,
    pub path: Option<String>,
    pub item_type: Option<String>,
    pub token: Option<String>,
    pub url: Option<String>,
    pub shared_at: Option<DateTime<Utc>>,
}

impl ShareElement {
    pub fn kind(&self) -> Option<ShareType> {
        self.share_type.map(ShareType::from_code)
    }
}
