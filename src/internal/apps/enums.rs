/// OCS 接口版本，不同版本的成功状态码不同
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OcsApiVersion {
    /// `apps/...` 与 `ocs/v1.php/...`，成功码 100
    V1,
    /// `ocs/v2.php/...`，成功码 200
    V2,
}

impl OcsApiVersion {
    pub fn success_code(&self) -> u32 {
        match self {
            OcsApiVersion::V1 => 100,
            OcsApiVersion::V2 => 200,
        }
    }
}

/// 分享类型（files_sharing 的 `shareType`）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareType {
    User,
    Group,
    PublicLink,
    Email,
    FederatedCloud,
    Other(u32),
}

impl ShareType {
    pub fn code(&self) -> u32 {
        match self {
            ShareType::User => 0,
            ShareType::Group => 1,
            ShareType::PublicLink => 3,
            ShareType::Email => 4,
            ShareType::FederatedCloud => 6,
            ShareType::Other(code) => *code,
        }
    }

    pub fn from_code(code: u32) -> Self {
        match code {
            0 => ShareType::User,
            1 => ShareType::Group,
            3 => ShareType::PublicLink,
            4 => ShareType::Email,
            6 => ShareType::FederatedCloud,
            other => ShareType::Other(other),
        }
    }
}

/// 分享与群组文件夹使用的权限位
pub mod permissions {
    pub const READ: u32 = 1;
    pub const UPDATE: u32 = 2;
    pub const CREATE: u32 = 4;
    pub const DELETE: u32 = 8;
    pub const SHARE: u32 = 16;
    /// 全部权限，群组文件夹常用 31
    pub const ALL: u32 = READ | UPDATE | CREATE | DELETE | SHARE;
}
