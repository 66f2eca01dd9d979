use reqwest::Method;

use crate::internal::apps::enums::permissions::{CREATE, READ};
use crate::internal::apps::enums::{OcsApiVersion, ShareType};
use crate::internal::apps::functions::send_apps_request::send_apps_request;
use crate::internal::apps::paths::{AppsPath, OcsPath};
use crate::internal::apps::structs::{OcsRequest, ShareResult};
use crate::internal::client::structs::cloud_client::CloudClient;
use crate::internal::error::structs::CloudError;
use crate::internal::webdav::paths::WebDavPath;

impl CloudClient {
    /// 创建群组文件夹，新文件夹的 id 在返回结果的 `id` 中
    pub async fn create_group_folder(
        &self,
        mount_point: &str,
    ) -> Result<ShareResult, CloudError> {
        let url = AppsPath::group_folders().to_url(&self.auth.base_url)?;
        let request = OcsRequest::new(Method::POST, url, OcsApiVersion::V1)
            .form_field("mountpoint", mount_point);

        send_apps_request(&self.auth, request).await
    }

    /// 给群组文件夹添加一个群组
    pub async fn add_group_to_group_folder(
        &self,
        group: &str,
        folder_id: u64,
    ) -> Result<ShareResult, CloudError> {
        let url = AppsPath::group_folder_groups(folder_id)
            .to_url(&self.auth.base_url)?;
        let request = OcsRequest::new(Method::POST, url, OcsApiVersion::V1)
            .form_field("group", group);

        send_apps_request(&self.auth, request).await
    }

    /// 设置群组在群组文件夹中的权限，权限位见 `apps::enums::permissions`
    pub async fn set_group_permissions_for_group_folder(
        &self,
        permissions: u32,
        group: &str,
        folder_id: u64,
    ) -> Result<ShareResult, CloudError> {
        let url = AppsPath::group_folder_group_permissions(folder_id, group)
            .to_url(&self.auth.base_url)?;
        let request = OcsRequest::new(Method::POST, url, OcsApiVersion::V1)
            .form_field("permissions", permissions);

        send_apps_request(&self.auth, request).await
    }

    /// 创建只能上传、不能查看的公开链接分享（文件投递）
    pub async fn create_file_drop_share(
        &self,
        path: &str,
    ) -> Result<ShareResult, CloudError> {
        self.create_link_share(path, CREATE).await
    }

    /// 创建只读公开链接分享
    pub async fn create_read_only_share(
        &self,
        path: &str,
    ) -> Result<ShareResult, CloudError> {
        self.create_link_share(path, READ).await
    }

    async fn create_link_share(
        &self,
        path: &str,
        permissions: u32,
    ) -> Result<ShareResult, CloudError> {
        let url = OcsPath::Shares.to_url(&self.auth.base_url)?;
        let request = OcsRequest::new(Method::POST, url, OcsApiVersion::V2)
            .form_field("path", share_path(path)?)
            .form_field("shareType", ShareType::PublicLink.code())
            .form_field("permissions", permissions);

        send_apps_request(&self.auth, request).await
    }

    /// 查询路径上已有的分享，`elements` 可能为空
    pub async fn get_share(
        &self,
        path: &str,
    ) -> Result<ShareResult, CloudError> {
        let url = OcsPath::Shares.to_url(&self.auth.base_url)?;
        let request = OcsRequest::new(Method::GET, url, OcsApiVersion::V2)
            .query_param("path", share_path(path)?);

        send_apps_request(&self.auth, request).await
    }

    /// 按 id 删除分享
    pub async fn delete_share(
        &self,
        share_id: u64,
    ) -> Result<ShareResult, CloudError> {
        let url = OcsPath::Share(share_id).to_url(&self.auth.base_url)?;
        let request =
            OcsRequest::new(Method::DELETE, url, OcsApiVersion::V2);

        send_apps_request(&self.auth, request).await
    }
}

/// 分享接口的 path 参数是相对用户根目录、以 `/` 开头的路径
fn share_path(path: &str) -> Result<String, CloudError> {
    Ok(WebDavPath::new(path)?.to_string())
}
