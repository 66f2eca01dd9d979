use std::path::PathBuf;

use tracing::debug;

use crate::internal::client::structs::cloud_client::CloudClient;
use crate::internal::entrance::local::{get_local_files, local_file_name};
use crate::internal::error::structs::CloudError;
use crate::internal::webdav::paths::WebDavPath;

impl CloudClient {
    /// 按 glob 表达式上传本地文件到远程目录，返回匹配到的本地文件
    ///
    /// 每个文件上传到 `dest_dir/<文件名>`，逐个顺序上传；
    /// 遇到第一个读取或上传失败就停止，已上传的文件不会回滚
    pub async fn upload_dir(
        &self,
        pattern: &str,
        dest_dir: &str,
    ) -> Result<Vec<PathBuf>, CloudError> {
        let dest_dir = WebDavPath::new(dest_dir)?;
        let files = get_local_files(pattern)?;

        for file in &files {
            let name = local_file_name(file)?;
            let target = dest_dir.join(&name)?;

            let data = tokio::fs::read(file).await.map_err(|source| {
                CloudError::ReadFile { path: file.clone(), source }
            })?;

            debug!(local = %file.display(), remote = %target, bytes = data.len(), "上传本地文件");

            self.upload_to(data.into(), &target).await?;
        }

        Ok(files)
    }
}
