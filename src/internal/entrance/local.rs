use std::path::{Path, PathBuf};

use crate::internal::error::structs::CloudError;

/// 本库主入口之一，按 glob 表达式读取本地文件列表
///
/// 只返回普通文件，目录会被跳过；结果按 glob 的遍历顺序排列
pub fn get_local_files(pattern: &str) -> Result<Vec<PathBuf>, CloudError> {
    let mut files = Vec::new();

    for entry in glob::glob(pattern)? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }

    Ok(files)
}

/// 上传时使用的远程文件名，路径没有文件名部分（如以 `..` 结尾）时返回错误
pub(crate) fn local_file_name(path: &Path) -> Result<String, CloudError> {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .ok_or_else(|| {
            CloudError::InvalidPath(format!("{} 没有文件名", path.display()))
        })
}
