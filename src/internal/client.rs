//! 客户端领域模块：所有公开操作都是 [`structs::cloud_client::CloudClient`] 上的方法。
//!
//! - `impl_webdav`：文件与目录操作
//! - `impl_apps`：分享与群组文件夹管理
//! - `impl_upload_dir`：按 glob 上传本地文件

mod impl_apps;
mod impl_upload_dir;
mod impl_webdav;
pub mod structs;
