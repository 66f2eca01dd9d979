pub mod cloud_error;
pub mod server_error;

// 重导出公共类型
pub use cloud_error::CloudError;
pub use server_error::ServerError;
