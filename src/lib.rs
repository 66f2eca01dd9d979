/// 内部实现模块
mod internal;


/// 导出核心入口：客户端
pub use internal::client::structs::cloud_client::CloudClient;

pub mod auth {
    use crate::internal;
    pub use internal::auth::structs::client_config::ClientConfig;
    pub use internal::auth::structs::cloud_auth::CloudAuth;
}

pub mod error {
    use crate::internal;
    pub use internal::error::structs::*;
}

/// 对外提供 WebDAV 基础访问能力，客户端方法之外也可以自行组合使用
pub mod webdav {
    pub mod enums {
        use crate::internal;
        pub use internal::webdav::enums::*;
    }

    pub mod paths {
        use crate::internal;
        pub use internal::webdav::paths::*;
    }

    pub mod structs {
        use crate::internal;
        pub use internal::webdav::raw_xml::raw_dav_error::*;
    }
}

/// OCS / Apps 管理接口（分享、群组文件夹）
pub mod apps {
    pub mod enums {
        use crate::internal;
        pub use internal::apps::enums::*;
    }

    pub mod paths {
        use crate::internal;
        pub use internal::apps::paths::*;
    }

    pub mod structs {
        use crate::internal;
        pub use internal::apps::structs::*;
    }

    pub mod traits {
        pub use crate::internal::apps::raw_xml::impl_share_result::*;
    }
}

pub mod local_file {
    use crate::internal;
    pub use internal::entrance::local::*;
}
