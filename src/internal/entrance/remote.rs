use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use url::Url;

use crate::internal::error::structs::CloudError;

/// 路径段需要编码的字符，`/` 也在其中，避免一个段被拆成多段
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// 对单个路径段做百分号编码
pub(crate) fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// 按文件系统的方式清理路径：去掉空段和 `.`，`..` 回退一级
///
/// 回退越过起点时返回错误，不允许访问父目录
pub(crate) fn clean_segments(path: &str) -> Result<Vec<String>, CloudError> {
    let mut segments: Vec<String> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => continue,
            ".." => {
                if segments.pop().is_none() {
                    return Err(CloudError::InvalidPath(format!(
                        "{path} 指向了父目录"
                    )));
                }
            }
            other => segments.push(other.to_string()),
        }
    }

    Ok(segments)
}

/// 将已编码的相对路径解析到 base_url 之下
///
/// 解析结果必须仍在 base_url 之内（同协议、同主机、同路径前缀）
pub(crate) fn format_url_path(
    base_url: &Url,
    relative_path: &str,
) -> Result<Url, CloudError> {
    let joined_url = base_url
        .join(relative_path)
        .map_err(|e| CloudError::InvalidPath(format!("{relative_path}: {e}")))?;

    if joined_url.scheme() != base_url.scheme()
        || joined_url.host_str() != base_url.host_str()
        || joined_url.port_or_known_default() != base_url.port_or_known_default()
        || !joined_url.path().starts_with(base_url.path())
    {
        return Err(CloudError::InvalidPath(format!(
            "{relative_path} 不在 {base_url} 之下"
        )));
    }

    Ok(joined_url)
}
