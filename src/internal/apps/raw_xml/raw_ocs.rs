use std::str::FromStr;

use quick_xml::Reader;
use quick_xml::de::{DeError, from_str};
use quick_xml::events::Event;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// 信封根节点名
const OCS_ROOT: &[u8] = b"ocs";

/// 对应 OCS 响应 XML 顶层的 `<ocs>` 节点
#[derive(Debug, Deserialize, Clone)]
#[serde(rename = "ocs")]
pub struct RawOcs {
    /// `<meta>`：状态信息，必须存在
    pub meta: RawMeta,
    /// `<data>`：单个对象的字段，或多个 `<element>`
    #[serde(default)]
    pub data: RawData,
}

/// 对应 `<meta>` 节点
#[derive(Debug, Deserialize, Clone)]
pub struct RawMeta {
    /// `<status>`：`ok` 或 `failure`
    #[serde(default)]
    pub status: String,
    /// `<statuscode>`：v1 成功为 100，v2 成功为 200，必须是数字
    #[serde(rename = "statuscode")]
    pub status_code: u32,
    /// `<message>`：失败时的描述
    #[serde(default)]
    pub message: Option<String>,
}

/// 对应 `<data>` 节点
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RawData {
    #[serde(default, deserialize_with = "de_lenient")]
    pub id: Option<u64>,
    /// 公开链接分享的地址
    #[serde(default)]
    pub url: Option<String>,
    /// 列表类接口返回的 `<element>` 节点
    #[serde(rename = "element", default)]
    pub elements: Vec<RawElement>,
}

/// 对应单个 `<element>` 节点（一个分享）
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RawElement {
    #[serde(default, deserialize_with = "de_lenient")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "de_lenient")]
    pub share_type: Option<u32>,
    #[serde(default, deserialize_with = "de_lenient")]
    pub permissions: Option<u32>,
    /// `<stime>`：创建时间（Unix 秒）
    #[serde(default, deserialize_with = "de_lenient")]
    pub stime: Option<i64>,
    #[serde(default)]
    pub uid_owner: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub item_type: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// 数字字段宽松解析：空节点或非数字内容视为缺失
fn de_lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.and_then(|s| s.trim().parse::<T>().ok()))
}

/// 解析 OCS 信封
///
/// quick-xml 的 serde 不校验根节点名，这里先读出第一个元素，
/// 不是 `<ocs>` 的响应（HTML 错误页、登录页等）直接按解析失败处理
pub fn decode_ocs(xml_text: &str) -> Result<RawOcs, DeError> {
    let mut reader = Reader::from_str(xml_text);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if e.local_name().as_ref() != OCS_ROOT {
                    return Err(DeError::custom(format!(
                        "根节点应为 <ocs>，实际为 <{}>",
                        String::from_utf8_lossy(e.name().as_ref())
                    )));
                }
                break;
            }
            Ok(Event::Eof) => {
                return Err(DeError::custom("响应中没有 XML 元素"));
            }
            Ok(_) => continue,
            Err(e) => return Err(DeError::custom(e.to_string())),
        }
    }

    from_str(xml_text)
}
