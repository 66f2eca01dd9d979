use reqwest::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use tracing::{debug, warn};

use crate::internal::apps::raw_xml::impl_share_result::ToShareResult;
use crate::internal::apps::raw_xml::raw_ocs::decode_ocs;
use crate::internal::apps::structs::{OcsRequest, ShareResult};
use crate::internal::auth::structs::cloud_auth::CloudAuth;
use crate::internal::error::structs::CloudError;

const OCS_API_REQUEST: HeaderName = HeaderName::from_static("ocs-apirequest");

/// 发送 OCS 请求并解析 `<ocs>` 信封
///
/// 无论 HTTP 状态码如何都按信封解析；解析失败（含根节点不是 `<ocs>`）直接返回，
/// 解析成功但状态码不是该版本的成功码时返回 [`CloudError::Ocs`]
pub(crate) async fn send_apps_request(
    auth: &CloudAuth,
    request: OcsRequest,
) -> Result<ShareResult, CloudError> {
    let OcsRequest { method, url, version, form, query } = request;

    debug!(%method, %url, "发送 OCS 请求");

    let mut builder = auth
        .client
        .request(method, url.clone())
        .header(OCS_API_REQUEST, HeaderValue::from_static("true"));

    if !query.is_empty() {
        builder = builder.query(&query);
    }

    if !form.is_empty() {
        // form 会自动带上 application/x-www-form-urlencoded
        builder = builder.form(&form);
    } else {
        builder = builder.header(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
    }

    let res = builder.send().await?;
    let status = res.status();
    let xml_text = res.text().await?;

    let raw = decode_ocs(&xml_text)?;
    let result = raw.to_share_result();

    if result.status_code != version.success_code() {
        warn!(
            %url,
            %status,
            status_code = result.status_code,
            message = %result.message,
            "OCS 接口返回失败"
        );
        return Err(CloudError::Ocs {
            status_code: result.status_code,
            message: result.message,
        });
    }

    Ok(result)
}
