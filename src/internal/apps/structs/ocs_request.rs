use reqwest::Method;
use url::Url;

use crate::internal::apps::enums::OcsApiVersion;

/// 一次 OCS 请求的全部参数
#[derive(Debug, Clone)]
pub struct OcsRequest {
    pub method: Method,
    pub url: Url,
    pub version: OcsApiVersion,
    /// 表单字段，为空时不带请求体
    pub form: Vec<(&'static str, String)>,
    pub query: Vec<(&'static str, String)>,
}

impl OcsRequest {
    pub fn new(method: Method, url: Url, version: OcsApiVersion) -> Self {
        Self { method, url, version, form: Vec::new(), query: Vec::new() }
    }

    pub fn form_field(mut self, key: &'static str, value: impl ToString) -> Self {
        self.form.push((key, value.to_string()));
        self
    }

    pub fn query_param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }
}
