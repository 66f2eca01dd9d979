use chrono::DateTime;

use crate::internal::apps::raw_xml::raw_ocs::{
    RawData, RawElement, RawMeta, RawOcs,
};
use crate::internal::apps::structs::{ShareElement, ShareResult};

pub trait ToShareResult {
    fn to_share_result(self) -> ShareResult;
}

fn empty_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn to_share_element(raw: RawElement) -> ShareElement {
    let RawElement {
        id,
        share_type,
        permissions,
        stime,
        uid_owner,
        path,
        item_type,
        token,
        url,
    } = raw;

    ShareElement {
        id: id.unwrap_or_default(),
        share_type,
        permissions,
        owner: empty_to_none(uid_owner),
        path: empty_to_none(path),
        item_type: empty_to_none(item_type),
        token: empty_to_none(token),
        url: empty_to_none(url),
        shared_at: stime.and_then(|secs| DateTime::from_timestamp(secs, 0)),
    }
}

impl ToShareResult for RawOcs {
    fn to_share_result(self) -> ShareResult {
        let RawOcs { meta, data } = self;
        let RawMeta { status, status_code, message } = meta;
        let RawData { id, url, elements } = data;

        ShareResult {
            status,
            status_code,
            message: message.unwrap_or_default(),
            id: id.unwrap_or_default(),
            url: empty_to_none(url),
            elements: elements.into_iter().map(to_share_element).collect(),
        }
    }
}
