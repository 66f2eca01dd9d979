pub mod ocs_request;
pub mod share_result;

pub use ocs_request::OcsRequest;
pub use share_result::{ShareElement, ShareResult};
