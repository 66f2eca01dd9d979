pub mod impl_share_result;
pub mod raw_ocs;
