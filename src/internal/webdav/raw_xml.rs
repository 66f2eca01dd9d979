pub mod raw_dav_error;
