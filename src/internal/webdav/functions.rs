pub mod send_webdav_request;
