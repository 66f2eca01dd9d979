pub mod send_apps_request;
