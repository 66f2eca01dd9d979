pub mod cloud_client;
