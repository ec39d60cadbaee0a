pub mod api_client;
pub mod baremetal_api;
pub mod clouds_config;
