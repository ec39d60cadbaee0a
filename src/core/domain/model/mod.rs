pub mod baremetal_node;
pub mod client_config;
pub mod ironic_connection;
pub mod ironic_session;
pub mod node;
pub mod port;
pub mod port_group;
pub mod resource;
