pub mod node_info_response;
