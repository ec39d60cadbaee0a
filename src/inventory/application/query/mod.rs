pub mod node_info_query;
