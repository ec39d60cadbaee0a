mod fixtures;
mod node_info_tests;
mod port_tests;
