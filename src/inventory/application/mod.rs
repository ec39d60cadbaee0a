pub mod query;
pub mod response;
pub mod service;
