pub mod bulk;
pub mod product;
pub mod server_info;
