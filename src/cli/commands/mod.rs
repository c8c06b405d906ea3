//! CLI command implementations

pub mod create_client;
pub mod cross_border_id;
pub mod register;
pub mod summary;
pub mod validate;
