pub mod custom_error;
pub mod error_code;
pub mod parent_watch;
