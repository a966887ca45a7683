pub mod config_file;
pub mod inspector;
pub mod sqs;
