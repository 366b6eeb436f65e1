pub mod delete;
pub mod entry;
pub mod export;
pub mod init;
pub mod list;
pub mod show;
pub mod status;
