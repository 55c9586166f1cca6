pub mod add;
pub mod audit;
pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod restore;
pub mod settings;
pub mod status;
pub mod target;
