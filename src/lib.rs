pub mod app;
pub mod charge;
pub mod config;
pub mod editor;
pub mod field;
pub mod init_config;
pub mod renderer;
