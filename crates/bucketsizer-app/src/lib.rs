//! Application service layer - calculation use case, config, export

pub mod app;
pub mod config;
pub mod export;
pub mod repository;
