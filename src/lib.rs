//! DARA: server-rendered dataset catalog and marketing site.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod server;
pub mod views;
