#![allow(dead_code)]

pub mod config;
pub mod mock_workers_ai;
pub mod server;
