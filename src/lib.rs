// src/lib.rs

pub mod config;
pub mod models;
pub mod report;
pub mod services;
