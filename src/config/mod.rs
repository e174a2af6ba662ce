// src/config/mod.rs

pub mod options;
