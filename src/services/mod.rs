// src/services/mod.rs
pub mod signup;
