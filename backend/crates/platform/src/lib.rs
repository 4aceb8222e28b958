//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, PHC string format)
//! - Image preprocessing for the prediction gateway

pub mod imageops;
pub mod password;
