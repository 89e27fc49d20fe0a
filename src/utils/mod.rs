// src/utils/mod.rs

pub mod auth;
pub mod extract;
pub mod html;
