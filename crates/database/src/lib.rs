// lib.rs - database models and query helpers shared by the api and admin binaries

pub mod configurations;
pub mod error;
