//! Bucket sizing domain: reference models, selection engine and productivity projection

pub mod model;
pub mod repository;
pub mod service;
