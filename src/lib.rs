//! Bitwise - Five-number analysis service
//!
//! This crate analyzes five numbers (negatives, average, positive-count
//! parity, values above ten) and keeps an optional history of submissions
//! in a document store.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
