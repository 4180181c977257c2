//! WellUp Library
//!
//! Wellness tracking: calorie estimates and meal logging, water intake, a
//! monthly event calendar, sleep, weekly exercise routines, personal care and
//! stress relief. Every area keeps one JSON collection in a key-value store.

pub mod build_info;
pub mod calendar;
pub mod error;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod store;
pub mod tools;
pub mod wellbeing;
