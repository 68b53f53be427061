//! Drinkdex Library
//!
//! Drink recipe ingredient normalization: parsing, serving scaling and metric
//! display.

pub mod build_info;
pub mod config;
pub mod mcp;
pub mod measure;
pub mod tools;
pub mod view;
