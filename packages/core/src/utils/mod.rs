//! Utility functions for WikiForum Core
//!
//! This module provides common utility functions used across the codebase.

mod data_attributes;

pub use data_attributes::{
    decode_attributes, encode_attributes, from_attribute_name, to_attribute_name, DATA_PREFIX,
};
