//! API data models
//!
//! This module contains data structures for the Validator annotation API.

pub mod annotation;
