//! Core client modules
//!
//! This module contains configuration, constants, logging, the annotator
//! abstraction, and the Validator client.

pub mod annotator;
pub mod client;
pub mod config;
pub mod constants;
pub mod logging;
