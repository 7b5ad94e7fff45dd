//! RC Beam Chat - Conversational reinforced-concrete beam design assistant
//!
//! This crate extracts beam design parameters from chat turns, collects
//! missing inputs across turns, and runs an iterative regression pipeline
//! once the required inputs are complete.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
