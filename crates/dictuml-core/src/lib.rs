//! Dictuml Core Types and Definitions
//!
//! This crate provides the foundational types shared by the dictuml library
//! and command-line tool. It includes:
//!
//! - **Values**: The dynamically-typed input tree ([`value::Value`])
//! - **Model**: Flattened class records and containment edges ([`model`] module)

pub mod model;
pub mod value;
