//! Core domain types
//!
//! This module contains the structures shared between the list manager,
//! the submission controller and the front ends that drive them.

pub mod repository;
pub mod submission;
