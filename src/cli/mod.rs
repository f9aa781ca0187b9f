//! CLI infrastructure for the ttt-oracle toolkit
//!
//! This module provides the command-line interface for generating the
//! training dataset, inspecting tree statistics, and solving individual
//! positions.

pub mod commands;
pub mod output;
