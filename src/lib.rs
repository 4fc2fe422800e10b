//! Salary engine for workers employed in South Korea under the Employment
//! Permit System (EPS).
//!
//! This crate computes monthly gross pay from hours worked, applies either
//! itemized or flat-rate insurance deductions, derives net pay, estimates
//! statutory severance, converts KRW into USD and KHR, and renders results
//! for display in English or Khmer.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
