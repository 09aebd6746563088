//! Dynamic row model for HRMS list screens
//!
//! List screens (employees, attendance, leave requests, password-reset
//! requests) receive rows as loosely-shaped field maps. This crate provides
//! the dynamic [`Value`]/[`Record`] types those screens share, with typed
//! accessors for the fields a screen actually understands.

mod error;
mod record;
mod value;

pub use error::FieldError;
pub use record::Record;
pub use value::Value;
