pub mod config;
pub mod confirmation;
pub mod error;
pub mod field_rule;
pub mod form;
