pub mod clear;
pub mod error;
pub mod issue;
pub mod live;
pub mod validate;
