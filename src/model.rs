pub mod application;
pub mod employee;
