pub mod application;
pub mod employee;
pub mod status;
