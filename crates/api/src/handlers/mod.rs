pub mod classroom;
pub mod employee;
pub mod payment;
pub mod program;
pub mod student;
