pub mod company;
pub mod curriculum;
pub mod student;
