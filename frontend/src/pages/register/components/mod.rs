pub mod field;
pub mod messages;
