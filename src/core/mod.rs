pub mod jamo_mapper;
pub mod keystrokes;
pub mod unicode;
