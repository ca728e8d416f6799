pub mod reader;
pub mod validity;
