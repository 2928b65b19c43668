pub mod time;
pub mod treasury;
