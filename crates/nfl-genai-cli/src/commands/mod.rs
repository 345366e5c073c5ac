pub mod catalog;
pub mod prompt;
pub mod resolve;
pub mod session;
