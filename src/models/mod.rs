pub mod history;
pub mod receipt;
pub mod session;
pub mod spot;
