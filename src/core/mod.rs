pub mod fees;
pub mod reconcile;
pub mod service;
