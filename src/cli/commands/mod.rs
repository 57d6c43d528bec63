pub mod backup;
pub mod check;
pub mod checkin;
pub mod checkout;
pub mod export;
pub mod init;
pub mod menu;
pub mod search;
pub mod status;
