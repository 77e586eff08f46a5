pub mod booking;
pub mod catalog;
pub mod health;
pub mod ledger;
pub mod unit;
pub mod user;
pub mod v1;
