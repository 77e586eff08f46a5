pub mod auth;
pub mod blackout;
pub mod health;
pub mod ledger;
pub mod reservation;
pub mod unit;
pub mod user;
