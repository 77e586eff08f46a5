pub mod blackout;
pub mod ledger;
pub mod reservation;
pub mod unit;
pub mod user;
