pub mod auction;
pub mod clock;
pub mod error;
pub mod event_store;
pub mod handlers;
pub mod ledger;
pub mod pricing;
pub mod query;
pub mod trading;
