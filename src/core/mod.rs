pub mod backup;
pub mod calculator;
pub mod ledger;
pub mod recommend;
pub mod seed;
pub mod session;
pub mod taxonomy;
pub mod templates;
