pub mod coverage;
pub mod summary;
