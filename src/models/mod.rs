pub mod activity;
pub mod classification;
pub mod coverage;
pub mod day_summary;
pub mod location;
pub mod recommendation;
pub mod taxonomy;
pub mod template;
