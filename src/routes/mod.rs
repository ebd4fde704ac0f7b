pub mod candidates;
pub mod jobs;
pub mod pages;
pub mod reports;
