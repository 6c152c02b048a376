pub mod navigation;
pub mod postings;
