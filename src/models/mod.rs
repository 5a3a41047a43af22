pub mod approved;
pub mod review;
