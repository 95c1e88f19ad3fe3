pub mod element;
pub mod resubmission;
pub mod programme_submission;
pub mod response;
pub mod value;
