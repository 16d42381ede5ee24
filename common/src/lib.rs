pub mod error;
pub mod subject_observer;
