pub mod builders;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use builders::{event, event_result, scored_prediction, unscored_prediction};
#[allow(unused_imports)]
pub use setup::{TestSetup, TestSetupBuilder};
