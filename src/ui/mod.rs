pub mod progress;
pub mod report;

pub use progress::create_spinner;
pub use report::Reporter;
