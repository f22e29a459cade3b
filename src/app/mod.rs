pub mod dispatch;

pub use dispatch::{build_analyzer, dispatch, run_analysis};
