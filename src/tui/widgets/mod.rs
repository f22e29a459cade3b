pub mod path;
pub mod spinner;
pub mod text_input;

pub use path::PathWidget;
pub use spinner::{Spinner, SpinnerWidget};
pub use text_input::{TextInput, TextInputWidget};
