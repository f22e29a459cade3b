//! Mode-aware presentation: reducer, projection and the session that drives them.

pub mod mode;
pub mod session;
pub mod state;
pub mod view;

pub use mode::{Mode, ModeSlice};
pub use session::Session;
pub use state::{AnalysisStatus, Effect, Event, RequestSeq, ViewState, reduce};
pub use view::{PathView, ScenarioChip, StepView, ViewModel, project, project_as};
