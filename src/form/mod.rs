pub mod collaborators;
pub mod controller;

pub use collaborators::{CloseNotifier, DEFAULT_SUBMIT_ERROR, ProjectSaver, SaveError};
pub use controller::{FormState, FormView, ProjectForm, SUBMIT_LABEL, SUBMITTING_LABEL, SubmitOutcome};
