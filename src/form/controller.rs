use serde::Serialize;
use tracing::{debug, info, warn};

use super::collaborators::{CloseNotifier, DEFAULT_SUBMIT_ERROR, ProjectSaver, SaveError};
use crate::db::models::project::ProjectDraft;
use crate::validation::project::{Field, FieldErrors, draft_errors};

pub const SUBMIT_LABEL: &str = "Create Project";
pub const SUBMITTING_LABEL: &str = "Creating Project...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormState {
    #[default]
    Idle,
    /// A save is outstanding; submit and cancel are disabled.
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Saved and reset to an empty draft.
    Saved,
    /// Field errors were found; nothing was saved.
    Invalid,
    /// The saver rejected the project; the draft is kept for a retry.
    Failed(String),
    /// Another save is still outstanding.
    Busy,
    /// The form is not open.
    Closed,
}

/// What the form shows right now.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView<'a> {
    pub draft: &'a ProjectDraft,
    pub errors: &'a FieldErrors,
    pub technology_input_error: Option<&'a str>,
    pub controls_disabled: bool,
    pub submit_label: &'static str,
}

/// Creation form for a single project.
///
/// Owns the draft, the current field errors and the submit state for one
/// editing session. Saving and closing are delegated to the caller's
/// collaborators.
#[derive(Debug, Default)]
pub struct ProjectForm {
    draft: ProjectDraft,
    errors: FieldErrors,
    state: FormState,
    open: bool,
    technology_input_error: Option<String>,
}

impl ProjectForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == FormState::Submitting
    }

    pub fn draft(&self) -> &ProjectDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.draft.title = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.draft.description = value.into();
    }

    pub fn set_image_url(&mut self, value: impl Into<String>) {
        self.draft.image_url = value.into();
    }

    pub fn set_project_url(&mut self, value: impl Into<String>) {
        self.draft.project_url = value.into();
    }

    pub fn set_github_url(&mut self, value: impl Into<String>) {
        self.draft.github_url = value.into();
    }

    /// Replaces the technology list, as edited by the tag input.
    pub fn set_technologies(&mut self, technologies: Vec<String>) {
        self.draft.technologies = technologies;
    }

    /// The tag input's own error, shown verbatim next to ours.
    pub fn set_technology_input_error(&mut self, error: Option<String>) {
        self.technology_input_error = error;
    }

    /// Recomputes the field errors from the current draft, replacing any
    /// earlier ones (including a previous submit failure).
    pub fn validate(&mut self) -> bool {
        self.errors = draft_errors(&self.draft);
        self.errors.is_empty()
    }

    pub fn reset(&mut self) {
        self.draft = ProjectDraft::default();
        self.errors = FieldErrors::new();
        self.state = FormState::Idle;
        self.technology_input_error = None;
    }

    /// Validates and saves the draft through `saver`, then resets on
    /// success or records the failure under [`Field::Submit`].
    pub async fn submit<S>(&mut self, saver: &S) -> SubmitOutcome
    where
        S: ProjectSaver + ?Sized,
    {
        let draft = match self.begin_submit() {
            Ok(draft) => draft,
            Err(outcome) => return outcome,
        };

        let result = {
            let _busy = BusyGuard::hold(&mut self.state);
            saver.save(&draft).await
        };

        self.finish_submit(result)
    }

    /// First half of [`submit`](Self::submit): validates and, when the
    /// draft is valid, moves to `Submitting` and hands back the record to
    /// save. While submitting, the controls are disabled until
    /// [`finish_submit`](Self::finish_submit) is called.
    pub fn begin_submit(&mut self) -> Result<ProjectDraft, SubmitOutcome> {
        if !self.open {
            return Err(SubmitOutcome::Closed);
        }
        if self.is_busy() {
            return Err(SubmitOutcome::Busy);
        }

        if !self.validate() {
            debug!(errors = self.errors.len(), "project draft has field errors");
            return Err(SubmitOutcome::Invalid);
        }

        self.state = FormState::Submitting;
        Ok(self.draft.clone())
    }

    /// Second half of [`submit`](Self::submit): applies the save result and
    /// always leaves the form `Idle`.
    pub fn finish_submit(&mut self, result: Result<(), SaveError>) -> SubmitOutcome {
        self.state = FormState::Idle;

        match result {
            Ok(()) => {
                info!(title = %self.draft.title, "project submitted");
                self.reset();
                SubmitOutcome::Saved
            }
            Err(err) => {
                let message = err.message().unwrap_or(DEFAULT_SUBMIT_ERROR).to_string();
                warn!(error = %message, "project submission failed");
                self.errors = FieldErrors::new();
                self.errors.insert(Field::Submit, message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Resets the form and notifies `notifier`. Returns `false`, doing
    /// nothing, while a save is outstanding.
    pub fn cancel<N>(&mut self, notifier: &mut N) -> bool
    where
        N: CloseNotifier + ?Sized,
    {
        if self.is_busy() {
            return false;
        }
        self.reset();
        notifier.closed();
        true
    }

    pub fn view(&self) -> Option<FormView<'_>> {
        if !self.open {
            return None;
        }
        let busy = self.is_busy();
        Some(FormView {
            draft: &self.draft,
            errors: &self.errors,
            technology_input_error: self.technology_input_error.as_deref(),
            controls_disabled: busy,
            submit_label: if busy { SUBMITTING_LABEL } else { SUBMIT_LABEL },
        })
    }
}

/// Returns the form to `Idle` when dropped, so a save future dropped
/// mid-flight does not leave the controls disabled.
struct BusyGuard<'a> {
    state: &'a mut FormState,
}

impl<'a> BusyGuard<'a> {
    fn hold(state: &'a mut FormState) -> Self {
        Self { state }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        *self.state = FormState::Idle;
    }
}
