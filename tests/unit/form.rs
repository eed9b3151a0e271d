use std::sync::Mutex;

use async_trait::async_trait;
use portfolio_projects::db::models::ProjectDraft;
use portfolio_projects::form::{
    DEFAULT_SUBMIT_ERROR, FormState, ProjectForm, ProjectSaver, SUBMIT_LABEL, SUBMITTING_LABEL,
    SaveError, SubmitOutcome,
};
use portfolio_projects::validation::Field;

/// Records every project it is asked to save and answers with a fixed result.
struct RecordingSaver {
    calls: Mutex<Vec<ProjectDraft>>,
    result: Result<(), SaveError>,
}

impl RecordingSaver {
    fn succeeding() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            result: Ok(()),
        }
    }

    fn failing(error: SaveError) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            result: Err(error),
        }
    }

    fn calls(&self) -> Vec<ProjectDraft> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProjectSaver for RecordingSaver {
    async fn save(&self, project: &ProjectDraft) -> Result<(), SaveError> {
        self.calls.lock().unwrap().push(project.clone());
        self.result.clone()
    }
}

fn filled_form() -> ProjectForm {
    let mut form = ProjectForm::new();
    form.open();
    form.set_title("Weather Dashboard");
    form.set_description("A responsive weather dashboard using external APIs.");
    form.set_image_url("/project3.jpg");
    form.set_project_url("https://weather-dash.vercel.app");
    form.set_github_url("https://github.com/yourusername/weather-dashboard");
    form.set_technologies(vec!["JavaScript".into(), "Chart.js".into()]);
    form
}

#[tokio::test]
async fn valid_submit_saves_once_and_resets() {
    let mut form = filled_form();
    let expected = form.draft().clone();
    let saver = RecordingSaver::succeeding();

    let outcome = form.submit(&saver).await;

    assert_eq!(outcome, SubmitOutcome::Saved);
    assert_eq!(saver.calls(), vec![expected]);
    assert_eq!(form.draft(), &ProjectDraft::default());
    assert!(form.errors().is_empty());
    assert_eq!(form.state(), FormState::Idle);
    assert!(form.is_open());
}

#[tokio::test]
async fn failed_submit_keeps_draft_and_reports_message() {
    let mut form = filled_form();
    let entered = form.draft().clone();
    let saver = RecordingSaver::failing(SaveError::new("Network error"));

    let outcome = form.submit(&saver).await;

    assert_eq!(outcome, SubmitOutcome::Failed("Network error".into()));
    assert_eq!(form.errors().get(Field::Submit), Some("Network error"));
    assert_eq!(form.errors().len(), 1);
    assert_eq!(form.draft(), &entered);
    assert!(!form.is_busy());
}

#[tokio::test]
async fn failure_without_message_uses_default_text() {
    let mut form = filled_form();

    for error in [SaveError::without_message(), SaveError::new("")] {
        let saver = RecordingSaver::failing(error);
        let outcome = form.submit(&saver).await;
        assert_eq!(outcome, SubmitOutcome::Failed(DEFAULT_SUBMIT_ERROR.into()));
        assert_eq!(form.errors().get(Field::Submit), Some(DEFAULT_SUBMIT_ERROR));
    }
}

#[tokio::test]
async fn second_failure_replaces_submit_message() {
    let mut form = filled_form();

    let first = RecordingSaver::failing(SaveError::new("Network error"));
    form.submit(&first).await;
    assert_eq!(form.errors().get(Field::Submit), Some("Network error"));

    let second = RecordingSaver::failing(SaveError::new("Service unavailable"));
    let outcome = form.submit(&second).await;

    assert_eq!(outcome, SubmitOutcome::Failed("Service unavailable".into()));
    assert_eq!(form.errors().get(Field::Submit), Some("Service unavailable"));
    assert_eq!(form.errors().len(), 1);
}

#[tokio::test]
async fn retry_after_failure_can_succeed() {
    let mut form = filled_form();

    let failing = RecordingSaver::failing(SaveError::new("Network error"));
    assert!(matches!(form.submit(&failing).await, SubmitOutcome::Failed(_)));

    let saver = RecordingSaver::succeeding();
    assert_eq!(form.submit(&saver).await, SubmitOutcome::Saved);
    assert_eq!(saver.calls().len(), 1);
    assert!(form.errors().is_empty());
}

#[tokio::test]
async fn invalid_submit_never_calls_saver() {
    let mut form = filled_form();
    form.set_title("  ");
    let saver = RecordingSaver::succeeding();

    let outcome = form.submit(&saver).await;

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert!(saver.calls().is_empty());
    assert!(form.errors().contains(Field::Title));
    assert_eq!(form.state(), FormState::Idle);
    assert_eq!(form.draft().title, "  ");
}

#[tokio::test]
async fn hidden_form_ignores_submit() {
    let mut form = filled_form();
    form.close();
    let saver = RecordingSaver::succeeding();

    assert_eq!(form.submit(&saver).await, SubmitOutcome::Closed);
    assert!(saver.calls().is_empty());
    assert!(form.view().is_none());
}

#[tokio::test]
async fn validate_replaces_previous_errors() {
    let mut form = filled_form();
    let failing = RecordingSaver::failing(SaveError::new("Network error"));
    form.submit(&failing).await;
    assert!(form.errors().contains(Field::Submit));

    form.set_technologies(Vec::new());
    assert!(!form.validate());
    assert!(!form.errors().contains(Field::Submit));
    assert_eq!(
        form.errors().get(Field::Technologies),
        Some("At least one technology is required")
    );

    form.set_technologies(vec!["Rust".into()]);
    assert!(form.validate());
    assert!(form.errors().is_empty());
}

#[test]
fn cancel_resets_and_notifies_even_when_invalid() {
    let mut form = filled_form();
    form.set_project_url("/relative");
    form.set_technology_input_error(Some("Duplicate technology".into()));
    assert!(!form.validate());

    let mut closed = 0;
    assert!(form.cancel(&mut || closed += 1));

    assert_eq!(closed, 1);
    assert_eq!(form.draft(), &ProjectDraft::default());
    assert!(form.errors().is_empty());
    assert_eq!(form.view().unwrap().technology_input_error, None);
}

#[test]
fn view_shows_both_technology_errors() {
    let mut form = ProjectForm::new();
    form.open();
    form.set_technology_input_error(Some("Technology already added".into()));
    form.validate();

    let view = form.view().unwrap();
    assert_eq!(view.technology_input_error, Some("Technology already added"));
    assert_eq!(
        view.errors.get(Field::Technologies),
        Some("At least one technology is required")
    );
    assert_eq!(view.submit_label, "Create Project");
}

#[test]
fn controls_are_disabled_while_saving() {
    let mut form = filled_form();

    let record = form.begin_submit().unwrap();
    assert_eq!(&record, form.draft());
    assert_eq!(form.state(), FormState::Submitting);

    let view = form.view().unwrap();
    assert!(view.controls_disabled);
    assert_eq!(view.submit_label, SUBMITTING_LABEL);

    assert_eq!(form.finish_submit(Ok(())), SubmitOutcome::Saved);
    let view = form.view().unwrap();
    assert!(!view.controls_disabled);
    assert_eq!(view.submit_label, SUBMIT_LABEL);
    assert_eq!(view.draft, &ProjectDraft::default());
}

#[tokio::test]
async fn submit_and_cancel_are_refused_while_saving() {
    let mut form = filled_form();
    let entered = form.draft().clone();
    form.begin_submit().unwrap();

    let saver = RecordingSaver::succeeding();
    assert_eq!(form.submit(&saver).await, SubmitOutcome::Busy);
    assert_eq!(form.begin_submit(), Err(SubmitOutcome::Busy));
    assert!(saver.calls().is_empty());

    let mut closed = 0;
    assert!(!form.cancel(&mut || closed += 1));
    assert_eq!(closed, 0);
    assert_eq!(form.draft(), &entered);
    assert!(form.is_busy());

    let outcome = form.finish_submit(Err(SaveError::new("Network error")));
    assert_eq!(outcome, SubmitOutcome::Failed("Network error".into()));
    assert!(!form.is_busy());
    assert_eq!(form.draft(), &entered);
    assert!(form.cancel(&mut || closed += 1));
    assert_eq!(closed, 1);
}

#[test]
fn begin_submit_rejects_invalid_or_hidden_form() {
    let mut form = filled_form();
    form.set_description("");
    assert_eq!(form.begin_submit(), Err(SubmitOutcome::Invalid));
    assert!(!form.is_busy());

    form.set_description("Back again");
    form.close();
    assert_eq!(form.begin_submit(), Err(SubmitOutcome::Closed));
    assert!(!form.is_busy());
}
