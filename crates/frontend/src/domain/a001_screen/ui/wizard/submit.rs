//! Submission of a finished screen draft.
//!
//! The screen, its cabinets and (for `Module` screens) their modules are
//! created by separate calls issued strictly in that order. The first
//! failure stops the sequence and everything created before it stays.

use async_trait::async_trait;
use contracts::domain::a001_screen::aggregate::{
    CreateCabinetDto, CreateModuleDto, CreateScreenForm,
};
use thiserror::Error;

use super::model::ScreenDraft;
use super::validation::build_submission;
use crate::shared::api_utils::ApiError;
use crate::shared::validation::ValidationErrors;

pub const INVALID_MESSAGE: &str = "Please fix the highlighted fields";

/// Backend operations the wizard needs
#[async_trait(?Send)]
pub trait ScreenGateway {
    /// Multipart upload of the screen fields and its three files
    async fn create_screen(&self, form: &CreateScreenForm) -> Result<(), ApiError>;

    async fn create_cabinet(&self, cabinet: &CreateCabinetDto) -> Result<(), ApiError>;

    async fn create_module(&self, module: &CreateModuleDto) -> Result<(), ApiError>;
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("draft has {} invalid field(s)", .0.len())]
    Invalid(ValidationErrors),
    #[error("creating the screen failed: {0}")]
    Screen(#[source] ApiError),
    #[error("creating cabinet #{} failed: {source}", .index + 1)]
    Cabinet { index: usize, source: ApiError },
    #[error("creating module #{} failed: {source}", .index + 1)]
    Module { index: usize, source: ApiError },
}

impl SubmitError {
    /// Toast text for this failure
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Invalid(_) => INVALID_MESSAGE.to_string(),
            SubmitError::Screen(e) => e.user_message(),
            SubmitError::Cabinet { source, .. } | SubmitError::Module { source, .. } => {
                source.user_message()
            }
        }
    }
}

/// What was created by a successful submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitReport {
    pub cabinets: usize,
    pub modules: usize,
}

pub async fn submit_screen<G>(gateway: &G, draft: &ScreenDraft) -> Result<SubmitReport, SubmitError>
where
    G: ScreenGateway + ?Sized,
{
    let submission = build_submission(draft).map_err(SubmitError::Invalid)?;

    log::debug!("creating screen '{}'", submission.screen.name);
    gateway
        .create_screen(&submission.screen)
        .await
        .map_err(SubmitError::Screen)?;

    for (index, cabinet) in submission.cabinets.iter().enumerate() {
        gateway
            .create_cabinet(cabinet)
            .await
            .map_err(|source| SubmitError::Cabinet { index, source })?;
    }

    for (index, module) in submission.modules.iter().enumerate() {
        gateway
            .create_module(module)
            .await
            .map_err(|source| SubmitError::Module { index, source })?;
    }

    Ok(SubmitReport {
        cabinets: submission.cabinets.len(),
        modules: submission.modules.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_screen::ui::wizard::model::ModuleDraft;
    use crate::domain::a001_screen::ui::wizard::state::new_screen_wizard;
    use crate::domain::a001_screen::ui::wizard::validation::tests::complete_draft;
    use crate::shared::wizard::SubmitBlocked;
    use contracts::domain::a001_screen::aggregate::Solution;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Screen(String),
        Cabinet(String),
        Module(String),
    }

    /// Records calls; fails the n-th call (0-based) when asked to
    #[derive(Default)]
    struct RecordingGateway {
        calls: RefCell<Vec<Call>>,
        fail_at: Option<usize>,
    }

    impl RecordingGateway {
        fn failing_at(index: usize) -> Self {
            Self {
                fail_at: Some(index),
                ..Self::default()
            }
        }

        fn record(&self, call: Call) -> Result<(), ApiError> {
            let mut calls = self.calls.borrow_mut();
            let index = calls.len();
            calls.push(call);
            if self.fail_at == Some(index) {
                Err(ApiError::Server {
                    status: 422,
                    message: Some("Batch number already registered".into()),
                })
            } else {
                Ok(())
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl ScreenGateway for RecordingGateway {
        async fn create_screen(&self, form: &CreateScreenForm) -> Result<(), ApiError> {
            self.record(Call::Screen(form.name.clone()))
        }

        async fn create_cabinet(&self, cabinet: &CreateCabinetDto) -> Result<(), ApiError> {
            self.record(Call::Cabinet(cabinet.kind.clone()))
        }

        async fn create_module(&self, module: &CreateModuleDto) -> Result<(), ApiError> {
            self.record(Call::Module(module.batch_number.clone()))
        }
    }

    fn two_cabinet_module_draft() -> ScreenDraft {
        let mut d = complete_draft(Solution::Module);
        let key = d.push_cabinet();
        let c = d.cabinet_mut(key).unwrap();
        c.quantity = "6".into();
        c.height = "0.5".into();
        c.width = "1".into();
        c.kind = "Front service".into();
        c.module = ModuleDraft {
            quantity: "8".into(),
            height: "0.25".into(),
            width: "0.25".into(),
            batch_number: "B-3001".into(),
        };
        d
    }

    #[test]
    fn calls_are_issued_in_order() {
        let gateway = RecordingGateway::default();
        let report = block_on(submit_screen(&gateway, &two_cabinet_module_draft())).unwrap();
        assert_eq!(report, SubmitReport { cabinets: 2, modules: 2 });
        assert_eq!(
            gateway.calls(),
            vec![
                Call::Screen("Mall Atrium".into()),
                Call::Cabinet("Die-cast".into()),
                Call::Cabinet("Front service".into()),
                Call::Module("B-2291".into()),
                Call::Module("B-3001".into()),
            ]
        );
    }

    #[test]
    fn cabinet_solution_never_creates_modules() {
        let gateway = RecordingGateway::default();
        let report = block_on(submit_screen(&gateway, &complete_draft(Solution::Cabinet))).unwrap();
        assert_eq!(report.modules, 0);
        assert!(gateway
            .calls()
            .iter()
            .all(|c| !matches!(c, Call::Module(_))));
    }

    #[test]
    fn module_failure_leaves_earlier_creations_committed() {
        // screen, cabinet, cabinet, module #1 fails
        let gateway = RecordingGateway::failing_at(3);
        let err = block_on(submit_screen(&gateway, &two_cabinet_module_draft())).unwrap_err();

        assert!(matches!(err, SubmitError::Module { index: 0, .. }));
        assert_eq!(err.user_message(), "Batch number already registered");
        let calls = gateway.calls();
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[0], Call::Screen("Mall Atrium".into()));
        assert!(!calls.contains(&Call::Module("B-3001".into())));
    }

    #[test]
    fn screen_failure_stops_before_cabinets() {
        let gateway = RecordingGateway::failing_at(0);
        let err = block_on(submit_screen(&gateway, &complete_draft(Solution::Cabinet))).unwrap_err();
        assert!(matches!(err, SubmitError::Screen(_)));
        assert_eq!(gateway.calls().len(), 1);
    }

    #[test]
    fn invalid_draft_issues_no_calls() {
        let gateway = RecordingGateway::default();
        let err = block_on(submit_screen(&gateway, &ScreenDraft::new())).unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(_)));
        assert!(gateway.calls().is_empty());
    }

    #[test]
    fn empty_modules_block_submit_on_the_last_step() {
        let mut w = new_screen_wizard();
        w.form = complete_draft(Solution::Module);
        w.form.cabinets[0].module = ModuleDraft::default();
        assert!(w.next());
        assert!(w.next());
        assert!(w.next());
        assert!(w.is_final_step());

        assert_eq!(w.begin_submit(), Err(SubmitBlocked::Invalid));
        assert_eq!(w.errors.len(), 4);
        assert!(!w.is_submitting());

        // the view model only submits after begin_submit succeeded, so the
        // gateway is never reached; the draft itself is refused as well
        let gateway = RecordingGateway::default();
        let result = block_on(submit_screen(&gateway, &w.form));
        assert!(matches!(result, Err(SubmitError::Invalid(_))));
        assert!(gateway.calls().is_empty());
    }

    #[test]
    fn failed_submission_keeps_the_draft() {
        let mut w = new_screen_wizard();
        w.form = complete_draft(Solution::Cabinet);
        w.next();
        w.next();
        w.next();
        w.begin_submit().unwrap();

        let gateway = RecordingGateway::failing_at(1);
        let result = block_on(submit_screen(&gateway, &w.form));
        w.finish_submit(result.is_ok(), ScreenDraft::new);

        assert_eq!(w.step(), 4);
        assert_eq!(w.form.name, "Mall Atrium");
        assert!(!w.is_submitting());
    }
}
