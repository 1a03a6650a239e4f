//! Multi-step form engine.
//!
//! Drives a fixed sequence of steps that together build one submission.
//! `next()` gates on the current step's validation, `prev()` never does,
//! and the final step hands over to an async submission started with
//! [`MultiStepForm::begin_submit`] and closed with [`MultiStepForm::finish_submit`].
//!
//! The engine is UI-agnostic: view models keep it inside a signal and
//! domain modules add their own field setters with inherent `impl` blocks.

use super::validation::ValidationErrors;

/// Pure validator: (1-based step, form) → errors for that step only
pub type StepValidator<F> = fn(usize, &F) -> ValidationErrors;

/// Why a submit request did not start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A submission is already in flight
    AlreadySubmitting,
    /// Submit is only available on the last step
    NotFinalStep,
    /// The final step has field errors (now in `errors`)
    Invalid,
}

#[derive(Clone)]
pub struct MultiStepForm<F> {
    step: usize,
    total_steps: usize,
    pub form: F,
    pub errors: ValidationErrors,
    submitting: bool,
    validator: StepValidator<F>,
}

impl<F: std::fmt::Debug> std::fmt::Debug for MultiStepForm<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiStepForm")
            .field("step", &self.step)
            .field("total_steps", &self.total_steps)
            .field("form", &self.form)
            .field("errors", &self.errors)
            .field("submitting", &self.submitting)
            .finish_non_exhaustive()
    }
}

impl<F> MultiStepForm<F> {
    pub fn new(form: F, total_steps: usize, validator: StepValidator<F>) -> Self {
        Self {
            step: 1,
            total_steps: total_steps.max(1),
            form,
            errors: ValidationErrors::new(),
            submitting: false,
            validator,
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn is_first_step(&self) -> bool {
        self.step == 1
    }

    pub fn is_final_step(&self) -> bool {
        self.step == self.total_steps
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate the given step against the current form without touching state
    pub fn validate(&self, step: usize) -> ValidationErrors {
        (self.validator)(step, &self.form)
    }

    /// Validate the current step; advance when it is clean.
    ///
    /// The error map is replaced by the current step's result, so the map
    /// never carries entries from a step the user is not looking at.
    /// Returns `true` when the step advanced.
    pub fn next(&mut self) -> bool {
        self.errors = self.validate(self.step);
        if !self.errors.is_empty() {
            return false;
        }
        if self.step < self.total_steps {
            self.step += 1;
            true
        } else {
            false
        }
    }

    /// Go back one step, no validation
    pub fn prev(&mut self) {
        if self.step > 1 {
            self.step -= 1;
        }
    }

    /// Clear one field's error; called on that field's next edit
    pub fn clear_error(&mut self, key: &str) {
        self.errors.remove(key);
    }

    /// Re-validate the final step and mark the form as submitting
    pub fn begin_submit(&mut self) -> Result<(), SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::AlreadySubmitting);
        }
        if !self.is_final_step() {
            return Err(SubmitBlocked::NotFinalStep);
        }
        self.errors = self.validate(self.step);
        if !self.errors.is_empty() {
            return Err(SubmitBlocked::Invalid);
        }
        self.submitting = true;
        Ok(())
    }

    /// Close a submission started with [`Self::begin_submit`].
    ///
    /// On success the form is replaced with `fresh` and the engine returns
    /// to step 1; on failure everything the user typed stays in place.
    pub fn finish_submit(&mut self, succeeded: bool, fresh: impl FnOnce() -> F) {
        self.submitting = false;
        if succeeded {
            self.form = fresh();
            self.errors = ValidationErrors::new();
            self.step = 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default)]
    struct Signup {
        email: String,
        plan: String,
    }

    fn validate_signup(step: usize, form: &Signup) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        match step {
            1 if form.email.is_empty() => errors.insert("email", "Email is required"),
            2 if form.plan.is_empty() => errors.insert("plan", "Plan is required"),
            _ => {}
        }
        errors
    }

    fn engine() -> MultiStepForm<Signup> {
        MultiStepForm::new(Signup::default(), 2, validate_signup)
    }

    #[test]
    fn next_blocks_on_current_step_errors() {
        let mut w = engine();
        assert!(!w.next());
        assert_eq!(w.step(), 1);
        assert_eq!(w.errors.get("email"), Some("Email is required"));

        w.form.email = "a@b.c".into();
        assert!(w.next());
        assert_eq!(w.step(), 2);
        assert!(w.errors.is_empty());
    }

    #[test]
    fn prev_never_validates_and_floors_at_one() {
        let mut w = engine();
        w.prev();
        assert_eq!(w.step(), 1);
        w.form.email = "a@b.c".into();
        w.next();
        w.form.email.clear();
        w.prev();
        assert_eq!(w.step(), 1);
        assert!(w.errors.is_empty());
    }

    #[test]
    fn next_does_not_run_past_last_step() {
        let mut w = engine();
        w.form.email = "a@b.c".into();
        w.form.plan = "pro".into();
        assert!(w.next());
        assert!(!w.next());
        assert_eq!(w.step(), 2);
    }

    #[test]
    fn begin_submit_requires_final_step_and_clean_form() {
        let mut w = engine();
        assert_eq!(w.begin_submit(), Err(SubmitBlocked::NotFinalStep));

        w.form.email = "a@b.c".into();
        w.next();
        assert_eq!(w.begin_submit(), Err(SubmitBlocked::Invalid));
        assert!(w.errors.contains("plan"));
        assert!(!w.is_submitting());

        w.form.plan = "pro".into();
        assert_eq!(w.begin_submit(), Ok(()));
        assert!(w.is_submitting());
        assert_eq!(w.begin_submit(), Err(SubmitBlocked::AlreadySubmitting));
    }

    #[test]
    fn failed_submission_keeps_form_populated() {
        let mut w = engine();
        w.form.email = "a@b.c".into();
        w.next();
        w.form.plan = "pro".into();
        w.begin_submit().unwrap();
        w.finish_submit(false, Signup::default);
        assert!(!w.is_submitting());
        assert_eq!(w.step(), 2);
        assert_eq!(w.form.plan, "pro");
    }

    #[test]
    fn successful_submission_resets_to_first_step() {
        let mut w = engine();
        w.form.email = "a@b.c".into();
        w.next();
        w.form.plan = "pro".into();
        w.begin_submit().unwrap();
        w.finish_submit(true, Signup::default);
        assert_eq!(w.step(), 1);
        assert!(w.form.email.is_empty());
    }
}
