use std::{
    collections::{BTreeMap, BTreeSet},
    future::{poll_fn, Future},
    pin::pin,
    task::Poll,
    time::Duration,
};

use super::{
    validate, ContactSubmission, Field, SubmitBlocked, SubmitError, Submitter, MESSAGE_MAX,
};

/// How long the confirmation stays up before the form resets itself.
pub const CONFIRMATION_DISPLAY: Duration = Duration::from_secs(8);

/// Longest a send may take before the form gives up on it.
pub const SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// State of one contact form session.
///
/// Errors are computed on blur and on submit, and cleared as soon as the user edits a field
/// whose error is showing. An error is only visible once its field has been touched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    values: BTreeMap<Field, String>,
    errors: BTreeMap<Field, &'static str>,
    touched: BTreeSet<Field>,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Edits are ignored while a message is in flight or the confirmation is up.
    pub fn accepts_input(&self) -> bool {
        matches!(
            self.status,
            SubmissionStatus::Idle | SubmissionStatus::Failed(_)
        )
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// The stored error, whether or not the user has seen it yet.
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        if self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    /// Counted the way validation counts it, surrounding whitespace excluded.
    pub fn message_len(&self) -> usize {
        self.value(Field::Message).trim().chars().count()
    }

    pub fn message_counter(&self) -> String {
        format!("{}/{}", self.message_len(), MESSAGE_MAX)
    }

    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        if !self.accepts_input() {
            return;
        }
        self.values.insert(field, value.into());
        if self.visible_error(field).is_some() {
            self.errors.remove(&field);
        }
    }

    pub fn blur(&mut self, field: Field) {
        if !self.accepts_input() {
            return;
        }
        self.touched.insert(field);
        self.revalidate(field);
    }

    fn revalidate(&mut self, field: Field) {
        match validate(field, self.value(field)) {
            Some(e) => self.errors.insert(field, e),
            None => self.errors.remove(&field),
        };
    }

    /// Validates every field and, if all pass, moves to `Submitting`.
    ///
    /// A previous failure reason is dropped whatever the outcome.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, SubmitBlocked> {
        match self.status {
            SubmissionStatus::Submitting => return Err(SubmitBlocked::InFlight),
            SubmissionStatus::Succeeded => return Err(SubmitBlocked::ConfirmationShowing),
            SubmissionStatus::Idle | SubmissionStatus::Failed(_) => {}
        }
        self.status = SubmissionStatus::Idle;
        for field in Field::VALIDATED {
            self.touched.insert(field);
            self.revalidate(field);
        }
        if let Some(field) = Field::VALIDATED
            .into_iter()
            .find(|f| self.errors.contains_key(f))
        {
            return Err(SubmitBlocked::Invalid(field));
        }
        self.status = SubmissionStatus::Submitting;
        Ok(self.submission())
    }

    pub fn submission(&self) -> ContactSubmission {
        let project_type = self.value(Field::ProjectType).trim();
        ContactSubmission {
            name: self.value(Field::Name).trim().to_string(),
            email: self.value(Field::Email).trim().to_string(),
            message: self.value(Field::Message).trim().to_string(),
            project_type: (!project_type.is_empty()).then(|| project_type.to_string()),
        }
    }

    /// Records the outcome of the send started by [`ContactForm::begin_submit`].
    ///
    /// Success clears the form. Failure keeps every value so the user can resend as is.
    pub fn complete_submit(&mut self, result: Result<(), SubmitError>) {
        if !self.is_submitting() {
            log::warn!("submission result arrived while not submitting; dropped");
            return;
        }
        match result {
            Ok(()) => {
                self.values.clear();
                self.errors.clear();
                self.touched.clear();
                self.status = SubmissionStatus::Succeeded;
            }
            Err(e) => {
                log::warn!("contact submission failed: {e}");
                self.status = SubmissionStatus::Failed(e.user_reason());
            }
        }
    }

    /// Called once [`CONFIRMATION_DISPLAY`] has passed after a success.
    pub fn confirmation_elapsed(&mut self) {
        if self.status == SubmissionStatus::Succeeded {
            *self = Self::default();
        }
    }
}

/// Somewhere a [`ContactForm`] lives while a send runs across await points.
pub trait FormSlot {
    /// Applies `f` to the form, or returns `None` once the form is gone.
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R>;
}

/// Runs one submit from the click through to the reset after the confirmation.
///
/// `sleep` provides the timers: the send is abandoned as [`SubmitError::TimedOut`] after
/// [`SUBMIT_TIMEOUT`], and a success is reset after [`CONFIRMATION_DISPLAY`]. When the slot
/// goes away part way through, the remaining steps are skipped.
pub async fn run_submission<F, S, D, T>(
    slot: &F,
    submitter: &S,
    sleep: D,
) -> Result<(), SubmitBlocked>
where
    F: FormSlot,
    S: Submitter,
    D: Fn(Duration) -> T,
    T: Future<Output = ()>,
{
    let Some(attempt) = slot.with_form(ContactForm::begin_submit) else {
        return Ok(());
    };
    let submission = attempt?;
    let result = before_deadline(submitter.submit(&submission), sleep(SUBMIT_TIMEOUT))
        .await
        .unwrap_or(Err(SubmitError::TimedOut));
    let succeeded = slot.with_form(|f| {
        f.complete_submit(result);
        *f.status() == SubmissionStatus::Succeeded
    });
    if succeeded == Some(true) {
        sleep(CONFIRMATION_DISPLAY).await;
        slot.with_form(ContactForm::confirmation_elapsed);
    }
    Ok(())
}

/// Output of `work`, or `None` if `deadline` finished first. `work` is dropped on expiry.
async fn before_deadline<W, D>(work: W, deadline: D) -> Option<W::Output>
where
    W: Future,
    D: Future<Output = ()>,
{
    let mut work = pin!(work);
    let mut deadline = pin!(deadline);
    poll_fn(|cx| {
        if let Poll::Ready(out) = work.as_mut().poll(cx) {
            return Poll::Ready(Some(out));
        }
        deadline.as_mut().poll(cx).map(|()| None)
    })
    .await
}
