use crate::domain::contact::{ContactSubmission, Field, FieldErrors};
use crate::domain::ports::FormRelay;
use crate::utils::error::SiteError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub const DEFAULT_RESET_AFTER: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Sending,
    Success,
    Error,
}

impl FormStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FormStatus::Idle => "Send Message",
            FormStatus::Sending => "Sending...",
            FormStatus::Success => "Message Sent",
            FormStatus::Error => "Failed to Send",
        }
    }
}

/// Contact form state as the page sees it.
#[derive(Debug, Clone, Copy)]
pub struct FormView<'a> {
    pub status: FormStatus,
    pub fields: &'a ContactSubmission,
    pub errors: &'a FieldErrors,
}

/// Contact form state: field values, inline errors and the submission status.
///
/// `submit` takes `&mut self`, so a second submit can't start while one is in
/// flight. After success or failure the status returns to `Idle` once
/// `reset_after` has elapsed.
pub struct ContactForm<R: FormRelay> {
    relay: R,
    fields: ContactSubmission,
    errors: FieldErrors,
    failure: Option<SiteError>,
    status: Arc<watch::Sender<FormStatus>>,
    generation: Arc<AtomicU64>,
    reset_after: Duration,
    reset_task: Option<JoinHandle<()>>,
}

impl<R: FormRelay> ContactForm<R> {
    pub fn new(relay: R) -> Self {
        Self::with_reset_delay(relay, DEFAULT_RESET_AFTER)
    }

    pub fn with_reset_delay(relay: R, reset_after: Duration) -> Self {
        let (status, _) = watch::channel(FormStatus::Idle);
        Self {
            relay,
            fields: ContactSubmission::default(),
            errors: FieldErrors::default(),
            failure: None,
            status: Arc::new(status),
            generation: Arc::new(AtomicU64::new(0)),
            reset_after,
            reset_task: None,
        }
    }

    pub fn status(&self) -> FormStatus {
        *self.status.borrow()
    }

    /// 訂閱狀態變化，UI 依此重繪
    pub fn subscribe(&self) -> watch::Receiver<FormStatus> {
        self.status.subscribe()
    }

    pub fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The relay error behind the last `Error` status, if any. Taking it
    /// leaves the status untouched.
    pub fn take_failure(&mut self) -> Option<SiteError> {
        self.failure.take()
    }

    pub fn view(&self) -> FormView<'_> {
        FormView {
            status: self.status(),
            fields: &self.fields,
            errors: &self.errors,
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set_field(field, value);
    }

    pub fn fill(&mut self, submission: ContactSubmission) {
        self.fields = submission;
    }

    /// Validate and post the form once.
    ///
    /// Returns the field errors without touching the network when validation
    /// fails; otherwise the terminal status of this attempt.
    pub async fn submit(&mut self) -> std::result::Result<FormStatus, FieldErrors> {
        if let Err(errors) = self.fields.validate() {
            tracing::debug!("contact form rejected locally: {}", errors);
            self.errors = errors.clone();
            return Err(errors);
        }
        self.errors = FieldErrors::default();
        self.failure = None;

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.status.send_replace(FormStatus::Sending);
        tracing::info!("📨 Sending contact form");

        let outcome = match self.relay.deliver(&self.fields).await {
            Ok(()) => {
                tracing::info!("✅ Contact form delivered");
                self.fields = ContactSubmission::default();
                FormStatus::Success
            }
            Err(e) => {
                // 連線失敗與非 2xx 一律當作錯誤，只記錄細節
                tracing::error!("❌ Submission error: {}", e);
                self.failure = Some(e);
                FormStatus::Error
            }
        };

        self.status.send_replace(outcome);
        self.schedule_reset(generation);
        Ok(outcome)
    }

    fn schedule_reset(&mut self, generation: u64) {
        if let Some(task) = self.reset_task.take() {
            task.abort();
        }

        let status = Arc::clone(&self.status);
        let current = Arc::clone(&self.generation);
        let delay = self.reset_after;

        self.reset_task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if current.load(Ordering::SeqCst) == generation {
                status.send_replace(FormStatus::Idle);
            }
        }));
    }
}

impl<R: FormRelay> Drop for ContactForm<R> {
    fn drop(&mut self) {
        if let Some(task) = self.reset_task.take() {
            task.abort();
        }
    }
}
