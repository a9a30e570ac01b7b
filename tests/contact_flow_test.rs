use async_trait::async_trait;
use folio_site::domain::contact::{ContactSubmission, Field, FieldError};
use folio_site::domain::ports::FormRelay;
use folio_site::{ContactForm, FormStatus, Result, SiteError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio_test::{assert_pending, assert_ready};

/// Relay whose outcome is decided by the test, optionally held back until released.
#[derive(Clone)]
struct MockRelay {
    calls: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<ContactSubmission>>>,
    succeed: Arc<AtomicBool>,
    gate: Arc<Mutex<Option<oneshot::Receiver<()>>>>,
}

impl MockRelay {
    fn new(succeed: bool) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            received: Arc::new(Mutex::new(Vec::new())),
            succeed: Arc::new(AtomicBool::new(succeed)),
            gate: Arc::new(Mutex::new(None)),
        }
    }

    fn held(succeed: bool) -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        let relay = Self::new(succeed);
        *relay.gate.lock().unwrap() = Some(rx);
        (relay, tx)
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FormRelay for MockRelay {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().unwrap().push(submission.clone());

        let gate = self.gate.lock().unwrap().take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }

        if self.succeed.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(SiteError::RelayRejected { status: 503 })
        }
    }
}

fn filled() -> ContactSubmission {
    ContactSubmission::new("Jane Doe", "a@b.co", "Pipeline review", "Let's talk.")
}

#[tokio::test]
async fn test_empty_name_never_reaches_network() {
    let relay = MockRelay::new(true);
    let mut form = ContactForm::new(relay.clone());
    let mut submission = filled();
    submission.name.clear();
    form.fill(submission);

    let errors = form.submit().await.unwrap_err();
    assert_eq!(errors.get(Field::Name), Some(FieldError::Required));
    assert_eq!(form.errors().get(Field::Name), Some(FieldError::Required));
    assert_eq!(relay.calls(), 0);
    assert_eq!(form.status(), FormStatus::Idle);
}

#[tokio::test]
async fn test_email_shape_is_checked_locally() {
    let relay = MockRelay::new(true);
    let mut form = ContactForm::new(relay.clone());

    form.fill(filled());
    form.set_field(Field::Email, "not-an-email");
    let errors = form.submit().await.unwrap_err();
    assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidEmail));
    assert_eq!(relay.calls(), 0);

    form.set_field(Field::Email, "a@b.co");
    assert_eq!(form.submit().await, Ok(FormStatus::Success));
    assert_eq!(relay.calls(), 1);
    assert!(form.errors().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_success_flow_clears_fields_and_resets_after_five_seconds() {
    let (relay, release) = MockRelay::held(true);
    let mut form = ContactForm::new(relay.clone());
    let status = form.subscribe();
    form.fill(filled());
    assert_eq!(*status.borrow(), FormStatus::Idle);

    {
        let mut submit = tokio_test::task::spawn(form.submit());
        assert_pending!(submit.poll());
        assert_eq!(*status.borrow(), FormStatus::Sending);

        release.send(()).unwrap();
        let outcome = assert_ready!(submit.poll());
        assert_eq!(outcome, Ok(FormStatus::Success));
    }

    assert_eq!(form.status(), FormStatus::Success);
    assert_eq!(form.fields(), &ContactSubmission::default());
    assert_eq!(relay.received.lock().unwrap().as_slice(), &[filled()]);
    assert!(form.take_failure().is_none());

    tokio::time::sleep(Duration::from_millis(4999)).await;
    assert_eq!(form.status(), FormStatus::Success);

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(form.status(), FormStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_failure_flow_keeps_fields_and_resets_after_five_seconds() {
    let (relay, release) = MockRelay::held(false);
    let mut form = ContactForm::new(relay.clone());
    let status = form.subscribe();
    form.fill(filled());

    {
        let mut submit = tokio_test::task::spawn(form.submit());
        assert_pending!(submit.poll());
        assert_eq!(*status.borrow(), FormStatus::Sending);

        release.send(()).unwrap();
        let outcome = assert_ready!(submit.poll());
        assert_eq!(outcome, Ok(FormStatus::Error));
    }

    assert_eq!(form.status(), FormStatus::Error);
    assert_eq!(form.fields(), &filled());
    assert!(matches!(
        form.take_failure(),
        Some(SiteError::RelayRejected { status: 503 })
    ));
    assert!(form.take_failure().is_none());
    assert_eq!(form.status(), FormStatus::Error);

    tokio::time::sleep(Duration::from_millis(5001)).await;
    assert_eq!(form.status(), FormStatus::Idle);
    assert_eq!(form.fields(), &filled());
    assert_eq!(relay.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_stale_reset_does_not_clobber_newer_submission() {
    let relay = MockRelay::new(false);
    let mut form = ContactForm::new(relay.clone());
    form.fill(filled());

    assert_eq!(form.submit().await, Ok(FormStatus::Error));
    tokio::time::sleep(Duration::from_millis(3000)).await;

    // 第二次送出後，第一次的計時器不能提早把狀態清掉
    assert_eq!(form.submit().await, Ok(FormStatus::Error));
    tokio::time::sleep(Duration::from_millis(3000)).await;
    assert_eq!(form.status(), FormStatus::Error);

    tokio::time::sleep(Duration::from_millis(2001)).await;
    assert_eq!(form.status(), FormStatus::Idle);
    assert_eq!(relay.calls(), 2);
}

#[tokio::test]
async fn test_failure_is_cleared_by_next_successful_submit() {
    let relay = MockRelay::new(false);
    let mut form = ContactForm::new(relay.clone());
    form.fill(filled());
    assert_eq!(form.submit().await, Ok(FormStatus::Error));

    // 重送成功後，上一次的錯誤不能留著
    relay.succeed.store(true, Ordering::SeqCst);
    assert_eq!(form.submit().await, Ok(FormStatus::Success));
    assert!(form.take_failure().is_none());
    assert_eq!(relay.calls(), 2);
}
