use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use fh_app::usecases::{
    CurrentUser, DonationFormSession, FormPhase, ListMyDonations, RegisterAccount,
    RegistrationFormSession, SignIn, SignOut, SubmitDonation, SubmitOutcome, TrackSession,
    TrackState, TrackView,
};
use fh_core::ports::{AuthSessionPort, ClockPort, Notice, NotificationPort};
use fh_core::{DonationStatus, ItemField, SecretString};
use fh_infra::memory::{InMemoryAuth, InMemoryDonationRepository};
use fh_infra::supabase::SessionStore;

struct SteppingClock {
    now_ms: AtomicI64,
}

impl ClockPort for SteppingClock {
    fn now_ms(&self) -> i64 {
        self.now_ms.fetch_add(60_000, Ordering::SeqCst)
    }

    fn today(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }
}

#[derive(Default)]
struct RecordingNotifier {
    titles: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.titles.lock().unwrap())
    }
}

impl NotificationPort for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.titles.lock().unwrap().push(notice.title);
    }
}

struct Harness {
    auth: Arc<InMemoryAuth>,
    donations: Arc<InMemoryDonationRepository>,
    clock: Arc<SteppingClock>,
    notifier: Arc<RecordingNotifier>,
}

impl Harness {
    fn new() -> Self {
        let clock = Arc::new(SteppingClock {
            now_ms: AtomicI64::new(1_792_000_000_000),
        });
        Self {
            auth: Arc::new(InMemoryAuth::new(Arc::new(SessionStore::new()))),
            donations: Arc::new(InMemoryDonationRepository::new(clock.clone())),
            clock,
            notifier: Arc::new(RecordingNotifier::default()),
        }
    }

    fn donation_form(&self) -> DonationFormSession {
        DonationFormSession::new(
            SubmitDonation::new(self.donations.clone(), self.clock.clone()),
            self.notifier.clone(),
        )
    }

    fn track(&self) -> TrackSession {
        TrackSession::new(
            ListMyDonations::new(self.donations.clone()),
            self.notifier.clone(),
        )
    }

    fn auth_port(&self) -> Arc<dyn AuthSessionPort> {
        self.auth.clone()
    }
}

fn fill(form: &mut DonationFormSession, item: &str, date: &str) {
    let key = form.controller().draft().items[0].key;
    form.update_item(key, ItemField::Name, item).unwrap();
    form.update_item(key, ItemField::Quantity, "3 bags").unwrap();
    form.update_item(key, ItemField::Category, "canned").unwrap();
    let controller = form.controller_mut();
    controller.update_address("42 Harbour Lane, Port Town");
    controller.update_date(date);
}

#[tokio::test]
async fn register_donate_and_track() {
    let h = Harness::new();

    let mut registration =
        RegistrationFormSession::new(RegisterAccount::new(h.auth_port()), h.notifier.clone());
    let controller = registration.controller_mut();
    controller.update_name("Grace Hopper");
    controller.update_email("grace@example.com");
    controller.update_password("cobol59");
    controller.update_confirm_password("cobol59");
    let registered = registration.submit().await.expect("account created");
    assert_eq!(h.notifier.take(), vec!["Welcome to FeedHope!"]);

    let user = CurrentUser::new(h.auth_port())
        .execute()
        .await
        .expect("signed in after registration");
    assert_eq!(user, registered);

    let mut form = h.donation_form();
    fill(&mut form, "Tomato <soup>", "2026-10-18");
    let SubmitOutcome::Submitted(first) = form.submit(Some(&user)).await else {
        panic!("first donation should be stored");
    };
    assert_eq!(first.items[0].name, "Tomato soup");
    assert_eq!(first.status, DonationStatus::Pending);
    assert!(matches!(form.phase(), FormPhase::Confirmed(_)));

    form.start_new_donation();
    fill(&mut form, "Chickpeas", "2026-10-19");
    assert!(form.add_item().is_some());
    let second_key = form.controller().draft().items[1].key;
    form.update_item(second_key, ItemField::Name, "Lentils").unwrap();
    form.update_item(second_key, ItemField::Quantity, "2 kg").unwrap();
    form.update_item(second_key, ItemField::Category, "grains").unwrap();
    assert!(matches!(
        form.submit(Some(&user)).await,
        SubmitOutcome::Submitted(_)
    ));
    assert_eq!(
        h.notifier.take(),
        vec!["Donation Submitted!", "Donation Submitted!"]
    );

    let state = h.track().enter(Some(&user)).await;
    let TrackState::Ready(TrackView::Donations { donations, summary }) = state else {
        panic!("expected the donation list");
    };
    assert_eq!(donations.len(), 2);
    assert_eq!(donations[0].items[0].name, "Chickpeas");
    assert_eq!(summary.total_donations, 2);
    assert_eq!(summary.total_items, 3);
    assert_eq!(summary.pending, 2);
}

#[tokio::test]
async fn past_pickup_date_is_rejected_before_storage() {
    let h = Harness::new();
    let mut form = h.donation_form();
    fill(&mut form, "Rice", "2026-10-15");
    let user = fh_core::AuthUser {
        id: fh_core::UserId::from("user-9"),
        email: None,
        display_name: None,
    };

    let outcome = form.submit(Some(&user)).await;

    let SubmitOutcome::ValidationFailed(errors) = outcome else {
        panic!("expected validation failure");
    };
    assert_eq!(
        errors.get("pickupDate"),
        Some("Pickup date cannot be in the past")
    );
    assert_eq!(h.donations.count().await, 0);
    assert_eq!(h.notifier.take(), vec!["Validation Error"]);
}

#[tokio::test]
async fn signed_out_visitor_sees_nothing_and_cannot_submit() {
    let h = Harness::new();
    let user = CurrentUser::new(h.auth_port()).execute().await;
    assert_eq!(user, None);

    assert_eq!(
        h.track().enter(user.as_ref()).await,
        TrackState::Ready(TrackView::SignedOut)
    );

    let mut form = h.donation_form();
    fill(&mut form, "Rice", "2026-10-20");
    assert_eq!(
        form.submit(user.as_ref()).await,
        SubmitOutcome::AuthRequired
    );
    assert_eq!(h.donations.count().await, 0);
}

#[tokio::test]
async fn sign_out_then_sign_back_in() {
    let h = Harness::new();
    let mut registration =
        RegistrationFormSession::new(RegisterAccount::new(h.auth_port()), h.notifier.clone());
    let controller = registration.controller_mut();
    controller.update_name("Alan");
    controller.update_email("alan@example.com");
    controller.update_password("enigma1");
    controller.update_confirm_password("enigma1");
    registration.submit().await.expect("account created");

    SignOut::new(h.auth_port()).execute().await.unwrap();
    assert_eq!(CurrentUser::new(h.auth_port()).execute().await, None);
    // Signing out twice is harmless.
    SignOut::new(h.auth_port()).execute().await.unwrap();

    let sign_in = SignIn::new(h.auth_port());
    assert!(sign_in
        .with_password("alan@example.com", &SecretString::from("wrong"))
        .await
        .is_err());
    let session = sign_in
        .with_password("  alan@example.com ", &SecretString::from("enigma1"))
        .await
        .unwrap();
    assert_eq!(session.user.display_name.as_deref(), Some("Alan"));
    assert!(CurrentUser::new(h.auth_port()).execute().await.is_some());
}
