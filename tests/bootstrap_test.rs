use std::io::Write;

use feedhope::bootstrap::{create_runtime, load_config, Backend};
use fh_app::usecases::{SubmitOutcome, TrackState, TrackView};
use fh_core::{ItemField, SecretString};
use mockito::{Matcher, Server};
use tempfile::NamedTempFile;

fn config_file(url: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
        [supabase]
        url = "{url}"
        anon_key = "anon-key"
        request_timeout_secs = 5

        [auth]
        redirect_url = "https://feedhope.example/"
        "#
    )
    .unwrap();
    file
}

const SESSION_BODY: &str = r#"{
    "access_token": "user-token",
    "refresh_token": "refresh",
    "expires_in": 3600,
    "user": {"id": "user-1", "email": "ada@example.com", "user_metadata": {"full_name": "Ada"}}
}"#;

const ROW: &str = r#"{
    "id": "d-1",
    "user_id": "user-1",
    "items": [{"name": "Rice", "quantity": "5 kg", "category": "grains"}],
    "pickup_address": "123 Main Street, City",
    "pickup_date": "2099-01-01",
    "notes": null,
    "status": "pending",
    "created_at": "2026-10-16T09:30:00+00:00"
}"#;

#[tokio::test]
async fn supabase_runtime_signs_in_submits_and_lists() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/auth/v1/token")
        .match_query(Matcher::UrlEncoded("grant_type".into(), "password".into()))
        .with_status(200)
        .with_body(SESSION_BODY)
        .create_async()
        .await;
    server
        .mock("GET", "/auth/v1/user")
        .match_header("authorization", "Bearer user-token")
        .with_status(200)
        .with_body(r#"{"id": "user-1", "email": "ada@example.com"}"#)
        .create_async()
        .await;
    let insert = server
        .mock("POST", "/rest/v1/donations")
        .match_header("authorization", "Bearer user-token")
        .with_status(201)
        .with_body(format!("[{ROW}]"))
        .create_async()
        .await;
    server
        .mock("GET", "/rest/v1/donations")
        .match_query(Matcher::UrlEncoded("user_id".into(), "eq.user-1".into()))
        .with_status(200)
        .with_body(format!("[{ROW}]"))
        .create_async()
        .await;

    let file = config_file(&server.url());
    let config = load_config(file.path().to_path_buf()).unwrap();
    let runtime = create_runtime(&config).unwrap();
    assert_eq!(runtime.backend(), Backend::Supabase);

    let usecases = runtime.usecases();
    usecases
        .sign_in()
        .with_password("ada@example.com", &SecretString::from("secret1"))
        .await
        .unwrap();
    let user = usecases.current_user().execute().await.expect("signed in");

    let mut form = usecases.donation_form();
    let key = form.controller().draft().items[0].key;
    form.update_item(key, ItemField::Name, "Rice").unwrap();
    form.update_item(key, ItemField::Quantity, "5 kg").unwrap();
    form.update_item(key, ItemField::Category, "grains").unwrap();
    form.controller_mut().update_address("123 Main Street, City");
    form.controller_mut().update_date("2099-01-01");

    let outcome = form.submit(Some(&user)).await;
    assert!(matches!(outcome, SubmitOutcome::Submitted(ref row) if row.id.as_str() == "d-1"));
    insert.assert_async().await;

    let state = usecases.track_session().enter(Some(&user)).await;
    let TrackState::Ready(TrackView::Donations { summary, .. }) = state else {
        panic!("expected donations");
    };
    assert_eq!(summary.total_donations, 1);
    assert_eq!(summary.pending, 1);
}

#[tokio::test]
async fn unconfigured_runtime_falls_back_to_memory() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[logging]\n").unwrap();
    let config = load_config(file.path().to_path_buf()).unwrap();

    let runtime = create_runtime(&config).unwrap();

    assert_eq!(runtime.backend(), Backend::InMemory);
    assert_eq!(runtime.usecases().current_user().execute().await, None);
    assert!(runtime.usecases().sign_out().execute().await.is_ok());
}
