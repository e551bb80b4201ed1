use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use fh_core::ports::{DonationRepositoryError, DonationRepositoryPort};
use fh_core::{NewDonation, PersistedDonation, SecretString, UserId};

use super::client::{SupabaseClient, SupabaseError};
use super::session_store::SessionStore;

const DONATIONS_PATH: &str = "/rest/v1/donations";

/// PostgREST-backed donation storage. Row-level security scopes every
/// query to the bearer, so both operations need a signed-in session.
pub struct SupabaseDonationRepository {
    client: Arc<SupabaseClient>,
    store: Arc<SessionStore>,
}

impl SupabaseDonationRepository {
    pub fn new(client: Arc<SupabaseClient>, store: Arc<SessionStore>) -> Self {
        Self { client, store }
    }

    fn token(&self) -> Result<SecretString, DonationRepositoryError> {
        self.store
            .access_token()
            .ok_or(DonationRepositoryError::Unauthorized)
    }
}

fn repository_error(error: SupabaseError) -> DonationRepositoryError {
    match error {
        SupabaseError::Status {
            status: 401 | 403, ..
        } => DonationRepositoryError::Unauthorized,
        SupabaseError::Status { status, message } => {
            DonationRepositoryError::Rejected { status, message }
        }
        SupabaseError::Timeout => DonationRepositoryError::Transport("request timed out".into()),
        SupabaseError::Network(message) | SupabaseError::Config(message) => {
            DonationRepositoryError::Transport(message)
        }
        SupabaseError::Decode(message) => DonationRepositoryError::Decode(message),
    }
}

#[async_trait]
impl DonationRepositoryPort for SupabaseDonationRepository {
    async fn insert(
        &self,
        donation: NewDonation,
    ) -> Result<PersistedDonation, DonationRepositoryError> {
        let token = self.token()?;
        let request = self
            .client
            .post(DONATIONS_PATH, Some(&token))
            .header("Prefer", "return=representation")
            .json(&donation);

        let rows: Vec<PersistedDonation> = self
            .client
            .send_json(request)
            .await
            .map_err(repository_error)?;
        let row = rows.into_iter().next().ok_or_else(|| {
            DonationRepositoryError::Decode("insert returned no rows".to_string())
        })?;
        info!(donation_id = %row.id, "donation row inserted");
        Ok(row)
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<PersistedDonation>, DonationRepositoryError> {
        let token = self.token()?;
        let user_filter = format!("eq.{}", user_id);
        let request = self.client.get(DONATIONS_PATH, Some(&token)).query(&[
            ("select", "*"),
            ("user_id", user_filter.as_str()),
            ("order", "created_at.desc"),
        ]);

        let rows: Vec<PersistedDonation> = self
            .client
            .send_json(request)
            .await
            .map_err(repository_error)?;
        debug!(count = rows.len(), "donation rows fetched");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::supabase::SupabaseConfig;
    use chrono::NaiveDate;
    use fh_core::donation::DonatedItem;
    use fh_core::{AuthSession, AuthUser, DonationStatus, FoodCategory, StoredCategory};
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn repository(url: String, signed_in: bool) -> SupabaseDonationRepository {
        let client = SupabaseClient::new(&SupabaseConfig {
            url,
            anon_key: "anon-key".to_string(),
            timeout: Some(Duration::from_secs(5)),
            redirect_url: String::new(),
        })
        .unwrap();
        let store = Arc::new(SessionStore::new());
        if signed_in {
            store.replace(AuthSession {
                access_token: SecretString::from("user-token"),
                refresh_token: None,
                expires_at: None,
                user: AuthUser {
                    id: UserId::from("user-1"),
                    email: None,
                    display_name: None,
                },
            });
        }
        SupabaseDonationRepository::new(Arc::new(client), store)
    }

    fn new_donation() -> NewDonation {
        NewDonation {
            user_id: UserId::from("user-1"),
            items: vec![DonatedItem {
                name: "Rice".to_string(),
                quantity: "5 kg".to_string(),
                category: FoodCategory::Grains,
            }],
            pickup_address: "123 Main Street, City".to_string(),
            pickup_date: NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(),
            notes: None,
            status: DonationStatus::Pending,
        }
    }

    fn row_json(id: &str, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "user_id": "user-1",
            "items": [{"name": "Rice", "quantity": "5 kg", "category": "grains"}],
            "pickup_address": "123 Main Street, City",
            "pickup_date": "2026-10-20",
            "notes": null,
            "status": status,
            "created_at": "2026-10-16T09:30:00+00:00"
        })
    }

    #[tokio::test]
    async fn insert_returns_the_stored_row() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/rest/v1/donations")
            .match_header("authorization", "Bearer user-token")
            .match_header("prefer", "return=representation")
            .match_body(Matcher::PartialJson(json!({
                "user_id": "user-1",
                "status": "pending",
                "pickup_date": "2026-10-20"
            })))
            .with_status(201)
            .with_body(json!([row_json("d-1", "pending")]).to_string())
            .create_async()
            .await;

        let row = repository(server.url(), true)
            .insert(new_donation())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(row.id.as_str(), "d-1");
        assert_eq!(row.status, DonationStatus::Pending);
    }

    #[tokio::test]
    async fn insert_without_session_is_unauthorized() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/rest/v1/donations")
            .expect(0)
            .create_async()
            .await;

        let err = repository(server.url(), false)
            .insert(new_donation())
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert_eq!(err, DonationRepositoryError::Unauthorized);
    }

    #[tokio::test]
    async fn empty_insert_response_is_a_decode_error() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/rest/v1/donations")
            .with_status(201)
            .with_body("[]")
            .create_async()
            .await;

        let err = repository(server.url(), true)
            .insert(new_donation())
            .await
            .unwrap_err();

        assert!(matches!(err, DonationRepositoryError::Decode(_)));
    }

    #[tokio::test]
    async fn list_filters_by_user_and_orders_newest_first() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/rest/v1/donations")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("select".into(), "*".into()),
                Matcher::UrlEncoded("user_id".into(), "eq.user-1".into()),
                Matcher::UrlEncoded("order".into(), "created_at.desc".into()),
            ]))
            .with_status(200)
            .with_body(
                json!([row_json("d-2", "archived"), row_json("d-1", "delivered")]).to_string(),
            )
            .create_async()
            .await;

        let rows = repository(server.url(), true)
            .list_by_user(&UserId::from("user-1"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].status, DonationStatus::Unknown("archived".into()));
        assert_eq!(rows[1].status, DonationStatus::Delivered);
    }

    #[tokio::test]
    async fn list_keeps_rows_with_legacy_items() {
        let mut server = Server::new_async().await;
        let mut legacy = row_json("d-3", "pending");
        legacy["items"] = json!([{"name": "Bread", "quantity": "2", "category": "bakery"}]);
        let mut empty = row_json("d-2", "pending");
        empty["items"] = serde_json::Value::Null;
        server
            .mock("GET", "/rest/v1/donations")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(json!([legacy, empty, row_json("d-1", "pending")]).to_string())
            .create_async()
            .await;

        let rows = repository(server.url(), true)
            .list_by_user(&UserId::from("user-1"))
            .await
            .unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0].items[0].category,
            StoredCategory::Unknown("bakery".into())
        );
        assert!(rows[1].items.is_empty());
        assert_eq!(rows[2].items[0].category, StoredCategory::Known(FoodCategory::Grains));
    }

    #[tokio::test]
    async fn status_codes_map_to_repository_errors() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/rest/v1/donations")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(r#"{"message":"JWT expired"}"#)
            .create_async()
            .await;
        server
            .mock("POST", "/rest/v1/donations")
            .with_status(400)
            .with_body(r#"{"message":"invalid input syntax for type date"}"#)
            .create_async()
            .await;

        let repo = repository(server.url(), true);
        assert_eq!(
            repo.list_by_user(&UserId::from("user-1")).await.unwrap_err(),
            DonationRepositoryError::Unauthorized
        );
        assert_eq!(
            repo.insert(new_donation()).await.unwrap_err(),
            DonationRepositoryError::Rejected {
                status: 400,
                message: "invalid input syntax for type date".to_string()
            }
        );
    }
}
