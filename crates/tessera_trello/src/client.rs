//! Trello REST client.
//!
//! Thin wrappers over the Trello HTTP API: each method shapes one request,
//! hands it to the [`RequestExecutor`] for rate governance and retry, and
//! deserializes the response body. Credentials travel as `key`/`token`
//! query parameters on every request, which is how Trello authenticates
//! API callers.

use crate::config::TrelloConfig;
use crate::executor::RequestExecutor;
use crate::models::{Board, BoardAction, Card, CardUpdate, NewCard, TrelloList};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tessera_error::{ConfigError, JsonError, TesseraResult};
use tracing::{debug, instrument};

/// Production API endpoint.
const TRELLO_API_BASE: &str = "https://api.trello.com/1";

/// Rate-limited client for one Trello board.
///
/// All requests made through one client instance share its rate governor,
/// so the process-wide request rate stays within the configured windows no
/// matter how many tasks hold a clone. Cloning is cheap; the executor and
/// its quota state are shared, not copied.
#[derive(Debug, Clone)]
pub struct TrelloClient {
    client: Client,
    executor: Arc<RequestExecutor>,
    base_url: String,
    config: TrelloConfig,
}

impl TrelloClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: TrelloConfig) -> TesseraResult<Self> {
        Self::with_base_url(config, TRELLO_API_BASE)
    }

    /// Create a client against a non-default endpoint. Tests point this at
    /// a local mock server.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_base_url(config: TrelloConfig, base_url: impl Into<String>) -> TesseraResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build HTTP client: {}", e)))?;
        let executor = Arc::new(RequestExecutor::new(
            config.rate_windows.iter().copied(),
            config.retry_backoff_ms,
            config.max_retries,
        ));

        Ok(Self {
            client,
            executor,
            base_url: base_url.into(),
            config,
        })
    }

    /// The board all board-scoped calls target.
    pub fn board_id(&self) -> &str {
        &self.config.board_id
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn credentials(&self) -> [(&'static str, &str); 2] {
        [
            ("key", self.config.api_key.as_str()),
            ("token", self.config.token.as_str()),
        ]
    }

    async fn decode<T>(response: reqwest::Response) -> TesseraResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        response
            .json()
            .await
            .map_err(|e| JsonError::new(format!("Failed to decode Trello response: {}", e)).into())
    }

    /// Fetch the configured board.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    #[instrument(skip(self))]
    pub async fn get_board(&self) -> TesseraResult<Board> {
        let url = self.url(&format!("boards/{}", self.config.board_id));
        debug!(%url, "Fetching board");
        let response = self
            .executor
            .execute(|| {
                let request = self.client.get(&url).query(&self.credentials());
                async move { request.send().await }
            })
            .await?;
        Self::decode(response).await
    }

    /// Fetch the lists on the configured board.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    #[instrument(skip(self))]
    pub async fn get_lists(&self) -> TesseraResult<Vec<TrelloList>> {
        let url = self.url(&format!("boards/{}/lists", self.config.board_id));
        debug!(%url, "Fetching lists");
        let response = self
            .executor
            .execute(|| {
                let request = self.client.get(&url).query(&self.credentials());
                async move { request.send().await }
            })
            .await?;
        Self::decode(response).await
    }

    /// Fetch the cards in a list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    #[instrument(skip(self))]
    pub async fn get_cards_by_list(&self, list_id: &str) -> TesseraResult<Vec<Card>> {
        let url = self.url(&format!("lists/{}/cards", list_id));
        debug!(%url, "Fetching cards in list");
        let response = self
            .executor
            .execute(|| {
                let request = self.client.get(&url).query(&self.credentials());
                async move { request.send().await }
            })
            .await?;
        Self::decode(response).await
    }

    /// Fetch the cards assigned to the authenticated member.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    #[instrument(skip(self))]
    pub async fn get_my_cards(&self) -> TesseraResult<Vec<Card>> {
        let url = self.url("members/me/cards");
        debug!(%url, "Fetching member cards");
        let response = self
            .executor
            .execute(|| {
                let request = self.client.get(&url).query(&self.credentials());
                async move { request.send().await }
            })
            .await?;
        Self::decode(response).await
    }

    /// Fetch recent activity on the configured board, newest first.
    ///
    /// `limit` caps how many actions are returned; Trello's own default
    /// applies when it is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    #[instrument(skip(self))]
    pub async fn get_recent_activity(&self, limit: Option<u32>) -> TesseraResult<Vec<BoardAction>> {
        let url = self.url(&format!("boards/{}/actions", self.config.board_id));
        debug!(%url, ?limit, "Fetching board activity");
        let response = self
            .executor
            .execute(|| {
                let mut request = self.client.get(&url).query(&self.credentials());
                if let Some(limit) = limit {
                    request = request.query(&[("limit", limit)]);
                }
                async move { request.send().await }
            })
            .await?;
        Self::decode(response).await
    }

    /// Create a card.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    #[instrument(skip(self, card), fields(list_id = %card.id_list, name = %card.name))]
    pub async fn add_card(&self, card: &NewCard) -> TesseraResult<Card> {
        let url = self.url("cards");
        debug!(%url, "Creating card");
        let response = self
            .executor
            .execute(|| {
                let request = self
                    .client
                    .post(&url)
                    .query(&self.credentials())
                    .query(card);
                async move { request.send().await }
            })
            .await?;
        Self::decode(response).await
    }

    /// Update fields on a card.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    #[instrument(skip(self, update))]
    pub async fn update_card(&self, card_id: &str, update: &CardUpdate) -> TesseraResult<Card> {
        let url = self.url(&format!("cards/{}", card_id));
        debug!(%url, "Updating card");
        let response = self
            .executor
            .execute(|| {
                let request = self
                    .client
                    .put(&url)
                    .query(&self.credentials())
                    .query(update);
                async move { request.send().await }
            })
            .await?;
        Self::decode(response).await
    }

    /// Move a card to another list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    #[instrument(skip(self))]
    pub async fn move_card(&self, card_id: &str, list_id: &str) -> TesseraResult<Card> {
        let update = CardUpdate {
            id_list: Some(list_id.to_owned()),
            ..CardUpdate::default()
        };
        self.update_card(card_id, &update).await
    }

    /// Archive a card.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    #[instrument(skip(self))]
    pub async fn archive_card(&self, card_id: &str) -> TesseraResult<Card> {
        let update = CardUpdate {
            closed: Some(true),
            ..CardUpdate::default()
        };
        self.update_card(card_id, &update).await
    }

    /// Create a list on the configured board.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    #[instrument(skip(self))]
    pub async fn add_list(&self, name: &str) -> TesseraResult<TrelloList> {
        let url = self.url("lists");
        debug!(%url, "Creating list");
        let response = self
            .executor
            .execute(|| {
                let request = self
                    .client
                    .post(&url)
                    .query(&self.credentials())
                    .query(&[("idBoard", self.config.board_id.as_str()), ("name", name)]);
                async move { request.send().await }
            })
            .await?;
        Self::decode(response).await
    }

    /// Archive a list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    #[instrument(skip(self))]
    pub async fn archive_list(&self, list_id: &str) -> TesseraResult<TrelloList> {
        let url = self.url(&format!("lists/{}/closed", list_id));
        debug!(%url, "Archiving list");
        let response = self
            .executor
            .execute(|| {
                let request = self
                    .client
                    .put(&url)
                    .query(&self.credentials())
                    .query(&[("value", "true")]);
                async move { request.send().await }
            })
            .await?;
        Self::decode(response).await
    }
}
