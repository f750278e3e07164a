use crate::{ClientError, ClientResult, ManagementApi, parse_retry_after, with_retry};

use cm_config::{EnvironmentCredentials, RetryConfig};
use cm_core::{
    Asset, AssetFolder, AssetUpsert, Collection, ContentItem, ContentItemUpsert, ContentType,
    ContentTypeSnippet, EnvironmentInfo, FileReference, Identifier, Language, LanguageVariant,
    LanguageVariantUpsert, Result, ScheduleRequest, Taxonomy, Workflow, WorkflowStepChange,
};

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use log::debug;
use reqwest::header::{CONTENT_TYPE, RETRY_AFTER};
use reqwest::{Client as ReqwestClient, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

const CONTINUATION_HEADER: &str = "x-continuation";

/// HTTP client for one environment of the Management API
pub struct ManagementClient {
    pub base_url: String,
    pub environment_id: String,
    api_key: String,
    retry: RetryConfig,
    client: ReqwestClient,
}

impl ManagementClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://manage.kontent.ai/v2")
    /// * `credentials` - Environment id and management API key
    /// * `timeout` - Per-request timeout
    /// * `retry` - Backoff schedule for transient failures
    pub fn new(
        base_url: &str,
        credentials: &EnvironmentCredentials,
        timeout: Duration,
        retry: RetryConfig,
    ) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            environment_id: credentials.environment_id.clone(),
            api_key: credentials.api_key.clone(),
            retry,
            client,
        })
    }

    /// Build a client from loaded configuration.
    pub fn from_config(
        config: &cm_config::Config,
        credentials: &EnvironmentCredentials,
    ) -> ClientResult<Self> {
        Self::new(
            &config.api.base_url,
            credentials,
            Duration::from_secs(config.api.timeout_secs),
            config.retry.clone(),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}/projects/{}{}", self.base_url, self.environment_id, path)
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
        continuation: Option<&str>,
    ) -> ClientResult<Response> {
        let mut req = self.client.request(method, url).bearer_auth(&self.api_key);

        if let Some(body) = body {
            req = req.json(body);
        }
        if let Some(token) = continuation {
            req = req.header(CONTINUATION_HEADER, token);
        }

        check_status(req.send().await?).await
    }

    /// Execute request with retries and parse the JSON body
    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> ClientResult<T> {
        let url = self.url(path);
        let operation = format!("{method} {path}");
        let client = self;
        let url = url.as_str();

        with_retry(&self.retry, &operation, move || {
            let method = method.clone();
            async move {
                let response = client.send(method, url, body, None).await?;
                let text = response.text().await?;
                serde_json::from_str(&text).map_err(ClientError::from_json)
            }
        })
        .await
    }

    /// Execute request with retries, ignoring the response body
    async fn execute_empty(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> ClientResult<()> {
        let url = self.url(path);
        let operation = format!("{method} {path}");
        let client = self;
        let url = url.as_str();

        with_retry(&self.retry, &operation, move || {
            let method = method.clone();
            async move {
                client.send(method, url, body, None).await?;
                Ok(())
            }
        })
        .await
    }

    /// Follow `x-continuation` tokens until the listing is exhausted.
    /// `key` names the array field inside each page.
    async fn list_all<T: DeserializeOwned>(&self, path: &str, key: &str) -> ClientResult<Vec<T>> {
        let url = self.url(path);
        let url = url.as_str();
        let client = self;
        let mut results = Vec::new();
        let mut continuation: Option<String> = None;

        loop {
            let operation = format!("GET {path}");
            let token = continuation.as_deref();
            let page: Value = with_retry(&self.retry, &operation, move || async move {
                let response = client.send(Method::GET, url, None, token).await?;
                let text = response.text().await?;
                serde_json::from_str::<Value>(&text).map_err(ClientError::from_json)
            })
            .await?;

            let items = page.get(key).cloned().unwrap_or(Value::Array(Vec::new()));
            let mut items: Vec<T> = serde_json::from_value(items)?;
            debug!("{}: fetched {} record(s)", path, items.len());
            results.append(&mut items);

            continuation = page
                .get("pagination")
                .and_then(|pagination| pagination.get("continuation_token"))
                .and_then(Value::as_str)
                .map(str::to_string);

            if continuation.is_none() {
                return Ok(results);
            }
        }
    }

    fn variant_path(item: &Identifier, language: &Identifier) -> String {
        format!(
            "/items/{}/variants/{}",
            item.to_path_segment(),
            language.to_path_segment()
        )
    }
}

/// Map non-success responses to `ClientError::Api`, keeping the API's own
/// error code, message and `Retry-After` when present.
async fn check_status(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let retry_after = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_retry_after);

    let text = response.text().await.unwrap_or_default();
    let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
    let code = body
        .get("error_code")
        .map(|code| match code {
            Value::String(code) => code.clone(),
            other => other.to_string(),
        })
        .unwrap_or_else(|| "UNKNOWN".to_string());
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });

    Err(ClientError::api_error(status.as_u16(), code, message).with_retry_after(retry_after))
}

fn to_body<T: Serialize>(data: &T) -> ClientResult<Value> {
    Ok(serde_json::to_value(data)?)
}

#[async_trait]
impl ManagementApi for ManagementClient {
    async fn environment_info(&self) -> Result<EnvironmentInfo> {
        Ok(self.execute(Method::GET, "", None).await?)
    }

    // =========================================================================
    // Catalogs
    // =========================================================================

    async fn list_languages(&self) -> Result<Vec<Language>> {
        Ok(self.list_all("/languages", "languages").await?)
    }

    async fn list_collections(&self) -> Result<Vec<Collection>> {
        Ok(self.list_all("/collections", "collections").await?)
    }

    async fn list_workflows(&self) -> Result<Vec<Workflow>> {
        // The workflows endpoint returns a bare array.
        Ok(self.execute(Method::GET, "/workflows", None).await?)
    }

    async fn list_taxonomies(&self) -> Result<Vec<Taxonomy>> {
        Ok(self.list_all("/taxonomies", "taxonomies").await?)
    }

    async fn list_asset_folders(&self) -> Result<Vec<AssetFolder>> {
        Ok(self.list_all("/folders", "folders").await?)
    }

    async fn list_content_types(&self) -> Result<Vec<ContentType>> {
        Ok(self.list_all("/types", "types").await?)
    }

    async fn list_content_type_snippets(&self) -> Result<Vec<ContentTypeSnippet>> {
        Ok(self.list_all("/snippets", "snippets").await?)
    }

    // =========================================================================
    // Content items
    // =========================================================================

    async fn view_content_item(&self, item: &Identifier) -> Result<ContentItem> {
        let path = format!("/items/{}", item.to_path_segment());
        Ok(self.execute(Method::GET, &path, None).await?)
    }

    async fn upsert_content_item(
        &self,
        item: &Identifier,
        data: &ContentItemUpsert,
    ) -> Result<ContentItem> {
        let path = format!("/items/{}", item.to_path_segment());
        let body = to_body(data)?;
        Ok(self.execute(Method::PUT, &path, Some(&body)).await?)
    }

    // =========================================================================
    // Language variants
    // =========================================================================

    async fn view_language_variant(
        &self,
        item: &Identifier,
        language: &Identifier,
    ) -> Result<LanguageVariant> {
        let path = Self::variant_path(item, language);
        Ok(self.execute(Method::GET, &path, None).await?)
    }

    async fn view_published_language_variant(
        &self,
        item: &Identifier,
        language: &Identifier,
    ) -> Result<LanguageVariant> {
        let path = format!("{}/published", Self::variant_path(item, language));
        Ok(self.execute(Method::GET, &path, None).await?)
    }

    async fn upsert_language_variant(
        &self,
        item: &Identifier,
        language: &Identifier,
        data: &LanguageVariantUpsert,
    ) -> Result<LanguageVariant> {
        let path = Self::variant_path(item, language);
        let body = to_body(data)?;
        Ok(self.execute(Method::PUT, &path, Some(&body)).await?)
    }

    async fn create_new_version(&self, item: &Identifier, language: &Identifier) -> Result<()> {
        let path = format!("{}/new-version", Self::variant_path(item, language));
        Ok(self.execute_empty(Method::PUT, &path, None).await?)
    }

    async fn change_workflow(
        &self,
        item: &Identifier,
        language: &Identifier,
        change: &WorkflowStepChange,
    ) -> Result<()> {
        let path = format!("{}/change-workflow", Self::variant_path(item, language));
        let body = to_body(change)?;
        Ok(self.execute_empty(Method::PUT, &path, Some(&body)).await?)
    }

    async fn publish(
        &self,
        item: &Identifier,
        language: &Identifier,
        schedule: &ScheduleRequest,
    ) -> Result<()> {
        let path = format!("{}/publish", Self::variant_path(item, language));
        let body = schedule
            .scheduled_to
            .is_some()
            .then(|| to_body(schedule))
            .transpose()?;
        Ok(self.execute_empty(Method::PUT, &path, body.as_ref()).await?)
    }

    async fn cancel_scheduled_publish(
        &self,
        item: &Identifier,
        language: &Identifier,
    ) -> Result<()> {
        let path = format!(
            "{}/cancel-scheduled-publish",
            Self::variant_path(item, language)
        );
        Ok(self.execute_empty(Method::PUT, &path, None).await?)
    }

    async fn unpublish_and_archive(
        &self,
        item: &Identifier,
        language: &Identifier,
        schedule: &ScheduleRequest,
    ) -> Result<()> {
        let path = format!(
            "{}/unpublish-and-archive",
            Self::variant_path(item, language)
        );
        let body = schedule
            .scheduled_to
            .is_some()
            .then(|| to_body(schedule))
            .transpose()?;
        Ok(self.execute_empty(Method::PUT, &path, body.as_ref()).await?)
    }

    // =========================================================================
    // Assets
    // =========================================================================

    async fn view_asset(&self, asset: &Identifier) -> Result<Asset> {
        let path = format!("/assets/{}", asset.to_path_segment());
        Ok(self.execute(Method::GET, &path, None).await?)
    }

    async fn upload_binary_file(
        &self,
        filename: &str,
        content_type: &str,
        data: Bytes,
    ) -> Result<FileReference> {
        let path = format!("/files/{filename}");
        let url = self.url(&path);
        let url = url.as_str();
        let operation = format!("POST {path}");
        let client = self;

        let reference = with_retry(&self.retry, &operation, move || {
            let data = data.clone();
            async move {
                let req = client
                    .client
                    .post(url)
                    .bearer_auth(&client.api_key)
                    .header(CONTENT_TYPE, content_type)
                    .body(data);
                let response = check_status(req.send().await?).await?;
                let text = response.text().await?;
                serde_json::from_str::<FileReference>(&text).map_err(ClientError::from_json)
            }
        })
        .await?;

        Ok(reference)
    }

    async fn upsert_asset(&self, asset: &Identifier, data: &AssetUpsert) -> Result<Asset> {
        let path = format!("/assets/{}", asset.to_path_segment());
        let body = to_body(data)?;
        Ok(self.execute(Method::PUT, &path, Some(&body)).await?)
    }

    /// Asset binaries live on the delivery CDN, so no auth header is sent.
    async fn download_binary(&self, url: &str) -> Result<Bytes> {
        let operation = format!("GET {url}");
        let client = &self.client;

        let bytes = with_retry(&self.retry, &operation, move || async move {
            let response = check_status(client.get(url).send().await?).await?;
            Ok::<Bytes, ClientError>(response.bytes().await?)
        })
        .await?;

        Ok(bytes)
    }
}
