//! Paginated shift retrieval from the CMS collection endpoint

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::StatusCode;
use tracing::{debug, info};
use vagtportal_core::{ShiftFetchOutcome, ShiftProvider};
use vagtportal_domain::constants::SHIFTS_PAGE_SIZE;
use vagtportal_domain::{CmsConfig, PortalError, RawShift, Result};

use super::types::ShiftsPage;
use crate::errors::InfraError;
use crate::http::HttpClient;

type QueryParam = (&'static str, String);

/// Client for the paginated `shifts` collection.
pub struct ShiftsClient {
    http: HttpClient,
    base_url: String,
}

impl ShiftsClient {
    pub fn new(config: &CmsConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { http, base_url: config.base_url.trim_end_matches('/').to_string() })
    }

    fn page_params(since: &str, page: u32) -> Vec<QueryParam> {
        vec![
            ("populate", "*".to_string()),
            ("filters[Date][$gte]", since.to_string()),
            ("pagination[page]", page.to_string()),
            ("pagination[pageSize]", SHIFTS_PAGE_SIZE.to_string()),
        ]
    }
}

#[async_trait]
impl ShiftProvider for ShiftsClient {
    /// Walk the collection page by page, strictly sequentially, and
    /// concatenate the pages in request order.
    ///
    /// The loop continues while the server reports more pages remain and
    /// aborts on the first failed request: a 403 terminates as
    /// `PendingApproval`, anything else terminates as `Failed` with the
    /// accumulated pages discarded.
    async fn fetch_all_shifts(&self, since: DateTime<Utc>, token: &str) -> ShiftFetchOutcome {
        let url = format!("{}/shifts", self.base_url);
        let since_param = since.to_rfc3339_opts(SecondsFormat::Secs, true);

        let mut shifts: Vec<RawShift> = Vec::new();
        let mut page: u32 = 1;

        loop {
            debug!(page, "requesting shifts page");

            let request =
                self.http.get(&url).bearer_auth(token).query(&Self::page_params(&since_param, page));

            let response = match self.http.send(request).await {
                Ok(response) => response,
                Err(err) => return ShiftFetchOutcome::Failed(err),
            };

            if response.status() == StatusCode::FORBIDDEN {
                info!(page, "shift query forbidden; membership approval pending");
                return ShiftFetchOutcome::PendingApproval;
            }

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return ShiftFetchOutcome::Failed(PortalError::Network(format!(
                    "shift query failed ({status}): {body}"
                )));
            }

            let page_body: ShiftsPage = match response.json().await {
                Ok(body) => body,
                Err(err) => return ShiftFetchOutcome::Failed(InfraError::from(err).into()),
            };

            let pagination = page_body.meta.pagination;
            shifts.extend(page_body.data);

            if pagination.page >= pagination.page_count {
                break;
            }
            page = pagination.page + 1;
        }

        info!(shift_count = shifts.len(), "shift pagination complete");
        ShiftFetchOutcome::Complete(shifts)
    }
}
