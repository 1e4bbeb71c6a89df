use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::config::TrackerSettings;
use crate::domain::WorkItem;
use crate::error::{BumperError, Result};
use crate::tracker::{filter_expression, TrackerClient};

const TOKEN_HEADER: &str = "X-TrackerToken";

/// Blocking client for the Pivotal Tracker v5 stories endpoint
pub struct HttpTrackerClient {
    client: Client,
    base_url: String,
    project_id: u64,
    api_key: String,
}

impl HttpTrackerClient {
    pub fn new(settings: &TrackerSettings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("bumper/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(HttpTrackerClient {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            project_id: settings.project_id,
            api_key: settings.api_key.clone(),
        })
    }

    /// `<base>/projects/<project-id>/stories`
    pub fn stories_url(&self) -> String {
        format!("{}/projects/{}/stories", self.base_url, self.project_id)
    }
}

impl TrackerClient for HttpTrackerClient {
    fn fetch_work_items(&self, ids: &[u64]) -> Result<Vec<WorkItem>> {
        let filter = filter_expression(ids);
        let url = self.stories_url();
        info!(%url, ids = ids.len(), "querying tracker");

        let response = self
            .client
            .get(&url)
            .header(TOKEN_HEADER, &self.api_key)
            .query(&[("filter", filter.as_str())])
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(BumperError::tracker(format!(
                "{} returned {}: {}",
                url,
                status,
                body.trim()
            )));
        }

        let items = decode_work_items(&body)?;
        debug!(items = items.len(), "tracker responded");
        Ok(items)
    }
}

/// Decode a stories response body
pub fn decode_work_items(body: &str) -> Result<Vec<WorkItem>> {
    Ok(serde_json::from_str(body)?)
}
