use serde_json::json;
use tracing::{error, warn};

use crate::errors::CoreError;
use crate::http::endpoints;
use crate::http::ApiClient;
use crate::models::report::{WeeklyAIReport, WeeklyReportRequest};
use crate::models::wire::FromWire;

/// Static path of the "biggest stories of the week" PDF.
pub const TOP_STORIES_PDF_PATH: &str = "/assets/biggest_stories_of_the_week.pdf";

/// On-demand AI report generation.
#[derive(Debug, Clone)]
pub struct ReportService {
    client: ApiClient,
}

impl ReportService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Generate a weekly report. Without a request an empty JSON object is
    /// posted and the backend picks the defaults (current week).
    pub async fn generate_weekly_report(
        &self,
        request: Option<&WeeklyReportRequest>,
    ) -> Result<WeeklyAIReport, CoreError> {
        let result = async {
            let body = match request {
                Some(request) => self.client.post(endpoints::reports::weekly(), request).await?,
                None => self.client.post(endpoints::reports::weekly(), &json!({})).await?,
            };
            WeeklyAIReport::from_wire(body)
        }
        .await;
        result.inspect_err(|e| error!("Error generating weekly report: {e}"))
    }

    /// URL of the top-stories PDF.
    ///
    /// The backend has no endpoint for this yet, so a fixed asset path is
    /// returned and the call can never fail.
    // TODO: query the backend once it exposes a top-stories PDF endpoint.
    pub fn top_stories_pdf_url(&self) -> &'static str {
        warn!("Top stories PDF URL is a static placeholder, not served by the backend");
        TOP_STORIES_PDF_PATH
    }
}
