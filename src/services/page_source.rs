use async_trait::async_trait;
use gloo_net::http::Request;

use crate::components::copy_page::PageSource;
use crate::errors::CopyPageError;

/// Fetches page sources over HTTP with the browser's `fetch`
///
/// The status code does not decide success: a 404 whose body reads is handed
/// back like any other text. Only a failed request or an unreadable body is an
/// error.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpPageSource;

#[async_trait(?Send)]
impl PageSource for HttpPageSource {
    async fn fetch_text(&self, url: &str) -> Result<String, CopyPageError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| CopyPageError::Fetch(e.to_string()))?;

        let body = response.text().await.map_err(|e| e.to_string());
        page_text(url, response.status(), &response.status_text(), body)
    }
}

/// Decide what a settled response yields
fn page_text(
    url: &str,
    status: u16,
    status_text: &str,
    body: Result<String, String>,
) -> Result<String, CopyPageError> {
    if !(200..300).contains(&status) {
        log::warn!(
            "Page source {} returned {} {}, copying body anyway",
            url,
            status,
            status_text
        );
    }

    body.map_err(CopyPageError::Body)
}
