use gloo_net::http::Request;
use log::info;
use web_sys::RequestCache;

use crate::error::LoadError;
use crate::models::SiteData;

/// Fetches the site data snapshot, bypassing the HTTP cache. One attempt.
pub async fn load_site_data(url: &str) -> Result<SiteData, LoadError> {
    let response = Request::get(url)
        .cache(RequestCache::NoStore)
        .send()
        .await?;

    if !response.ok() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let body = response.text().await?;
    let data = SiteData::from_json_str(&body)?;
    info!(
        "loaded site data: {} coaches, {} tracks, {} partners",
        data.coaches.len(),
        data.tracks.len(),
        data.partners.len()
    );
    Ok(data)
}
