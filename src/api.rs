//! NEA forecast client (data.gov.sg)

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::state::{DayForecast, Outlook};

/// 4-day forecast resource (array of daily records).
pub const FOUR_DAY_URL: &str = "https://api.data.gov.sg/v1/environment/4-day-weather-forecast";

/// 24-hour forecast resource (one aggregate `general` record).
pub const OUTLOOK_URL: &str = "https://api.data.gov.sg/v1/environment/24-hour-weather-forecast";

/// Fetch error kinds. All collapse into one failed presentation, but the
/// kind stays distinguishable in the message and the recorded action stream.
#[derive(Debug)]
pub enum FetchError {
    /// Request could not be sent or the response never arrived
    Transport(reqwest::Error),
    /// Non-2xx response
    Status(reqwest::StatusCode),
    /// Body is not the expected JSON
    Decode(reqwest::Error),
    /// Decoded data lacks the expected record path or the record set is empty
    Shape(&'static str),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Transport(e) => write!(f, "could not reach the forecast service: {}", e),
            FetchError::Status(status) => write!(f, "forecast service returned HTTP {}", status),
            FetchError::Decode(e) => write!(f, "could not decode forecast response: {}", e),
            FetchError::Shape(what) => write!(f, "unexpected forecast response shape: {}", what),
        }
    }
}

impl std::error::Error for FetchError {}

/// Both NEA resources wrap their payload in an `items` array where the first
/// entry is the current issue.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    items: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct FourDayItem {
    forecasts: Vec<DayForecast>,
}

#[derive(Debug, Deserialize)]
struct OutlookItem {
    general: Outlook,
}

async fn get_envelope<T: DeserializeOwned>(url: &str) -> Result<Envelope<T>, FetchError> {
    let response = reqwest::get(url).await.map_err(FetchError::Transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    response.json::<Envelope<T>>().await.map_err(FetchError::Decode)
}

fn current_issue<T>(envelope: Envelope<T>) -> Result<T, FetchError> {
    envelope
        .items
        .into_iter()
        .next()
        .ok_or(FetchError::Shape("response contained no items"))
}

fn extract_days(envelope: Envelope<FourDayItem>) -> Result<Vec<DayForecast>, FetchError> {
    let item = current_issue(envelope)?;
    if item.forecasts.is_empty() {
        return Err(FetchError::Shape("no forecast records"));
    }
    Ok(item.forecasts)
}

fn extract_outlook(envelope: Envelope<OutlookItem>) -> Result<Outlook, FetchError> {
    Ok(current_issue(envelope)?.general)
}

/// Fetch the 4-day forecast records, in upstream order.
pub async fn fetch_four_day() -> Result<Vec<DayForecast>, FetchError> {
    extract_days(get_envelope(FOUR_DAY_URL).await?)
}

/// Fetch the 24-hour general outlook.
pub async fn fetch_outlook() -> Result<Outlook, FetchError> {
    extract_outlook(get_envelope(OUTLOOK_URL).await?)
}
