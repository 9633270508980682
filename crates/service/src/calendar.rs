//! Calendar provider seam, the Google Calendar REST client and the service
//! the assistant and briefings read from.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use async_trait::async_trait;
use chief_core::{CalendarConfig, CalendarEvent, EventTime, NewEvent};
use chrono::{DateTime, Days, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::ServiceError;

const GOOGLE_API_BASE: &str = "https://www.googleapis.com";
const EVENT_TIME_ZONE: &str = "America/New_York";

/// Working hours used when looking for free days.
const DAY_START_HOUR: u32 = 8;
const DAY_END_HOUR: u32 = 18;

#[async_trait]
pub trait CalendarProvider: Send + Sync {
    /// Single events overlapping `[start, end)`, ordered by start time.
    async fn events_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, ServiceError>;

    async fn create_event(&self, event: &NewEvent) -> Result<CalendarEvent, ServiceError>;
}

#[derive(Deserialize)]
struct EventList {
    #[serde(default)]
    items: Vec<CalendarEvent>,
}

/// Google Calendar v3 client for the `primary` calendar.
///
/// The bearer token is provisioned out of band; nothing here refreshes it.
pub struct GoogleCalendarClient {
    client: reqwest::Client,
    access_token: String,
    base_url: String,
}

impl std::fmt::Debug for GoogleCalendarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleCalendarClient")
            .field("access_token", &"***")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GoogleCalendarClient {
    /// # Errors
    /// Returns `ServiceError::Calendar` if the HTTP client cannot be built.
    pub fn new(access_token: String, base_url: String) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(StdDuration::from_secs(30))
            .build()
            .map_err(|e| ServiceError::Calendar(e.to_string()))?;
        Ok(Self { client, access_token, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    /// # Errors
    /// Returns `ServiceError::Calendar` if the HTTP client cannot be built.
    pub fn from_config(config: &CalendarConfig) -> Result<Self, ServiceError> {
        Self::new(config.access_token.clone(), GOOGLE_API_BASE.to_owned())
    }

    fn events_url(&self) -> String {
        format!("{}/calendar/v3/calendars/primary/events", self.base_url)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ServiceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ServiceError::Calendar(format!("HTTP {}: {}", status.as_u16(), chief_llm::truncate(&body, 200))))
    }
}

#[async_trait]
impl CalendarProvider for GoogleCalendarClient {
    async fn events_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, ServiceError> {
        let response = self
            .client
            .get(self.events_url())
            .bearer_auth(&self.access_token)
            .query(&[
                ("timeMin", start.to_rfc3339()),
                ("timeMax", end.to_rfc3339()),
                ("singleEvents", "true".to_owned()),
                ("orderBy", "startTime".to_owned()),
            ])
            .send()
            .await
            .map_err(|e| ServiceError::Calendar(e.to_string()))?;
        let list: EventList = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| ServiceError::Calendar(e.to_string()))?;
        Ok(list.items)
    }

    async fn create_event(&self, event: &NewEvent) -> Result<CalendarEvent, ServiceError> {
        let mut body = json!({
            "summary": event.summary,
            "start": {"dateTime": event.start.to_rfc3339(), "timeZone": EVENT_TIME_ZONE},
            "end": {"dateTime": event.end.to_rfc3339(), "timeZone": EVENT_TIME_ZONE},
        });
        if let Some(description) = event.description.as_deref().filter(|d| !d.is_empty()) {
            body["description"] = json!(description);
        }
        if let Some(location) = event.location.as_deref().filter(|l| !l.is_empty()) {
            body["location"] = json!(location);
        }

        let response = self
            .client
            .post(self.events_url())
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| ServiceError::Calendar(e.to_string()))?;
        Self::check(response).await?.json().await.map_err(|e| ServiceError::Calendar(e.to_string()))
    }
}

/// A whole working day with no timed events.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FreeSlot {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub duration_minutes: i64,
}

/// Calendar reads and writes in the user's local time.
pub struct CalendarService {
    provider: Option<Arc<dyn CalendarProvider>>,
    timezone: FixedOffset,
}

impl CalendarService {
    #[must_use]
    pub fn new(provider: Option<Arc<dyn CalendarProvider>>, timezone: FixedOffset) -> Self {
        Self { provider, timezone }
    }

    fn provider(&self) -> Result<&dyn CalendarProvider, ServiceError> {
        self.provider
            .as_deref()
            .ok_or_else(|| ServiceError::NotConfigured("calendar (set CHIEF_CALENDAR_TOKEN)".to_owned()))
    }

    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.timezone)
    }

    fn local_midnight(&self, date: NaiveDate) -> DateTime<Utc> {
        local_at(self.timezone, date, 0).with_timezone(&Utc)
    }

    /// Events on the given local day.
    pub async fn events_on(&self, date: NaiveDate) -> Result<Vec<CalendarEvent>, ServiceError> {
        let start = self.local_midnight(date);
        let end = self.local_midnight(date + Days::new(1));
        self.provider()?.events_between(start, end).await
    }

    pub async fn todays_events(&self) -> Result<Vec<CalendarEvent>, ServiceError> {
        self.events_on(self.now().date_naive()).await
    }

    pub async fn tomorrows_events(&self) -> Result<Vec<CalendarEvent>, ServiceError> {
        self.events_on(self.now().date_naive() + Days::new(1)).await
    }

    /// Events from now until `days` days ahead.
    pub async fn upcoming_events(&self, days: u32) -> Result<Vec<CalendarEvent>, ServiceError> {
        let start = Utc::now();
        let end = start + chrono::Duration::days(i64::from(days));
        self.provider()?.events_between(start, end).await
    }

    pub async fn create_event(&self, event: &NewEvent) -> Result<CalendarEvent, ServiceError> {
        if event.summary.trim().is_empty() {
            return Err(ServiceError::InvalidInput("event summary is empty".to_owned()));
        }
        if event.end <= event.start {
            return Err(ServiceError::InvalidInput("event must end after it starts".to_owned()));
        }
        let created = self.provider()?.create_event(event).await?;
        tracing::info!(summary = %event.summary, start = %event.start, "calendar event created");
        Ok(created)
    }

    /// Working days in the next `days_ahead` with no timed events.
    pub async fn find_free_days(&self, days_ahead: u32) -> Result<Vec<FreeSlot>, ServiceError> {
        let events = self.upcoming_events(days_ahead).await?;
        Ok(free_days(&events, self.now().date_naive(), days_ahead, self.timezone))
    }
}

/// Days starting at `today` on which no timed event begins.
///
/// All-day events do not block a day.
#[must_use]
pub fn free_days(
    events: &[CalendarEvent],
    today: NaiveDate,
    days_ahead: u32,
    timezone: FixedOffset,
) -> Vec<FreeSlot> {
    (0..u64::from(days_ahead))
        .map(|offset| today + Days::new(offset))
        .filter(|day| {
            !events.iter().any(|e| match &e.start {
                EventTime::DateTime { date_time } => {
                    date_time.with_timezone(&timezone).date_naive() == *day
                },
                EventTime::Date { .. } => false,
            })
        })
        .map(|day| {
            let start = local_at(timezone, day, DAY_START_HOUR);
            let end = local_at(timezone, day, DAY_END_HOUR);
            FreeSlot { start, end, duration_minutes: (end - start).num_minutes() }
        })
        .collect()
}

fn local_at(timezone: FixedOffset, date: NaiveDate, hour: u32) -> DateTime<FixedOffset> {
    let naive = date.and_time(NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN));
    let offset = chrono::Duration::seconds(i64::from(timezone.local_minus_utc()));
    timezone.from_utc_datetime(&(naive - offset))
}
