//! Fluent query builder for Google Calendar's public **holiday calendars**.
//!
//! Each country has a calendar with the id `en.<code>#holiday@group.v.calendar.google.com`;
//! this module targets its `events` endpoint and returns the holidays in a date window,
//! sorted by date.
//!
//! ### Notes
//! - `timeMin` / `timeMax` are always sent as `YYYY-MM-DDT00:00:00-00:00`.
//! - Only one request is made per `list()`. No retries, no pagination.
//! - An inverted range (`from` after `to`) is sent as-is; the provider decides.
//!
//! Typical usage:
//! ```no_run
//! # use gcal_holidays::HolidayQuery;
//! let holidays = HolidayQuery::new()
//!     .with_api_key("AIza...")
//!     .in_country("US")
//!     .from("January 1, 2025")?
//!     .to("2026-01-01")?
//!     .with_minimal_output()
//!     .list()?;
//! # Ok::<(), gcal_holidays::HolidayError>(())
//! ```
use crate::clock::{Clock, SystemClock};
use crate::dates;
use crate::error::{HolidayError, Result};
use crate::models::{EventItem, EventsResponse, Holiday, Holidays, OutputMode};
use crate::transport::{HttpTransport, Transport};
use chrono::NaiveDate;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://content.googleapis.com/calendar/v3";

// Already escaped form of `#holiday@group.v.calendar.google.com`.
const HOLIDAY_CALENDAR_SUFFIX: &str = "%23holiday%40group.v.calendar.google.com";

// Allow -, _, . unescaped in calendar codes
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

#[derive(Clone)]
pub struct HolidayQuery<T = HttpTransport> {
    pub base_url: String,
    transport: T,
    today: NaiveDate,
    api_key: Option<String>,
    country_code: Option<String>,
    start_date: String,
    end_date: String,
    minimal: bool,
    dates_only: bool,
}

impl Default for HolidayQuery<HttpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl HolidayQuery<HttpTransport> {
    /// Query over HTTP, with defaults taken from the system clock.
    pub fn new() -> Self {
        Self::with_clock(&SystemClock)
    }

    /// Query over HTTP, with defaults taken from `clock`.
    pub fn with_clock(clock: &impl Clock) -> Self {
        Self::with_transport(HttpTransport::default(), clock)
    }
}

impl<T> HolidayQuery<T> {
    /// Build a query on top of any [`Transport`].
    ///
    /// `start_date` defaults to today, `end_date` to next New Year's Day.
    pub fn with_transport(transport: T, clock: &impl Clock) -> Self {
        let today = clock.today();
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            transport,
            today,
            api_key: None,
            country_code: None,
            start_date: dates::boundary(today),
            end_date: dates::boundary(dates::next_new_year(today)),
            minimal: false,
            dates_only: false,
        }
    }

    /// Set the start of the window. Accepts anything [`dates::parse_natural`] does.
    ///
    /// ### Errors
    /// [`HolidayError::DateParse`] if `date` is not recognizable; the query is left unchanged.
    pub fn from(&mut self, date: &str) -> Result<&mut Self> {
        self.start_date = dates::boundary(dates::parse_natural(date, self.today)?);
        Ok(self)
    }

    /// Set the end of the window. Same rules as [`HolidayQuery::from`].
    pub fn to(&mut self, date: &str) -> Result<&mut Self> {
        self.end_date = dates::boundary(dates::parse_natural(date, self.today)?);
        Ok(self)
    }

    pub fn with_api_key(&mut self, key: impl Into<String>) -> &mut Self {
        self.api_key = Some(key.into());
        self
    }

    /// Select the country calendar (`"US"`, `"german"`, `"uk"`...). Stored lower-cased.
    pub fn in_country(&mut self, code: impl AsRef<str>) -> &mut Self {
        self.country_code = Some(code.as_ref().to_lowercase());
        self
    }

    pub fn with_minimal_output(&mut self) -> &mut Self {
        self.minimal = true;
        self
    }

    /// Dates-only output takes precedence over minimal output, whichever was set last.
    pub fn with_dates_only(&mut self) -> &mut Self {
        self.dates_only = true;
        self
    }

    /// Point the query at another API root (a proxy or a test server).
    pub fn with_base_url(&mut self, base_url: impl Into<String>) -> &mut Self {
        self.base_url = base_url.into();
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    pub fn output_mode(&self) -> OutputMode {
        if self.dates_only {
            OutputMode::DatesOnly
        } else if self.minimal {
            OutputMode::Minimal
        } else {
            OutputMode::Full
        }
    }

    /// Events endpoint for the configured country.
    ///
    /// ### Errors
    /// [`HolidayError::Configuration`] if no country was set.
    pub fn events_url(&self) -> Result<String> {
        let country = self.require_country()?;
        Ok(self.calendar_events_url(country))
    }

    fn calendar_events_url(&self, country: &str) -> String {
        let code = percent_encoding::utf8_percent_encode(country, SAFE);
        format!(
            "{}/calendars/en.{}{}/events",
            self.base_url.trim_end_matches('/'),
            code,
            HOLIDAY_CALENDAR_SUFFIX
        )
    }

    fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or(HolidayError::Configuration("missing API key"))
    }

    fn require_country(&self) -> Result<&str> {
        self.country_code
            .as_deref()
            .ok_or(HolidayError::Configuration("missing country code"))
    }
}

impl<T: Transport> HolidayQuery<T> {
    /// Fetch the holidays in the configured window.
    ///
    /// ### Returns
    /// [`Holidays`] shaped by [`HolidayQuery::output_mode`], sorted by date ascending.
    /// Holidays sharing a date keep the provider's order. A response without `items`
    /// yields an empty list.
    ///
    /// ### Errors
    /// - [`HolidayError::Configuration`] when the API key or the country is missing
    ///   (checked in that order, before any request)
    /// - transport errors from the underlying [`Transport`]
    /// - [`HolidayError::Decode`] when an item lacks `start.date`, or lacks `summary`
    ///   in minimal mode
    pub fn list(&self) -> Result<Holidays> {
        let api_key = self.require_api_key()?;
        let country = self.require_country()?;
        let url = self.calendar_events_url(country);

        let query = [
            ("singleEvents", "false"),
            ("timeMax", self.end_date.as_str()),
            ("timeMin", self.start_date.as_str()),
            ("key", api_key),
        ];

        log::debug!(
            "listing holidays for {country} from {} to {}",
            self.start_date,
            self.end_date
        );
        let body = self.transport.get_json(&url, &query)?;

        let decode = |source: serde_json::Error| HolidayError::Decode {
            url: url.clone(),
            source,
        };
        let response: EventsResponse = serde_json::from_value(body).map_err(decode)?;
        let items = response.items.unwrap_or_default();
        log::debug!("provider returned {} items", items.len());

        shape(items, self.output_mode()).map_err(decode)
    }
}

/// Sort raw items by `start.date` (stable) and project them into `mode`.
fn shape(items: Vec<Value>, mode: OutputMode) -> serde_json::Result<Holidays> {
    let mut events = items
        .into_iter()
        .map(|raw| Ok::<_, serde_json::Error>((EventItem::deserialize(&raw)?, raw)))
        .collect::<serde_json::Result<Vec<_>>>()?;

    events.sort_by(|(a, _), (b, _)| a.start.date.cmp(&b.start.date));

    let out = match mode {
        OutputMode::DatesOnly => {
            Holidays::DatesOnly(events.into_iter().map(|(e, _)| e.start.date).collect())
        }
        OutputMode::Minimal => Holidays::Minimal(
            events
                .into_iter()
                .map(|(e, _)| {
                    let name = e.summary.ok_or_else(|| {
                        <serde_json::Error as serde::de::Error>::missing_field("summary")
                    })?;
                    Ok(Holiday {
                        name,
                        date: e.start.date,
                    })
                })
                .collect::<serde_json::Result<Vec<_>>>()?,
        ),
        OutputMode::Full => Holidays::Full(events.into_iter().map(|(_, raw)| raw).collect()),
    };
    Ok(out)
}

impl<T: fmt::Debug> fmt::Debug for HolidayQuery<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HolidayQuery")
            .field("base_url", &self.base_url)
            .field("transport", &self.transport)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("country_code", &self.country_code)
            .field("start_date", &self.start_date)
            .field("end_date", &self.end_date)
            .field("output_mode", &self.output_mode())
            .finish()
    }
}
