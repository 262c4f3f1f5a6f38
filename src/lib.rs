//! gcal_holidays
//!
//! A small Rust library for listing public holidays from Google Calendar's per-country
//! holiday calendars. Pairs with the `gcal-holidays` CLI.
//!
//! ### Features
//! - Fluent [`HolidayQuery`] builder: API key, country, date window, output shape
//! - Natural date input (`"March 5, 2024"`, `"2024-03-05"`, `"tomorrow"`, ...)
//! - Three output shapes: full provider events, `{name, date}` pairs, or bare dates,
//!   always sorted by date
//! - JSON / CSV / text rendering for command-line use
//!
//! ### Example
//! ```no_run
//! use gcal_holidays::{HolidayQuery, Holidays};
//!
//! let mut query = HolidayQuery::new();
//! query.with_api_key("AIza...").in_country("US").with_dates_only();
//! query.from("2024-01-01")?.to("January 1, 2025")?;
//!
//! if let Holidays::DatesOnly(dates) = query.list()? {
//!     println!("{dates:?}");
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod clock;
pub mod dates;
pub mod error;
pub mod models;
pub mod query;
pub mod render;
pub mod transport;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ErrorKind, HolidayError};
pub use models::{Holiday, Holidays, OutputMode};
pub use query::HolidayQuery;
pub use transport::{HttpTransport, Transport};
