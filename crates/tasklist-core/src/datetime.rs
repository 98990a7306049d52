use chrono::{
  DateTime,
  LocalResult,
  NaiveDate,
  NaiveDateTime,
  TimeDelta,
  TimeZone,
  Utc
};
use chrono_tz::Tz;
use serde::{
  Deserialize,
  Deserializer
};

pub const EXPIRED_LABEL: &str =
  "期限切れ";

const NAIVE_LIMIT_FORMATS: [&str; 4] = [
  "%Y-%m-%dT%H:%M:%S%.f",
  "%Y-%m-%dT%H:%M",
  "%Y-%m-%d %H:%M:%S",
  "%Y-%m-%d %H:%M"
];

const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

/// A task deadline as sent by the API.
///
/// Offset and date-only timestamps are absolute. A date-time without an
/// offset is wall-clock time in the display timezone and is resolved
/// against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deadline {
  Instant(DateTime<Utc>),
  Local(NaiveDateTime)
}

impl Deadline {
  #[must_use]
  pub fn resolve(
    &self,
    tz: &Tz
  ) -> DateTime<Utc> {
    match self {
      | Deadline::Instant(dt) => *dt,
      | Deadline::Local(ndt) => {
        resolve_local(ndt, tz)
      }
    }
  }
}

impl From<DateTime<Utc>> for Deadline {
  fn from(dt: DateTime<Utc>) -> Self {
    Deadline::Instant(dt)
  }
}

impl<'de> Deserialize<'de> for Deadline {
  fn deserialize<D>(
    deserializer: D
  ) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>
  {
    let raw = String::deserialize(
      deserializer
    )?;
    parse_limit(&raw)
      .map_err(serde::de::Error::custom)
  }
}

fn resolve_local(
  ndt: &NaiveDateTime,
  tz: &Tz
) -> DateTime<Utc> {
  match tz.from_local_datetime(ndt) {
    | LocalResult::Single(dt) => {
      dt.with_timezone(&Utc)
    }
    | LocalResult::Ambiguous(earliest, _) => {
      earliest.with_timezone(&Utc)
    }
    // Skipped by a DST gap; step past it.
    | LocalResult::None => tz
      .from_local_datetime(
        &(*ndt + TimeDelta::hours(1))
      )
      .earliest()
      .map(|dt| dt.with_timezone(&Utc))
      .unwrap_or_else(|| ndt.and_utc())
  }
}

/// Parses a deadline timestamp.
pub fn parse_limit(
  raw: &str
) -> Result<Deadline, String> {
  let trimmed = raw.trim();
  if let Ok(dt) =
    DateTime::parse_from_rfc3339(trimmed)
  {
    return Ok(Deadline::Instant(
      dt.with_timezone(&Utc)
    ));
  }

  if let Some(ndt) =
    NAIVE_LIMIT_FORMATS.iter().find_map(
      |fmt| {
        NaiveDateTime::parse_from_str(
          trimmed, fmt
        )
        .ok()
      }
    )
  {
    return Ok(Deadline::Local(ndt));
  }

  NaiveDate::parse_from_str(
    trimmed,
    DATE_ONLY_FORMAT
  )
  .ok()
  .and_then(|date| date.and_hms_opt(0, 0, 0))
  .map(|ndt| Deadline::Instant(ndt.and_utc()))
  .ok_or_else(|| {
    format!(
      "unrecognized deadline \
       timestamp `{raw}`"
    )
  })
}

/// `YYYY/MM/DD HH:MM`, the numeric two-digit `ja-JP` layout.
#[must_use]
pub fn format_deadline(
  dt: DateTime<Utc>,
  tz: &Tz
) -> String {
  dt.with_timezone(tz)
    .format("%Y/%m/%d %H:%M")
    .to_string()
}

/// `YYYY/M/D H:MM:SS`, the default `ja-JP` locale string.
#[must_use]
pub fn format_deadline_long(
  dt: DateTime<Utc>,
  tz: &Tz
) -> String {
  dt.with_timezone(tz)
    .format("%Y/%-m/%-d %-H:%M:%S")
    .to_string()
}

/// Time left until `deadline`, truncated per unit.
#[must_use]
pub fn format_remaining(
  deadline: DateTime<Utc>,
  now: DateTime<Utc>
) -> String {
  let diff = deadline - now;
  if diff <= TimeDelta::zero() {
    return EXPIRED_LABEL.to_string();
  }

  let days = diff.num_days();
  let hours = diff.num_hours() % 24;
  let minutes = diff.num_minutes() % 60;
  format!(
    "{days}日 {hours:02}時間 \
     {minutes:02}分"
  )
}
