use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static ISO_ZULU: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{4})-(\d{2})-(\d{2})T(\d{2}):(\d{2}):(\d{2})\.(\d+)Z")
        .expect("ISO timestamp pattern is valid")
});

static DATE_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{4})-(\d{2})-(\d{2}) (\d{2}):(\d{2}):(\d{2})\.(\d+)")
        .expect("date-time pattern is valid")
});

static TIME_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}):(\d{2}):(\d{2})\.(\d+)").expect("time pattern is valid")
});

/// Timestamp shapes, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    /// `2024-01-01T00:00:00.000Z`, normalized to UTC
    IsoZulu,
    /// `2024-01-01 00:00:00.000`
    DateTime,
    /// `00:00:00.000`, dated with the reference date
    TimeOnly,
}

const TIERS: [Tier; 3] = [Tier::IsoZulu, Tier::DateTime, Tier::TimeOnly];

impl Tier {
    fn regex(self) -> &'static Regex {
        match self {
            Tier::IsoZulu => &ISO_ZULU,
            Tier::DateTime => &DATE_TIME,
            Tier::TimeOnly => &TIME_ONLY,
        }
    }

    /// ISO timestamps keep the first nine fraction digits; the other tiers
    /// reject longer fractions.
    fn truncates_fraction(self) -> bool {
        self == Tier::IsoZulu
    }

    fn parse(self, caps: &Captures<'_>, reference_date: NaiveDate) -> Option<NaiveDateTime> {
        match self {
            Tier::IsoZulu | Tier::DateTime => {
                let date = date_from(caps, 1)?;
                let time = time_from(caps, 4, self.truncates_fraction())?;
                Some(date.and_time(time))
            }
            Tier::TimeOnly => Some(reference_date.and_time(time_from(caps, 1, false)?)),
        }
    }
}

/// Pulls the first recognizable timestamp out of a log line.
///
/// The first tier whose pattern matches anywhere in the line decides the
/// outcome: if the matched text is not a valid timestamp (month 13, a
/// date-time fraction longer than nine digits, ...) the line has no timestamp,
/// and later tiers are not consulted. ISO fractions longer than nine digits
/// are truncated to nanoseconds instead.
#[derive(Debug, Clone)]
pub struct TimestampExtractor {
    reference_date: NaiveDate,
}

impl TimestampExtractor {
    /// Bare times are dated with the current local date.
    pub fn today() -> Self {
        Self::with_reference_date(Local::now().date_naive())
    }

    pub fn with_reference_date(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }

    pub fn extract(&self, line: &str) -> Option<NaiveDateTime> {
        let (tier, caps) = TIERS
            .iter()
            .find_map(|tier| tier.regex().captures(line).map(|caps| (*tier, caps)))?;

        tier.parse(&caps, self.reference_date)
    }
}

impl Default for TimestampExtractor {
    fn default() -> Self {
        Self::today()
    }
}

fn date_from(caps: &Captures<'_>, first: usize) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(
        number(caps, first)? as i32,
        number(caps, first + 1)?,
        number(caps, first + 2)?,
    )
}

fn time_from(caps: &Captures<'_>, first: usize, truncate: bool) -> Option<NaiveTime> {
    NaiveTime::from_hms_nano_opt(
        number(caps, first)?,
        number(caps, first + 1)?,
        number(caps, first + 2)?,
        fraction_nanos(caps.get(first + 3)?.as_str(), truncate)?,
    )
}

fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

/// `"5"` -> 500_000_000, `"000123"` -> 123_000. More than nine digits is
/// malformed unless `truncate` drops the excess.
fn fraction_nanos(digits: &str, truncate: bool) -> Option<u32> {
    let digits = match digits.len() {
        0 => return None,
        1..=9 => digits,
        _ if truncate => &digits[..9],
        _ => return None,
    };

    let value: u32 = digits.parse().ok()?;
    Some(value * 10u32.pow(9 - digits.len() as u32))
}
