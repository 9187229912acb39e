//! Timestamp formatting utilities
//!
//! A [`TimestampFormat`] holds exactly one active strftime pattern. It can be
//! derived from a [`Locale`], replaced by a custom pattern, and extended with
//! sub-second [`TimePrecision`]. Later calls supersede earlier ones, except
//! precision, which applies on top of whatever pattern is active.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::{self, Write};
use std::str::FromStr;

/// Pattern used when no locale was selected or the locale is unknown.
pub const DEFAULT_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

const MERIDIEM_SUFFIX: &str = " %p";

/// Locales with a predefined date/time layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Fr,
    De,
    Zh,
    Ja,
    Ru,
    Es,
    It,
    Ar,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::De => "de",
            Locale::Zh => "zh",
            Locale::Ja => "ja",
            Locale::Ru => "ru",
            Locale::Es => "es",
            Locale::It => "it",
            Locale::Ar => "ar",
        }
    }

    pub fn pattern(&self) -> &'static str {
        match self {
            Locale::En => "%m-%d-%Y %-I:%M:%S %p",
            Locale::Fr | Locale::Es | Locale::It => "%d-%m-%Y %H:%M:%S",
            Locale::De | Locale::Ru => "%d.%m.%Y %H:%M:%S",
            Locale::Zh | Locale::Ja => "%Y年%m月%d日 %H:%M:%S",
            Locale::Ar => "%d/%m/%Y %H:%M:%S",
        }
    }

    /// English is the only locale rendered on a 12-hour clock.
    pub fn is_twelve_hour(&self) -> bool {
        matches!(self, Locale::En)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            "de" => Ok(Locale::De),
            "zh" => Ok(Locale::Zh),
            "ja" => Ok(Locale::Ja),
            "ru" => Ok(Locale::Ru),
            "es" => Ok(Locale::Es),
            "it" => Ok(Locale::It),
            "ar" => Ok(Locale::Ar),
            _ => Err(format!("Unknown locale: '{}'", s)),
        }
    }
}

/// Sub-second precision appended to the seconds field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePrecision {
    /// `.000`
    Milli,
    /// `.000000`
    Micro,
    /// `.000000000`
    Nano,
}

impl TimePrecision {
    pub fn digits(&self) -> usize {
        match self {
            TimePrecision::Milli => 3,
            TimePrecision::Micro => 6,
            TimePrecision::Nano => 9,
        }
    }

    /// chrono specifier producing a dot followed by [`digits`](Self::digits) digits.
    pub fn specifier(&self) -> &'static str {
        match self {
            TimePrecision::Milli => "%.3f",
            TimePrecision::Micro => "%.6f",
            TimePrecision::Nano => "%.9f",
        }
    }
}

impl FromStr for TimePrecision {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "milli" | "ms" => Ok(TimePrecision::Milli),
            "micro" | "us" => Ok(TimePrecision::Micro),
            "nano" | "ns" => Ok(TimePrecision::Nano),
            _ => Err(LoggerError::config(
                "TimePrecision",
                format!("unknown precision '{}'", s),
            )),
        }
    }
}

/// The active timestamp pattern.
///
/// # Examples
///
/// ```
/// use rust_color_logger::core::{TimePrecision, TimestampFormat};
/// use chrono::{TimeZone, Utc};
///
/// let mut format = TimestampFormat::for_language("en");
/// format.set_precision(TimePrecision::Milli);
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 15, 30, 45).unwrap();
/// assert_eq!(format.format(&at), "01-08-2025 3:30:45.000 PM");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampFormat {
    base: String,
    precision: Option<TimePrecision>,
    locale: Option<Locale>,
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self {
            base: DEFAULT_PATTERN.to_string(),
            precision: None,
            locale: None,
        }
    }
}

impl TimestampFormat {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn for_language(code: &str) -> Self {
        let mut format = Self::default();
        format.set_language(code);
        format
    }

    #[must_use]
    pub fn custom(pattern: impl Into<String>) -> Self {
        let mut format = Self::default();
        format.set_custom(pattern);
        format
    }

    /// Select the pattern for a locale code.
    ///
    /// Unknown codes fall back to [`DEFAULT_PATTERN`]. Any precision set
    /// earlier is discarded along with the old pattern.
    pub fn set_language(&mut self, code: &str) {
        match code.parse::<Locale>() {
            Ok(locale) => {
                self.base = locale.pattern().to_string();
                self.locale = Some(locale);
            }
            Err(_) => {
                self.base = DEFAULT_PATTERN.to_string();
                self.locale = None;
            }
        }
        self.precision = None;
    }

    pub fn set_precision(&mut self, precision: TimePrecision) {
        self.precision = Some(precision);
    }

    /// Replace the pattern verbatim. Not validated.
    pub fn set_custom(&mut self, pattern: impl Into<String>) {
        self.base = pattern.into();
        self.locale = None;
        self.precision = None;
    }

    #[must_use]
    pub fn with_precision(mut self, precision: TimePrecision) -> Self {
        self.set_precision(precision);
        self
    }

    pub fn locale(&self) -> Option<Locale> {
        self.locale
    }

    pub fn precision(&self) -> Option<TimePrecision> {
        self.precision
    }

    /// The effective strftime pattern, precision included.
    ///
    /// On a 12-hour locale the fraction goes before the trailing meridiem so
    /// the line still ends with `AM`/`PM`.
    pub fn pattern(&self) -> Cow<'_, str> {
        let Some(precision) = self.precision else {
            return Cow::Borrowed(&self.base);
        };

        if self.locale.is_some_and(|l| l.is_twelve_hour()) {
            if let Some(head) = self.base.strip_suffix(MERIDIEM_SUFFIX) {
                return Cow::Owned(format!(
                    "{}{}{}",
                    head,
                    precision.specifier(),
                    MERIDIEM_SUFFIX
                ));
            }
        }

        Cow::Owned(format!("{}{}", self.base, precision.specifier()))
    }

    /// Check that chrono understands every specifier in the pattern.
    pub fn validate(&self) -> Result<()> {
        let pattern = self.pattern();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::time_format(pattern.as_ref()));
        }
        Ok(())
    }

    /// Render `datetime`, failing on a malformed pattern.
    pub fn try_format<Tz>(&self, datetime: &DateTime<Tz>) -> Result<String>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let pattern = self.pattern();
        let mut out = String::new();
        write!(out, "{}", datetime.format(&pattern))
            .map_err(|_| LoggerError::time_format(pattern.as_ref()))?;
        Ok(out)
    }

    /// Render `datetime`; a malformed pattern comes back as the raw pattern text.
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.try_format(datetime)
            .unwrap_or_else(|_| self.pattern().into_owned())
    }
}
