//! Deterministic clocks and resolvers for task tests.

use crate::task::ports::{ModuleDirResolver, PathResolutionError};
use camino::Utf8PathBuf;
use chrono::{DateTime, FixedOffset, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use std::sync::{Mutex, PoisonError};

/// Clock frozen at a single instant in a chosen offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FixedClock(DateTime<FixedOffset>);

impl FixedClock {
    pub(crate) const fn new(now: DateTime<FixedOffset>) -> Self {
        Self(now)
    }

    pub(crate) fn at(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> eyre::Result<Self> {
        let now = Utc
            .with_ymd_and_hms(year, month, day, hour, minute, second)
            .single()
            .ok_or_else(|| eyre::eyre!("invalid test timestamp"))?;
        Ok(Self(now.fixed_offset()))
    }

    /// Same wall time, read in an offset `hours` west of UTC.
    pub(crate) fn west_by_hours(self, hours: i32) -> eyre::Result<Self> {
        let offset = FixedOffset::west_opt(hours * 3600)
            .ok_or_else(|| eyre::eyre!("invalid test offset"))?;
        let wall = self.0.naive_local();
        let now = offset
            .from_local_datetime(&wall)
            .single()
            .ok_or_else(|| eyre::eyre!("invalid test timestamp"))?;
        Ok(Self(now))
    }

    pub(crate) const fn now(self) -> DateTime<FixedOffset> {
        self.0
    }

    pub(crate) fn later_by(self, delta: TimeDelta) -> Self {
        Self(self.0 + delta)
    }

    pub(crate) fn later_by_minutes(self, minutes: i64) -> Self {
        self.later_by(TimeDelta::minutes(minutes))
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        in_offset(self.0)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }
}

/// Clock that only moves when a test advances it.
#[derive(Debug)]
pub(crate) struct SteppingClock {
    now: Mutex<DateTime<FixedOffset>>,
}

impl SteppingClock {
    pub(crate) const fn new(start: DateTime<FixedOffset>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub(crate) fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += delta;
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        in_offset(*self.now.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn utc(&self) -> DateTime<Utc> {
        self.local().with_timezone(&Utc)
    }
}

/// Presents `now` as local time without consulting the host time zone.
fn in_offset(now: DateTime<FixedOffset>) -> DateTime<Local> {
    DateTime::from_naive_utc_and_offset(now.naive_utc(), *now.offset())
}

/// Resolver that names `<base>/<module>/<year>` without touching disk.
#[derive(Debug, Clone)]
pub(crate) struct StaticModuleDirs {
    base: Utf8PathBuf,
}

impl StaticModuleDirs {
    pub(crate) fn new(base: impl Into<Utf8PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl ModuleDirResolver for StaticModuleDirs {
    fn resolve(&self, module: &str, year: &str) -> Result<Utf8PathBuf, PathResolutionError> {
        Ok(self.base.join(module).join(year))
    }
}
