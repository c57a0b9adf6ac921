//! Shared clocks and resolvers for integration tests.

use camino::Utf8PathBuf;
use chrono::{DateTime, FixedOffset, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use overlord::task::ports::{ModuleDirResolver, PathResolutionError};
use std::sync::{Mutex, PoisonError};

/// Returns an instant at a zero UTC offset for test setup.
///
/// # Errors
///
/// Returns an error when the components do not name a valid instant.
pub fn utc_instant(
    (year, month, day): (i32, u32, u32),
    (hour, minute, second): (u32, u32, u32),
) -> eyre::Result<DateTime<FixedOffset>> {
    let instant = Utc
        .with_ymd_and_hms(year, month, day, hour, minute, second)
        .single()
        .ok_or_else(|| eyre::eyre!("invalid test timestamp"))?;
    Ok(instant.fixed_offset())
}

/// Clock that only moves when a test advances it.
#[derive(Debug)]
pub struct SteppingClock {
    now: Mutex<DateTime<FixedOffset>>,
}

impl SteppingClock {
    /// Creates a clock stopped at `start`.
    #[must_use]
    pub const fn new(start: DateTime<FixedOffset>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Moves the clock forward by `delta`.
    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += delta;
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        let now = *self.now.lock().unwrap_or_else(PoisonError::into_inner);
        DateTime::from_naive_utc_and_offset(now.naive_utc(), *now.offset())
    }

    fn utc(&self) -> DateTime<Utc> {
        self.local().with_timezone(&Utc)
    }
}

/// Resolver that names `<base>/<module>/<year>` without touching disk.
#[derive(Debug, Clone)]
pub struct StaticModuleDirs {
    base: Utf8PathBuf,
}

impl StaticModuleDirs {
    /// Creates a resolver rooted at `base`.
    #[must_use]
    pub fn new(base: impl Into<Utf8PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl ModuleDirResolver for StaticModuleDirs {
    fn resolve(&self, module: &str, year: &str) -> Result<Utf8PathBuf, PathResolutionError> {
        Ok(self.base.join(module).join(year))
    }
}
