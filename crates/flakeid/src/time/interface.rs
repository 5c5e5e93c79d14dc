use std::sync::Arc;

/// Unix epoch: Thursday, January 1, 1970 00:00:00 UTC
pub const UNIX_EPOCH_MILLIS: i64 = 0;

/// Twitter epoch: Thursday, November 4, 2010 1:42:54.657 UTC
pub const TWITTER_EPOCH: i64 = 1_288_834_974_657;

/// Discord epoch: Thursday, January 1, 2015 00:00:00 UTC
pub const DISCORD_EPOCH: i64 = 1_420_070_400_000;

/// Default epoch: Friday, November 8, 2024 08:04:26 UTC
///
/// Timestamps fit in the 41-bit field until mid-2094.
pub const DEFAULT_EPOCH: i64 = 1_731_053_066_000;

/// A source of wall-clock time in **milliseconds since the Unix epoch**.
///
/// The generator subtracts its own epoch from every reading, so a clock never
/// needs to know which epoch it is serving. Implementations are expected to be
/// monotonic in the happy path; the generator detects and rejects readings that
/// go backwards.
///
/// # Example
///
/// ```
/// use flakeid::Clock;
///
/// struct FixedTime;
/// impl Clock for FixedTime {
///     fn current_millis(&self) -> i64 {
///         1234
///     }
/// }
///
/// assert_eq!(FixedTime.current_millis(), 1234);
/// ```
pub trait Clock {
    /// Returns the current time in milliseconds since 1970-01-01 UTC.
    fn current_millis(&self) -> i64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn current_millis(&self) -> i64 {
        (**self).current_millis()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn current_millis(&self) -> i64 {
        (**self).current_millis()
    }
}
