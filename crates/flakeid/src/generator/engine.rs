use core::fmt;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    config::GeneratorConfig,
    error::Result,
    generator::{GeneratorState, Mutex, MutexGuard},
    layout::{IdComponents, compose, decompose},
    time::{Clock, SystemClock},
};

/// A lock-based Snowflake ID generator safe to share between threads.
///
/// Every call to [`generate`] reads the clock, updates the per-millisecond
/// sequence and composes the ID inside a single critical section, so IDs
/// from one generator are unique and never decrease in issue order. Share a
/// generator with `Arc` or scoped borrows; each machine ID should be owned
/// by exactly one generator at a time.
///
/// ## Features
/// - ✅ Thread-safe
/// - ✅ Detects clocks that move backwards
/// - ✅ Waits out sequence exhaustion instead of failing
///
/// ## Timestamp range
/// The timestamp field holds 41 bits of milliseconds past the epoch, about
/// 69.7 years. Running a generator past that point, or before its epoch, is
/// a configuration mistake the generator does not guard against.
///
/// [`generate`]: SnowflakeGenerator::generate
pub struct SnowflakeGenerator<C = SystemClock>
where
    C: Clock,
{
    #[cfg(feature = "cache-padded")]
    state: crossbeam_utils::CachePadded<Mutex<GeneratorState>>,
    #[cfg(not(feature = "cache-padded"))]
    state: Mutex<GeneratorState>,
    config: GeneratorConfig,
    clock: C,
}

impl SnowflakeGenerator<SystemClock> {
    /// Creates a wall-clock generator anchored at [`DEFAULT_EPOCH`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `machine_id` is outside
    /// `0..=1023`.
    ///
    /// # Example
    ///
    /// ```
    /// use flakeid::SnowflakeGenerator;
    ///
    /// let generator = SnowflakeGenerator::with_machine_id(455).unwrap();
    /// let id = generator.generate().unwrap();
    /// assert_eq!(generator.decode(id).machine_id, 455);
    /// ```
    ///
    /// [`DEFAULT_EPOCH`]: crate::DEFAULT_EPOCH
    /// [`Error::Configuration`]: crate::Error::Configuration
    pub fn with_machine_id(machine_id: i64) -> Result<Self> {
        Self::from_config(GeneratorConfig::with_machine_id(machine_id)?, SystemClock)
    }
}

impl<C> SnowflakeGenerator<C>
where
    C: Clock,
{
    /// Creates a new generator for `machine_id`, counting time from `epoch`
    /// (milliseconds since the Unix epoch) as read from `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `machine_id` is outside
    /// `0..=1023`.
    ///
    /// # Example
    ///
    /// ```
    /// use flakeid::{SnowflakeGenerator, SystemClock, TWITTER_EPOCH};
    ///
    /// let generator = SnowflakeGenerator::new(7, TWITTER_EPOCH, SystemClock).unwrap();
    /// let a = generator.generate().unwrap();
    /// let b = generator.generate().unwrap();
    /// assert!(b > a);
    /// ```
    ///
    /// [`Error::Configuration`]: crate::Error::Configuration
    pub fn new(machine_id: i64, epoch: i64, clock: C) -> Result<Self> {
        Self::from_config(GeneratorConfig::new(machine_id, epoch)?, clock)
    }

    /// Creates a new generator from a configuration, re-validating it first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the configured machine ID is
    /// outside `0..=1023`.
    ///
    /// [`Error::Configuration`]: crate::Error::Configuration
    pub fn from_config(config: GeneratorConfig, clock: C) -> Result<Self> {
        config.validate()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            machine_id = config.machine_id(),
            epoch = config.epoch(),
            "snowflake generator created"
        );

        let state = Mutex::new(GeneratorState::default());
        Ok(Self {
            #[cfg(feature = "cache-padded")]
            state: crossbeam_utils::CachePadded::new(state),
            #[cfg(not(feature = "cache-padded"))]
            state,
            config,
            clock,
        })
    }

    /// Generates the next ID.
    ///
    /// If 4096 IDs have already been issued in the current millisecond, this
    /// call spins until the clock moves on. It never gives up early.
    ///
    /// # Errors
    ///
    /// - [`Error::ClockRegression`] if the clock reads earlier than the last
    ///   issued timestamp. No ID is issued and the generator state is left
    ///   as it was; later calls succeed once the clock catches up.
    /// - [`Error::LockPoisoned`] if another thread panicked while generating
    ///   (never with the `parking-lot` feature).
    ///
    /// [`Error::ClockRegression`]: crate::Error::ClockRegression
    /// [`Error::LockPoisoned`]: crate::Error::LockPoisoned
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self) -> Result<i64> {
        let mut state = self.lock()?;
        let now = self.offset_now();
        let (timestamp, sequence) = state.advance(now, || self.offset_now())?;
        Ok(compose(timestamp, self.config.machine_id(), sequence))
    }

    /// Splits `id` into its absolute timestamp, machine ID and sequence.
    ///
    /// Takes no lock and never fails. Exactly inverts [`generate`] for IDs
    /// issued by a generator with the same epoch.
    ///
    /// [`generate`]: SnowflakeGenerator::generate
    pub fn decode(&self, id: i64) -> IdComponents {
        decompose(id, self.config.epoch())
    }

    pub const fn machine_id(&self) -> i64 {
        self.config.machine_id()
    }

    pub const fn epoch(&self) -> i64 {
        self.config.epoch()
    }

    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Milliseconds since this generator's epoch.
    fn offset_now(&self) -> i64 {
        self.clock.current_millis() - self.config.epoch()
    }

    fn lock(&self) -> Result<MutexGuard<'_, GeneratorState>> {
        #[cfg(feature = "parking-lot")]
        {
            Ok(self.state.lock())
        }
        #[cfg(not(feature = "parking-lot"))]
        {
            Ok(self.state.lock()?)
        }
    }
}

impl<C> fmt::Debug for SnowflakeGenerator<C>
where
    C: Clock,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowflakeGenerator")
            .field("machine_id", &self.config.machine_id())
            .field("epoch", &self.config.epoch())
            .finish_non_exhaustive()
    }
}
