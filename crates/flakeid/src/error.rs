/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `flakeid` can emit.
///
/// Sequence exhaustion within a millisecond is *not* an error: the generator
/// waits for the clock to advance instead. Decoding never fails.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The machine ID does not fit in the 10-bit machine field.
    ///
    /// Returned only at construction time; no generator is built.
    #[error("machine id {machine_id} out of range (expected 0..={max})")]
    Configuration {
        /// The rejected machine ID.
        machine_id: i64,
        /// The largest machine ID the layout can encode.
        max: i64,
    },

    /// The clock reported a time earlier than the last issued timestamp.
    ///
    /// Both values are millisecond offsets from the generator's epoch. The
    /// generator state is left untouched; the caller decides whether to
    /// retry, abort, or alert.
    #[error("clock moved backwards: now {now}ms is behind last issued {last}ms")]
    ClockRegression {
        /// The offset the clock just reported.
        now: i64,
        /// The offset of the most recently issued ID.
        last: i64,
    },

    /// The generator lock was **poisoned** by a thread that panicked while
    /// holding it.
    ///
    /// When the `parking-lot` feature is enabled, mutexes do not poison, so
    /// this variant is never produced.
    #[error("generator lock poisoned")]
    LockPoisoned,
}

#[cfg_attr(docsrs, doc(cfg(not(feature = "parking-lot"))))]
#[cfg(not(feature = "parking-lot"))]
use crate::generator::{MutexGuard, PoisonError};
#[cfg_attr(docsrs, doc(cfg(not(feature = "parking-lot"))))]
#[cfg(not(feature = "parking-lot"))]
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_values() {
        let err = Error::Configuration {
            machine_id: 1024,
            max: 1023,
        };
        assert_eq!(
            err.to_string(),
            "machine id 1024 out of range (expected 0..=1023)"
        );

        let err = Error::ClockRegression { now: 9, last: 10 };
        assert_eq!(
            err.to_string(),
            "clock moved backwards: now 9ms is behind last issued 10ms"
        );
    }
}
