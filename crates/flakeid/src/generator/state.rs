use crate::{
    error::{Error, Result},
    layout::MAX_SEQUENCE,
};

/// The mutable half of a generator: the last issued timestamp offset and the
/// sequence used with it.
///
/// Only ever touched while the owning generator's lock is held.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct GeneratorState {
    /// `None` until the first ID is issued.
    last_timestamp: Option<i64>,
    sequence: i64,
}

impl GeneratorState {
    /// Advances the state for a clock reading of `now` and returns the
    /// `(timestamp, sequence)` pair to encode.
    ///
    /// When the sequence for `now` is exhausted, `resample` is polled until it
    /// reports a later offset. On a clock regression the state is left
    /// untouched.
    pub(crate) fn advance(
        &mut self,
        now: i64,
        mut resample: impl FnMut() -> i64,
    ) -> Result<(i64, i64)> {
        let (timestamp, sequence) = match self.last_timestamp {
            Some(last) if now < last => {
                return Err(Self::cold_clock_behind(now, last));
            }
            Some(last) if now == last => {
                let sequence = (self.sequence + 1) & MAX_SEQUENCE;
                if sequence == 0 {
                    (Self::wait_past(last, &mut resample), 0)
                } else {
                    (now, sequence)
                }
            }
            _ => (now, 0),
        };

        self.last_timestamp = Some(timestamp);
        self.sequence = sequence;
        Ok((timestamp, sequence))
    }

    #[cold]
    #[inline(never)]
    fn cold_clock_behind(now: i64, last: i64) -> Error {
        #[cfg(feature = "tracing")]
        tracing::error!(now, last, "clock moved backwards, refusing to issue an id");
        Error::ClockRegression { now, last }
    }

    #[cold]
    fn wait_past(last: i64, resample: &mut impl FnMut() -> i64) -> i64 {
        #[cfg(feature = "tracing")]
        tracing::debug!(last, "sequence exhausted, spinning until the next millisecond");
        loop {
            let now = resample();
            if now > last {
                return now;
            }
            core::hint::spin_loop();
        }
    }
}
