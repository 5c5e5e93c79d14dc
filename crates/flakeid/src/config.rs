use core::fmt;

use crate::{
    error::{Error, Result},
    layout::{MACHINE_ID_BITS, MAX_MACHINE_ID, SEQUENCE_BITS, TIMESTAMP_BITS},
    time::DEFAULT_EPOCH,
};

/// The fixed identity of a generator: which machine it speaks for and where
/// its time zero sits.
///
/// A `GeneratorConfig` obtained through [`GeneratorConfig::new`] is always
/// valid. Values built by deserialization should be checked with
/// [`GeneratorConfig::validate`], which [`SnowflakeGenerator::from_config`]
/// does for you.
///
/// [`SnowflakeGenerator::from_config`]: crate::SnowflakeGenerator::from_config
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GeneratorConfig {
    machine_id: i64,
    epoch: i64,
}

impl GeneratorConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `machine_id` is outside
    /// `0..=1023`.
    ///
    /// # Example
    ///
    /// ```
    /// use flakeid::{Error, GeneratorConfig, TWITTER_EPOCH};
    ///
    /// let config = GeneratorConfig::new(784, TWITTER_EPOCH).unwrap();
    /// assert_eq!(config.machine_id(), 784);
    ///
    /// assert!(matches!(
    ///     GeneratorConfig::new(1024, TWITTER_EPOCH),
    ///     Err(Error::Configuration { machine_id: 1024, .. })
    /// ));
    /// ```
    pub fn new(machine_id: i64, epoch: i64) -> Result<Self> {
        let config = Self { machine_id, epoch };
        config.validate()?;
        Ok(config)
    }

    /// Creates a validated configuration anchored at [`DEFAULT_EPOCH`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `machine_id` is outside
    /// `0..=1023`.
    pub fn with_machine_id(machine_id: i64) -> Result<Self> {
        Self::new(machine_id, DEFAULT_EPOCH)
    }

    /// Checks that the machine ID fits the 10-bit field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if it does not.
    pub fn validate(&self) -> Result<()> {
        if (0..=MAX_MACHINE_ID).contains(&self.machine_id) {
            Ok(())
        } else {
            Err(Error::Configuration {
                machine_id: self.machine_id,
                max: MAX_MACHINE_ID,
            })
        }
    }

    pub const fn machine_id(&self) -> i64 {
        self.machine_id
    }

    /// Time zero for the timestamp field, in milliseconds since the Unix
    /// epoch.
    pub const fn epoch(&self) -> i64 {
        self.epoch
    }
}

impl fmt::Display for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GeneratorConfig [TIMESTAMP_BITS={TIMESTAMP_BITS}, MACHINE_ID_BITS={MACHINE_ID_BITS}, \
             SEQUENCE_BITS={SEQUENCE_BITS}, EPOCH={}, MACHINE_ID={}]",
            self.epoch, self.machine_id
        )
    }
}
