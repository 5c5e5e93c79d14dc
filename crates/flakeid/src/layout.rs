use core::fmt;

/// Width of the sequence field.
pub const SEQUENCE_BITS: u32 = 12;

/// Width of the machine ID field.
pub const MACHINE_ID_BITS: u32 = 10;

/// Width of the timestamp offset field.
pub const TIMESTAMP_BITS: u32 = 41;

/// Number of bits to shift the machine ID to its position (bit 12).
pub const MACHINE_ID_SHIFT: u32 = SEQUENCE_BITS;

/// Number of bits to shift the timestamp offset to its position (bit 22).
pub const TIMESTAMP_SHIFT: u32 = SEQUENCE_BITS + MACHINE_ID_BITS;

/// Largest sequence value within a single millisecond (4095).
pub const MAX_SEQUENCE: i64 = (1 << SEQUENCE_BITS) - 1;

/// Largest encodable machine ID (1023).
pub const MAX_MACHINE_ID: i64 = (1 << MACHINE_ID_BITS) - 1;

/// Largest encodable timestamp offset, roughly 69.7 years past the epoch.
pub const MAX_TIMESTAMP: i64 = (1 << TIMESTAMP_BITS) - 1;

/// Packs the three fields into a single identifier.
///
/// ```text
///  Bit Index:  63           63 62            22 21             12 11             0
///              +--------------+----------------+-----------------+---------------+
///  Field:      | reserved (1) | timestamp (41) | machine ID (10) | sequence (12) |
///              +--------------+----------------+-----------------+---------------+
///              |<----------- MSB ---------- 64 bits ----------- LSB ------------>|
/// ```
///
/// The fields are not masked: callers pass values already within range. A
/// timestamp offset beyond [`MAX_TIMESTAMP`] spills into the sign bit.
///
/// # Example
///
/// ```
/// use flakeid::{compose, decompose};
///
/// let id = compose(1_000, 7, 3);
/// let parts = decompose(id, 0);
/// assert_eq!((parts.timestamp_millis, parts.machine_id, parts.sequence), (1_000, 7, 3));
/// ```
pub const fn compose(offset: i64, machine_id: i64, sequence: i64) -> i64 {
    (offset << TIMESTAMP_SHIFT) | (machine_id << MACHINE_ID_SHIFT) | sequence
}

/// Splits an identifier into its fields, adding `epoch` back onto the
/// timestamp offset.
///
/// Never fails. Values that were not produced by a generator decode into
/// structurally valid but meaningless components.
pub const fn decompose(id: i64, epoch: i64) -> IdComponents {
    IdComponents {
        timestamp_millis: (id >> TIMESTAMP_SHIFT).wrapping_add(epoch),
        machine_id: ((id >> MACHINE_ID_SHIFT) & MAX_MACHINE_ID) as i32,
        sequence: (id & MAX_SEQUENCE) as i32,
    }
}

/// The decoded fields of an identifier.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IdComponents {
    /// Absolute timestamp in milliseconds since the Unix epoch.
    pub timestamp_millis: i64,
    /// The machine ID the identifier was issued under.
    pub machine_id: i32,
    /// Position within the millisecond.
    pub sequence: i32,
}

impl fmt::Display for IdComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "timestamp={} machine_id={} sequence={}",
            self.timestamp_millis, self.machine_id, self.sequence
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_do_not_overlap() {
        let id = compose(MAX_TIMESTAMP, 0, 0);
        assert_eq!(id & (MAX_MACHINE_ID << MACHINE_ID_SHIFT), 0);
        assert_eq!(id & MAX_SEQUENCE, 0);
        assert!(id > 0, "max timestamp must not reach the sign bit");

        let id = compose(0, MAX_MACHINE_ID, MAX_SEQUENCE);
        assert_eq!(id, (1 << TIMESTAMP_SHIFT) - 1);
    }

    #[test]
    fn decode_recovers_max_machine_and_sequence() {
        let id = (5 << TIMESTAMP_SHIFT) | (1023 << MACHINE_ID_SHIFT) | 4095;
        let parts = decompose(id, 100);
        assert_eq!(parts.timestamp_millis, 105);
        assert_eq!(parts.machine_id, 1023);
        assert_eq!(parts.sequence, 4095);
    }

    #[test]
    fn decode_never_fails_on_arbitrary_bits() {
        for id in [i64::MIN, -1, 0, 1, i64::MAX] {
            let parts = decompose(id, 0);
            assert!((0..=MAX_MACHINE_ID as i32).contains(&parts.machine_id));
            assert!((0..=MAX_SEQUENCE as i32).contains(&parts.sequence));
        }
    }

    #[test]
    fn known_layout_value() {
        // 2^22 + 2^12 + 1
        assert_eq!(compose(1, 1, 1), 4_198_401);
    }

    #[test]
    fn components_display() {
        let parts = decompose(compose(2, 3, 4), 10);
        assert_eq!(parts.to_string(), "timestamp=12 machine_id=3 sequence=4");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn components_serde_roundtrip() {
        let parts = decompose(compose(42, 511, 9), 1_000);
        let json = serde_json::to_string(&parts).unwrap();
        assert_eq!(
            json,
            r#"{"timestamp_millis":1042,"machine_id":511,"sequence":9}"#
        );
        let back: IdComponents = serde_json::from_str(&json).unwrap();
        assert_eq!(back, parts);
    }
}
