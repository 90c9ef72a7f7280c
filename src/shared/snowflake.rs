//! Snowflake ID Generation
//!
//! Time-ordered unique identifiers for stored entities. An ID packs a
//! millisecond timestamp, a machine ID, and a per-millisecond sequence
//! number, so IDs stay unique under rapid concurrent creation.

use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;

/// Custom epoch (2024-01-01T00:00:00.000Z)
const ID_EPOCH: u64 = 1704067200000;

const MACHINE_ID_BITS: u64 = 10;
const SEQUENCE_BITS: u64 = 12;
const MAX_MACHINE_ID: u64 = (1 << MACHINE_ID_BITS) - 1;
const MAX_SEQUENCE: u64 = (1 << SEQUENCE_BITS) - 1;

struct GeneratorState {
    last_timestamp: u64,
    sequence: u64,
}

/// Snowflake ID generator
pub struct SnowflakeGenerator {
    machine_id: u64,
    state: Mutex<GeneratorState>,
}

impl SnowflakeGenerator {
    /// Create a new generator for the given machine ID (0-1023).
    pub fn new(machine_id: u64) -> Self {
        Self {
            machine_id: machine_id & MAX_MACHINE_ID,
            state: Mutex::new(GeneratorState {
                last_timestamp: 0,
                sequence: 0,
            }),
        }
    }

    /// Generate a new snowflake ID.
    ///
    /// Timestamp and sequence advance together under the state lock, so
    /// concurrent callers never observe the same (timestamp, sequence) pair.
    pub fn generate(&self) -> i64 {
        let mut state = self.state.lock();

        let mut timestamp = current_timestamp().max(state.last_timestamp);
        if timestamp == state.last_timestamp {
            state.sequence = (state.sequence + 1) & MAX_SEQUENCE;
            if state.sequence == 0 {
                // Sequence exhausted for this millisecond; wait for the next one.
                while timestamp <= state.last_timestamp {
                    timestamp = current_timestamp();
                }
            }
        } else {
            state.sequence = 0;
        }
        state.last_timestamp = timestamp;

        let id = ((timestamp - ID_EPOCH) << (MACHINE_ID_BITS + SEQUENCE_BITS))
            | (self.machine_id << SEQUENCE_BITS)
            | state.sequence;

        id as i64
    }

    /// Generate a new ID in its string form, the shape entity IDs use.
    pub fn generate_string(&self) -> String {
        self.generate().to_string()
    }
}

/// Extract the millisecond timestamp embedded in a snowflake ID.
pub fn extract_timestamp(snowflake: i64) -> u64 {
    ((snowflake as u64) >> (MACHINE_ID_BITS + SEQUENCE_BITS)) + ID_EPOCH
}

/// Current timestamp in milliseconds
fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
