//! Provider adapters that normalize upstream payloads into domain types.

mod yahoo;

pub use yahoo::YahooDailyAdapter;
