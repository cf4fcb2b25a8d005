//! Record identifier generation.
//!
//! Identifiers have the form `<PREFIX>-<unix millis>-<suffix>` where the
//! suffix is a random number in `0..1000`. Two records created in the same
//! millisecond can collide; callers accept that.

use chrono::{DateTime, Utc};
use rand::Rng;

/// Prefix for help request identifiers.
pub const HELP_REQUEST_PREFIX: &str = "HLP";

/// Prefix for resource identifiers.
pub const RESOURCE_PREFIX: &str = "RES";

/// Prefix for alert identifiers.
pub const ALERT_PREFIX: &str = "ALT";

/// Exclusive upper bound of the random suffix.
const SUFFIX_BOUND: u32 = 1000;

/// Generates a new identifier for the given prefix using the current time.
pub fn generate_id(prefix: &str) -> String {
    generate_id_at(prefix, Utc::now(), &mut rand::thread_rng())
}

/// Generates an identifier for an explicit instant and random source.
pub fn generate_id_at<R: Rng + ?Sized>(prefix: &str, now: DateTime<Utc>, rng: &mut R) -> String {
    let suffix = rng.gen_range(0..SUFFIX_BOUND);
    format!("{}-{}-{}", prefix, now.timestamp_millis(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_generate_id_format() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let mut rng = StepRng::new(0, 0);
        let id = generate_id_at(HELP_REQUEST_PREFIX, now, &mut rng);

        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "HLP");
        assert_eq!(parts[1], now.timestamp_millis().to_string());
        let suffix: u32 = parts[2].parse().unwrap();
        assert!(suffix < 1000);
    }

    #[test]
    fn test_generate_id_uses_prefix() {
        assert!(generate_id(ALERT_PREFIX).starts_with("ALT-"));
        assert!(generate_id(RESOURCE_PREFIX).starts_with("RES-"));
    }

    #[test]
    fn test_generate_id_suffix_in_range() {
        for _ in 0..200 {
            let id = generate_id(HELP_REQUEST_PREFIX);
            let suffix: u32 = id.rsplit('-').next().unwrap().parse().unwrap();
            assert!(suffix < SUFFIX_BOUND);
        }
    }
}
