//! Backup Path Encoding
//!
//! The output file name lists every tunable parameter so that runs with
//! different settings never collide and sort next to their neighbours:
//!
//! `data/<selector>_<len>_<std>_<fail>_<budget>_<horizon>_<uct>_<gamma>_<eps>_<mlen>_<mstd>_<mfail>.csv`
//!
//! Reals below 1 are padded to three digits of hundredths (`0.05` -> `005`,
//! `0.5` -> `050`, `0` -> `000`); reals from 1 up are written as their
//! integer part. Values are truncated, never rounded.

use crate::config::SimParameters;
use crate::sim::numeric::{is_equal_to, is_less_than};

/// Directory every backup file is written under
pub const BACKUP_DIR: &str = "data/";

const FIELD_SEPARATOR: &str = "_";
const EXTENSION: &str = ".csv";

/// Padded digits for a non-negative real
pub fn encode_double(d: f64) -> String {
    debug_assert!(!is_less_than(d, 0.0), "cannot encode negative value {}", d);

    let (prefix, scaled) = if is_equal_to(d, 0.0) {
        ("00", d)
    } else if is_less_than(d, 0.1) {
        ("00", 100.0 * d)
    } else if is_less_than(d, 1.0) {
        ("0", 100.0 * d)
    } else {
        ("", d)
    };
    format!("{}{}", prefix, scaled.trunc() as i64)
}

/// Push the encoding of `d` followed by `sep`
pub fn append_double(path: &mut String, d: f64, sep: &str) {
    path.push_str(&encode_double(d));
    path.push_str(sep);
}

/// Output path for a parameter set; identical parameters give identical paths
pub fn backup_path(sp: &SimParameters) -> String {
    let sep = FIELD_SEPARATOR;
    let mut path = String::from(BACKUP_DIR);

    path.push_str(&sp.policy.selector.to_string());
    path.push_str(sep);
    append_double(&mut path, sp.environment.track_len, sep);
    append_double(&mut path, sp.environment.stddev, sep);
    append_double(&mut path, sp.environment.failure_probability, sep);
    path.push_str(&sp.policy.budget.to_string());
    path.push_str(sep);
    path.push_str(&sp.policy.horizon.to_string());
    path.push_str(sep);
    append_double(&mut path, sp.policy.uct_cst, sep);
    append_double(&mut path, sp.policy.discount_factor, sep);
    append_double(&mut path, sp.policy.epsilon, sep);
    append_double(&mut path, sp.model.track_len, sep);
    append_double(&mut path, sp.model.stddev, sep);
    append_double(&mut path, sp.model.failure_probability, EXTENSION);
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_rule() {
        assert_eq!(encode_double(0.0), "000");
        assert_eq!(encode_double(0.05), "005");
        assert_eq!(encode_double(0.5), "050");
        assert_eq!(encode_double(5.0), "5");
    }

    #[test]
    fn test_truncation_not_rounding() {
        assert_eq!(encode_double(0.099), "009");
        assert_eq!(encode_double(0.999), "099");
        assert_eq!(encode_double(12.9), "12");
        assert_eq!(encode_double(1.0), "1");
    }

    #[test]
    fn test_boundaries_use_tolerance() {
        // 0.1 is not below 0.1, so it takes the single-zero branch
        assert_eq!(encode_double(0.1), "010");
        assert_eq!(encode_double(1e-12), "000");
    }

    #[test]
    fn test_append_double() {
        let mut path = String::from("x");
        append_double(&mut path, 0.5, "_");
        append_double(&mut path, 3.0, ".csv");
        assert_eq!(path, "x050_3.csv");
    }

    #[test]
    fn test_default_parameters_path() {
        let sp = SimParameters::default_config();
        assert_eq!(
            backup_path(&sp),
            "data/0_5_050_010_100_10_070_090_000_5_050_010.csv"
        );
    }

    #[test]
    fn test_path_is_deterministic_and_parameter_sensitive() {
        let sp = SimParameters::default_config();
        assert_eq!(backup_path(&sp), backup_path(&sp.clone()));

        let mut other = sp.clone();
        other.policy.budget = 101;
        assert_ne!(backup_path(&sp), backup_path(&other));

        let mut other = sp.clone();
        other.model.failure_probability = 0.2;
        assert!(backup_path(&other).ends_with("_020.csv"));
    }
}
