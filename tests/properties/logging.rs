//! Property-based tests for log file naming.
//!
//! Refer to `src/logging/mod.rs` for more details.
use cat_api::logging::compute_rolled_file_path;
use proptest::{prelude::*, test_runner::Config};

proptest! {
  #![proptest_config(Config {
    cases: 500, ..Config::default()
  })]

  #[test]
  fn prop_compute_rolled_file_path_with_log_suffix(
    base in ".*[^.]",
    date in "[0-9]{4}-[0-9]{2}-[0-9]{2}",
    index in 1u32..1000
  ) {
      let base_with_log = format!("{}.log", base);
      let result = compute_rolled_file_path(&base_with_log, &date, index);
      prop_assert_eq!(result, format!("{}-{}.{}.log", base, date, index));
  }

  #[test]
  fn prop_compute_rolled_file_path_without_log_suffix(
    base in ".*",
    date in "[0-9]{4}-[0-9]{2}-[0-9]{2}"
  ) {
      let base_non_log = if base.ends_with(".log") {
        format!("{}x", base)
      } else {
        base
      };
      let result = compute_rolled_file_path(&base_non_log, &date, 1);
      prop_assert_eq!(result, format!("{}-{}.1.log", base_non_log, date));
  }
}
