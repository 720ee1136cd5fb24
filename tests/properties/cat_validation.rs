//! Property-based tests for cat record validation and identity.
//!
//! Refer to `src/models/cat/mod.rs` for the field rules.
use cat_api::models::{Cat, CatCreateRequest};
use chrono::{TimeZone, Utc};
use proptest::{prelude::*, test_runner::Config};

fn request(name: &str, favorite_food: Option<String>, owner: Option<String>) -> CatCreateRequest {
    CatCreateRequest {
        name: Some(name.to_string()),
        birth_date: Some("2021-04-01T17:24:06.667".to_string()),
        favorite_food,
        owner,
    }
}

proptest! {
  #![proptest_config(Config {
    cases: 500, ..Config::default()
  })]

  #[test]
  fn prop_word_names_up_to_thirty_chars_are_accepted(
    name in "[A-Za-z0-9_][A-Za-z0-9_ ]{1,29}"
  ) {
      let cat = Cat::try_from(request(&name, None, None));
      prop_assert!(cat.is_ok(), "rejected {:?}: {:?}", name, cat);
  }

  #[test]
  fn prop_names_over_thirty_chars_are_rejected(
    name in "[A-Za-z0-9_]{31,60}"
  ) {
      let err = Cat::try_from(request(&name, None, None)).unwrap_err();
      prop_assert!(err.has_field("name"));
  }

  #[test]
  fn prop_markup_in_name_is_rejected(
    prefix in "[A-Za-z]{1,10}",
    symbol in "[<>!@#$%^&*()/\\\\\"'=;:.,?+-]"
  ) {
      let name = format!("{}{}", prefix, symbol);
      let err = Cat::try_from(request(&name, None, None)).unwrap_err();
      prop_assert!(err.has_field("name"));
  }

  #[test]
  fn prop_leading_whitespace_in_name_is_rejected(
    name in "[ \t][A-Za-z]{1,20}"
  ) {
      let err = Cat::try_from(request(&name, None, None)).unwrap_err();
      prop_assert!(err.has_field("name"));
  }

  #[test]
  fn prop_owner_length_limit(
    owner in "[A-Za-z ]{0,40}"
  ) {
      let result = Cat::try_from(request("Mustache", None, Some(owner.clone())));
      if owner.chars().count() <= 30 {
          prop_assert!(result.is_ok());
      } else {
          prop_assert!(result.unwrap_err().has_field("owner"));
      }
  }

  #[test]
  fn prop_favorite_food_follows_name_rules(
    food in "[A-Za-z0-9_][A-Za-z0-9_ ]{1,29}",
    symbol in "[<>$&]"
  ) {
      prop_assert!(Cat::try_from(request("Mustache", Some(food.clone()), None)).is_ok());

      let tainted = format!("{}{}", food, symbol);
      let err = Cat::try_from(request("Mustache", Some(tainted), None)).unwrap_err();
      prop_assert!(err.has_field("favoriteFood"));
  }

  #[test]
  fn prop_violations_are_ordered_by_field(
    name in "[<>$]{1,5}",
    food in "[<>$]{1,5}",
    owner in "[<>$]{1,5}"
  ) {
      let err = Cat::try_from(request(&name, Some(food), Some(owner))).unwrap_err();
      let fields: Vec<&str> = err.violations.iter().map(|v| v.field.as_str()).collect();
      let mut sorted = fields.clone();
      sorted.sort();
      prop_assert_eq!(fields, sorted);
  }

  #[test]
  fn prop_identity_digest_separates_names(
    a in "[A-Za-z]{2,15}",
    b in "[A-Za-z]{2,15}"
  ) {
      let birth_date = Utc.with_ymd_and_hms(2021, 4, 1, 17, 24, 6).unwrap();
      let first = Cat::new(a.clone(), birth_date, None, Some("Amir".to_string()));
      let second = Cat::new(b.clone(), birth_date, None, Some("Amir".to_string()));

      prop_assert_eq!(a == b, first.identity().digest() == second.identity().digest());
      prop_assert_eq!(first.identity().digest(), first.clone().identity().digest());
  }
}
