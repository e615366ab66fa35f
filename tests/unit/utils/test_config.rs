use std::env;
use suyatrade::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("SUYA_TEST_VAR_STRING", "  test_value  ");
        let result: String = get_env_or_default("SUYA_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("SUYA_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("SUYA_MISSING_VAR");
    }
    let result: u64 = get_env_or_default("SUYA_MISSING_VAR", 10);
    assert_eq!(result, 10);
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("SUYA_TEST_VAR_INVALID", "ten");
        let result: u64 = get_env_or_default("SUYA_TEST_VAR_INVALID", 12);
        assert_eq!(result, 12);
        env::remove_var("SUYA_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none_treats_blank_as_unset() {
    unsafe {
        env::set_var("SUYA_TEST_VAR_BLANK", "   ");
        let result: Option<String> = get_env_or_none("SUYA_TEST_VAR_BLANK");
        assert_eq!(result, None);
        env::set_var("SUYA_TEST_VAR_BLANK", "5");
        let result: Option<u32> = get_env_or_none("SUYA_TEST_VAR_BLANK");
        assert_eq!(result, Some(5));
        env::remove_var("SUYA_TEST_VAR_BLANK");
    }
}

#[test]
fn test_get_env_flag() {
    unsafe {
        for (raw, expected) in [("1", true), ("TRUE", true), ("on", true), ("0", false), ("nope", false)] {
            env::set_var("SUYA_TEST_FLAG", raw);
            assert_eq!(get_env_flag("SUYA_TEST_FLAG"), expected, "value {raw}");
        }
        env::remove_var("SUYA_TEST_FLAG");
    }
    assert!(!get_env_flag("SUYA_TEST_FLAG"));
}
