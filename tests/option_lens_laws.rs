//! Property-based law checks for lenses built by `compose_option` and
//! `compose_options`.
//!
//! Both satisfy GetSet and SetGet everywhere. SetSet holds everywhere except
//! the documented cases where a write removes or skips the intermediate
//! structure and a later write rebuilds it from the default:
//!
//! - `compose_option`: `set(set(s, None), Some(b))` versus `set(s, Some(b))`
//!   when `s` holds an intermediate that differs from the default
//! - `compose_options`: `set(set(s, Some(b)), None)` versus `set(s, None)`
//!   when `s` holds no intermediate

use optica::lens;
use optica::optics::{Lens, OptionLens};
use proptest::prelude::*;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Limits {
    soft: u32,
    hard: Option<u32>,
}

#[derive(Clone, PartialEq, Debug)]
struct Process {
    name: String,
    limits: Option<Limits>,
}

fn default_limits() -> Limits {
    Limits {
        soft: 1024,
        hard: None,
    }
}

fn limits_strategy() -> impl Strategy<Value = Limits> {
    (any::<u32>(), proptest::option::of(any::<u32>())).prop_map(|(soft, hard)| Limits { soft, hard })
}

fn process_strategy() -> impl Strategy<Value = Process> {
    ("[a-z]{1,6}", proptest::option::of(limits_strategy()))
        .prop_map(|(name, limits)| Process { name, limits })
}

// =============================================================================
// compose_option
// =============================================================================

proptest! {
    #[test]
    fn prop_compose_option_get_set_law(process in process_strategy()) {
        let soft = lens!(Process, limits).compose_option(default_limits(), lens!(Limits, soft));
        let current = soft.get(&process);
        prop_assert_eq!(soft.set(process.clone(), current), process);
    }

    #[test]
    fn prop_compose_option_set_get_law(
        process in process_strategy(),
        value in proptest::option::of(any::<u32>())
    ) {
        let soft = lens!(Process, limits).compose_option(default_limits(), lens!(Limits, soft));
        prop_assert_eq!(soft.get(&soft.set(process, value)), value);
    }

    #[test]
    fn prop_compose_option_set_set_law(
        process in process_strategy(),
        first in proptest::option::of(any::<u32>()),
        second in proptest::option::of(any::<u32>())
    ) {
        let soft = lens!(Process, limits).compose_option(default_limits(), lens!(Limits, soft));
        let rebuilt_from_default = first.is_none()
            && second.is_some()
            && process.limits.as_ref().is_some_and(|limits| limits.hard != default_limits().hard);
        prop_assume!(!rebuilt_from_default);

        let left = soft.set(soft.set(process.clone(), first), second);
        let right = soft.set(process, second);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_compose_option_clear_then_write_uses_default(
        process in process_strategy(),
        value in any::<u32>()
    ) {
        let soft = lens!(Process, limits).compose_option(default_limits(), lens!(Limits, soft));
        let rebuilt = soft.set(soft.set(process, None), Some(value));
        prop_assert_eq!(rebuilt.limits, Some(Limits { soft: value, ..default_limits() }));
    }

    #[test]
    fn prop_compose_option_set_is_idempotent(
        process in process_strategy(),
        value in proptest::option::of(any::<u32>())
    ) {
        let soft = lens!(Process, limits).compose_option(default_limits(), lens!(Limits, soft));
        let once = soft.set(process, value);
        prop_assert_eq!(soft.set(once.clone(), value), once);
    }
}

// =============================================================================
// compose_options
// =============================================================================

proptest! {
    #[test]
    fn prop_compose_options_get_set_law(process in process_strategy()) {
        let hard = lens!(Process, limits).compose_options(default_limits(), lens!(Limits, hard));
        let current = hard.get(&process);
        prop_assert_eq!(hard.set(process.clone(), current), process);
    }

    #[test]
    fn prop_compose_options_set_get_law(
        process in process_strategy(),
        value in proptest::option::of(any::<u32>())
    ) {
        let hard = lens!(Process, limits).compose_options(default_limits(), lens!(Limits, hard));
        prop_assert_eq!(hard.get(&hard.set(process, value)), value);
    }

    #[test]
    fn prop_compose_options_set_set_law(
        process in process_strategy(),
        first in proptest::option::of(any::<u32>()),
        second in proptest::option::of(any::<u32>())
    ) {
        let hard = lens!(Process, limits).compose_options(default_limits(), lens!(Limits, hard));
        let host_left_behind = process.limits.is_none() && first.is_some() && second.is_none();
        prop_assume!(!host_left_behind);

        let left = hard.set(hard.set(process.clone(), first), second);
        let right = hard.set(process, second);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_compose_options_host_left_behind(name in "[a-z]{1,6}", value in any::<u32>()) {
        let hard = lens!(Process, limits).compose_options(default_limits(), lens!(Limits, hard));
        let process = Process { name, limits: None };

        let left = hard.set(hard.set(process.clone(), Some(value)), None);
        let right = hard.set(process, None);

        prop_assert_eq!(left.limits, Some(default_limits()));
        prop_assert_eq!(right.limits, None);
    }

    #[test]
    fn prop_compose_options_set_is_idempotent(
        process in process_strategy(),
        value in proptest::option::of(any::<u32>())
    ) {
        let hard = lens!(Process, limits).compose_options(default_limits(), lens!(Limits, hard));
        let once = hard.set(process, value);
        prop_assert_eq!(hard.set(once.clone(), value), once);
    }
}
