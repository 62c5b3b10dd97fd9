//! Property-based tests for curry/uncurry laws.
//!
//! Curry Laws:
//!
//! 1. **Uncurry-Curry Identity**: Currying then uncurrying a tuple-taking
//!    function yields the original function.
//!    ```text
//!    uncurry(curry(f)).call(tuple) == f(tuple)
//!    ```
//!
//! 2. **Curry-Uncurry Identity**: Uncurrying then currying a positional
//!    function yields the original function.
//!    ```text
//!    curry(uncurry(g))(a, b, c) == g(a, b, c)
//!    ```

#![cfg(feature = "curry")]
#![forbid(unsafe_code)]

use proptest::prelude::*;
use shapewise::applicator::Applicator;
use shapewise::curry::{curry, uncurry};

fn checksum((first, second, third): (i32, i64, u8)) -> i64 {
    i64::from(first)
        .wrapping_mul(31)
        .wrapping_add(second)
        .wrapping_sub(i64::from(third))
}

fn weave(left: &str, count: usize, right: char) -> String {
    let mut woven = String::from(left);
    for _ in 0..count {
        woven.push(right);
    }
    woven
}

proptest! {
    #[test]
    fn prop_uncurry_curry_identity(first in any::<i32>(), second in any::<i64>(), third in any::<u8>()) {
        let mut round_trip = uncurry(curry(checksum));
        prop_assert_eq!(round_trip.call((first, second, third)), checksum((first, second, third)));
    }

    #[test]
    fn prop_curry_uncurry_identity(left in "[a-z]{0,8}", count in 0_usize..8, right in any::<char>()) {
        let mut round_trip = curry(uncurry(weave));
        prop_assert_eq!(round_trip.call(left.as_str(), count, right), weave(&left, count, right));
    }

    #[test]
    fn prop_curried_call_matches_invoke(first in any::<i32>(), second in any::<i64>(), third in any::<u8>()) {
        let mut curried = curry(checksum);
        let positional = curried.call(first, second, third);
        let packed = curried.invoke((first, second, third));
        prop_assert_eq!(positional, packed);
    }

    #[test]
    fn prop_uncurry_of_closure_matches_direct_call(values in prop::collection::vec(any::<i16>(), 0..10), scale in any::<i16>()) {
        let direct = |items: &[i16], factor: i16| -> i64 {
            items.iter().map(|item| i64::from(*item) * i64::from(factor)).sum()
        };
        let mut packed = uncurry(direct);
        prop_assert_eq!(packed.call((values.as_slice(), scale)), direct(&values, scale));
    }
}
