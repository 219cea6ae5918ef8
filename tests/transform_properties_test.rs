use caser::{invert_case, to_lower, to_upper, transform, TransformMode};
use proptest::prelude::*;

// Characters whose upper/lower mappings are single, symmetric code points.
const SYMMETRIC: &str = "[a-zA-Z0-9 ,.!?à-öø-þÀ-ÖØ-Þа-яА-Яα-ρσ-ωΑ-ΡΣ-Ω]*";

// Adds case-free and asymmetric characters.
const MIXED: &str = "[a-zA-Z0-9 \t\n,.!?ßÿŸà-ÿÀ-Þа-яА-Яα-ωΑ-Ωǅİᾀ-ᾇᾳῳᾼ漢字😀€]*";

fn char_len(text: &str) -> usize {
    text.chars().count()
}

proptest! {
    #[test]
    fn invert_preserves_length_for_any_text(text in any::<String>()) {
        prop_assert_eq!(char_len(&invert_case(&text)), char_len(&text));
    }

    #[test]
    fn upper_and_lower_preserve_length_for_any_text(text in any::<String>()) {
        prop_assert_eq!(char_len(&to_upper(&text)), char_len(&text));
        prop_assert_eq!(char_len(&to_lower(&text)), char_len(&text));
    }

    #[test]
    fn upper_is_idempotent(text in MIXED) {
        let once = to_upper(&text);
        prop_assert_eq!(to_upper(&once), once);
    }

    #[test]
    fn lower_is_idempotent(text in MIXED) {
        let once = to_lower(&text);
        prop_assert_eq!(to_lower(&once), once);
    }

    #[test]
    fn invert_is_an_involution_on_symmetric_text(text in SYMMETRIC) {
        prop_assert_eq!(invert_case(&invert_case(&text)), text);
    }

    #[test]
    fn case_free_text_is_a_fixed_point(text in "[0-9 \t\n.,;:!?()\\-+=/漢字かな€😀]*") {
        for mode in TransformMode::ALL {
            prop_assert_eq!(&transform(&text, mode), &text);
        }
    }

    #[test]
    fn transform_matches_named_functions(text in MIXED) {
        prop_assert_eq!(transform(&text, TransformMode::Upper), to_upper(&text));
        prop_assert_eq!(transform(&text, TransformMode::Lower), to_lower(&text));
        prop_assert_eq!(transform(&text, TransformMode::Invert), invert_case(&text));
    }
}

#[test]
fn empty_input_maps_to_empty_output() {
    for mode in TransformMode::ALL {
        assert_eq!(transform("", mode), "");
    }
}

#[test]
fn documented_scenarios() {
    assert_eq!(to_upper("Hello, World! 123"), "HELLO, WORLD! 123");
    assert_eq!(to_lower("Hello, World! 123"), "hello, world! 123");
    assert_eq!(invert_case("Hello, World! 123"), "hELLO, wORLD! 123");
    assert_eq!(invert_case(""), "");
    assert_eq!(to_upper("café"), "CAFÉ");
    assert_eq!(invert_case("AbC123"), "aBc123");
}
