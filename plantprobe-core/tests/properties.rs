//! Property tests for the mode selector and percentage bar

use plantprobe_core::mode::{ModeSelector, ViewMode};
use plantprobe_core::views::{bar_fill_extent, light_fraction, moisture_fraction};
use proptest::prelude::*;

fn advance(mode: ViewMode, steps: usize) -> ViewMode {
    (0..steps % 3).fold(mode, |m, _| m.next())
}

proptest! {
    #[test]
    fn accepted_edges_are_spaced_by_debounce(gaps in prop::collection::vec(0u64..600, 1..40)) {
        let mut selector = ModeSelector::new(ViewMode::Dual, 200);
        let mut now = 0u64;
        let mut last_accepted: Option<u64> = None;
        let mut accepted = 0usize;

        for gap in gaps {
            now += gap;
            let expect = last_accepted.map_or(true, |last| now - last >= 200);
            let result = selector.on_falling_edge(now);
            prop_assert_eq!(result.is_some(), expect);
            if expect {
                last_accepted = Some(now);
                accepted += 1;
            }
            prop_assert_eq!(selector.mode(), advance(ViewMode::Dual, accepted));
        }
    }

    #[test]
    fn bar_fill_is_monotonic_and_bounded(a in -2.0f32..3.0, b in -2.0f32..3.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo_fill = bar_fill_extent(lo).map_or(0, u32::from);
        let hi_fill = bar_fill_extent(hi).map_or(0, u32::from);
        prop_assert!(lo_fill <= hi_fill);
        prop_assert!(hi_fill <= 81);
    }

    #[test]
    fn readings_map_onto_bar_scale(moisture in 0u16..=u16::MAX, lux in 0u16..=u16::MAX) {
        prop_assert!(moisture_fraction(moisture) >= -0.2);
        prop_assert!(light_fraction(lux) >= 0.0);
        if moisture >= 1200 {
            prop_assert_eq!(bar_fill_extent(moisture_fraction(moisture)), Some(81));
        }
    }
}
