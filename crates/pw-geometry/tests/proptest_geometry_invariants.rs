//! Property-based invariant tests for the stripe geometry.
//!
//! These hold for **any** valid width list and expansion:
//!
//! 1. The expanded viewbox always contains the unexpanded square.
//! 2. Rect and ellipse clips share the same center.
//! 3. Offsets start at 0 and are strictly increasing.
//! 4. Three rects per width, in input order.
//! 5. `compute_viewbox` is deterministic.
//! 6. Only the first four widths affect the viewbox.

use pw_geometry::{
    ClipShape, ExpansionSpec, RECTS_PER_STRIPE, StripeRectTriple, StripeWidths, compute_stripe_rects,
    compute_viewbox, offsets,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn widths_strategy() -> impl Strategy<Value = StripeWidths> {
    proptest::collection::vec(0.01f64..=100.0, 1..=12)
        .prop_map(|w| StripeWidths::new(w).expect("strategy yields positive widths"))
}

fn multiplier() -> impl Strategy<Value = Option<f64>> {
    proptest::option::of(1.0f64..=4.0)
}

fn expansion_strategy() -> impl Strategy<Value = ExpansionSpec> {
    (
        (multiplier(), multiplier(), multiplier(), multiplier()),
        (multiplier(), multiplier(), multiplier()),
    )
        .prop_map(|((top, bottom, left, right), (vertical, horizontal, expand))| ExpansionSpec {
            expand_top: top,
            expand_bottom: bottom,
            expand_left: left,
            expand_right: right,
            expand_vertical: vertical,
            expand_horizontal: horizontal,
            expand,
        })
}

fn shape_strategy() -> impl Strategy<Value = ClipShape> {
    prop_oneof![Just(ClipShape::Rect), Just(ClipShape::Ellipse)]
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn expanded_box_contains_square(widths in widths_strategy(), spec in expansion_strategy()) {
        let base = compute_viewbox(&widths, &ExpansionSpec::none(), ClipShape::Rect);
        let grown = compute_viewbox(&widths, &spec, ClipShape::Rect);
        prop_assert!(grown.view_box.contains_rect(&base.view_box));
        prop_assert!(grown.sides.top >= 0.0 && grown.sides.bottom >= 0.0);
        prop_assert!(grown.sides.left >= 0.0 && grown.sides.right >= 0.0);
    }

    #[test]
    fn clip_centers_agree(widths in widths_strategy(), spec in expansion_strategy()) {
        let rect = compute_viewbox(&widths, &spec, ClipShape::Rect);
        let ellipse = compute_viewbox(&widths, &spec, ClipShape::Ellipse);
        let (ax, ay) = rect.clip.center();
        let (bx, by) = ellipse.clip.center();
        prop_assert_eq!(ax.to_bits(), bx.to_bits());
        prop_assert_eq!(ay.to_bits(), by.to_bits());
    }

    #[test]
    fn offsets_strictly_increase(widths in widths_strategy()) {
        let offs = offsets(&widths);
        prop_assert_eq!(offs.len(), widths.len());
        prop_assert_eq!(offs[0], 0.0);
        for pair in offs.windows(2) {
            prop_assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn three_rects_per_width(widths in widths_strategy()) {
        let triples = compute_stripe_rects(&widths, &offsets(&widths));
        prop_assert_eq!(triples.len(), widths.len());
        let flat = triples.iter().flat_map(StripeRectTriple::faces).count();
        prop_assert_eq!(flat, widths.len() * RECTS_PER_STRIPE);
        for (i, t) in triples.iter().enumerate() {
            prop_assert_eq!(t.index, i);
            prop_assert_eq!(t.top_right.width, widths.as_slice()[i]);
            prop_assert_eq!(t.left.height, widths.as_slice()[i]);
        }
    }

    #[test]
    fn viewbox_deterministic(
        widths in widths_strategy(),
        spec in expansion_strategy(),
        shape in shape_strategy(),
    ) {
        let a = compute_viewbox(&widths, &spec, shape);
        let b = compute_viewbox(&widths, &spec, shape);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn tail_widths_do_not_move_viewbox(
        widths in widths_strategy(),
        extra in proptest::collection::vec(0.01f64..=100.0, 1..=4),
    ) {
        prop_assume!(widths.len() >= 4);
        let mut longer = widths.as_slice().to_vec();
        longer.extend(extra);
        let longer = StripeWidths::new(longer).unwrap();
        let a = compute_viewbox(&widths, &ExpansionSpec::none(), ClipShape::Rect);
        let b = compute_viewbox(&longer, &ExpansionSpec::none(), ClipShape::Rect);
        prop_assert_eq!(a.view_box, b.view_box);
    }
}
