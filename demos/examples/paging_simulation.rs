// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated drags and flicks against `understory_paging`.
//!
//! This example plays the part of a host toolkit:
//! - attaches a phone-sized viewport with a leading inset,
//! - streams scroll offsets while "dragging" and prints page changes,
//! - asks for a snap target on release and prints the visible pages there.
//!
//! Set `RUST_LOG=understory_paging=debug` to see layout passes and snap decisions.
//!
//! Run:
//! - `cargo run -p understory_paging_demos --example paging_simulation`

use kurbo::{Insets, Point, Rect, Size, Vec2};
use tracing_subscriber::EnvFilter;
use understory_paging::{Axis, PagingLayout, Spacing, Viewport};

/// One simulated gesture: drag by `distance`, then release at `velocity`.
struct Gesture {
    name: &'static str,
    distance: f64,
    velocity: f64,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let viewport_size = Size::new(320.0, 480.0);
    let mut layout = PagingLayout::with_spacing(Spacing::uniform(10.0), Axis::Horizontal);
    layout.set_viewport(Some(
        Viewport::new(viewport_size).with_content_inset(Insets::new(10.0, 0.0, 0.0, 0.0)),
    ));
    layout.set_section_counts(&[6]);

    println!(
        "card {:?}, page extent {}, content {:?}",
        layout.card_size(),
        layout.page_extent(),
        layout.content_size()
    );

    let gestures = [
        Gesture {
            name: "slow drag, short",
            distance: 100.0,
            velocity: 0.2,
        },
        Gesture {
            name: "slow drag, past midpoint",
            distance: 180.0,
            velocity: 0.2,
        },
        Gesture {
            name: "quick flick",
            distance: 40.0,
            velocity: 2.5,
        },
        Gesture {
            name: "flick back",
            distance: -60.0,
            velocity: -3.0,
        },
    ];

    let mut resting = Point::new(-10.0, 0.0);
    layout.set_scroll_offset(resting);

    for gesture in gestures {
        println!("\n{}:", gesture.name);
        let steps = 8;
        for step in 1..=steps {
            let offset = resting.x + gesture.distance * f64::from(step) / f64::from(steps);
            if let Some(change) = layout.set_scroll_offset(Point::new(offset, 0.0)) {
                println!("  page {} -> {} at x = {offset:.1}", change.previous, change.current);
            }
        }
        let target = layout.target_content_offset(
            Point::new(resting.x + gesture.distance, 0.0),
            Vec2::new(gesture.velocity, 0.0),
        );
        if let Some(change) = layout.set_scroll_offset(target) {
            println!("  page {} -> {} after settling", change.previous, change.current);
        }
        let visible = layout.items_in_rect(Rect::from_origin_size(target, viewport_size));
        println!(
            "  rests at x = {:.1}, current page {}, visible {:?}",
            target.x,
            layout.current_page(),
            visible.iter().map(|index| index.item).collect::<Vec<_>>()
        );
        resting = target;
    }
}
