use driftwall_core::input::ContainerRect;
use driftwall_core::{normalize_offset, GalleryAction, GalleryConfig, GalleryState, LayoutMode};

fn container() -> ContainerRect {
    ContainerRect {
        left: 0.0,
        top: 0.0,
        width: 1200.0,
        height: 800.0,
    }
}

fn wheel(client_x: f64, delta_y: f64) -> GalleryAction {
    GalleryAction::Wheel {
        client_x,
        delta_y,
        rect: Some(container()),
    }
}

fn assert_close(actual: f64, expected: f64) {
    let delta = (actual - expected).abs();
    assert!(
        delta <= 1e-9,
        "expected {:.6} got {:.6} (delta {:.6})",
        expected,
        actual,
        delta
    );
}

#[test]
fn wheel_on_middle_column_spreads_weighted_delta() {
    let config = GalleryConfig::fixed();
    let mut state = GalleryState::new(&config, 3, 1200.0, 800.0);
    let changed = state.apply(wheel(600.0, 100.0), &config);
    assert!(changed);
    assert_eq!(state.active_column(), 1);
    assert_close(state.offsets()[0], 60.0);
    assert_close(state.offsets()[1], 100.0);
    assert_close(state.offsets()[2], 60.0);
}

#[test]
fn wheel_on_edge_column_uses_distance_falloff() {
    let config = GalleryConfig::fixed();
    let mut state = GalleryState::new(&config, 3, 1200.0, 800.0);
    state.apply(wheel(10.0, -100.0), &config);
    assert_eq!(state.active_column(), 0);
    assert_close(state.offsets()[0], -100.0);
    assert_close(state.offsets()[1], -60.0);
    assert_close(state.offsets()[2], -20.0);
}

#[test]
fn container_edges_map_to_first_and_last_column() {
    let config = GalleryConfig::fixed();
    let mut state = GalleryState::new(&config, 3, 1200.0, 800.0);
    let rect = Some(container());
    state.apply(GalleryAction::PointerMove { client_x: 0.0, rect }, &config);
    assert_eq!(state.active_column(), 0);
    state.apply(GalleryAction::PointerMove { client_x: 1200.0, rect }, &config);
    assert_eq!(state.active_column(), 2);
    state.apply(GalleryAction::PointerMove { client_x: -400.0, rect }, &config);
    assert_eq!(state.active_column(), 0);
    state.apply(GalleryAction::PointerMove { client_x: 9_000.0, rect }, &config);
    assert_eq!(state.active_column(), 2);
}

#[test]
fn pointer_move_does_not_scroll() {
    let config = GalleryConfig::fixed();
    let mut state = GalleryState::new(&config, 3, 1200.0, 800.0);
    state.apply(
        GalleryAction::PointerMove {
            client_x: 50.0,
            rect: Some(container()),
        },
        &config,
    );
    assert_eq!(state.offsets(), &[0.0, 0.0, 0.0]);
}

#[test]
fn active_column_falls_back_when_container_missing() {
    let config = GalleryConfig::fixed();
    let mut state = GalleryState::new(&config, 3, 1200.0, 800.0);
    state.apply(wheel(1100.0, 0.0), &config);
    assert_eq!(state.active_column(), 2);
    state.apply(
        GalleryAction::Wheel {
            client_x: 10.0,
            delta_y: 50.0,
            rect: None,
        },
        &config,
    );
    assert_eq!(state.active_column(), 2);
    assert_close(state.offsets()[2], 50.0);
}

#[test]
fn touch_move_without_start_is_a_no_op() {
    let config = GalleryConfig::fixed();
    let mut state = GalleryState::new(&config, 3, 1200.0, 800.0);
    let before = state.clone();
    let changed = state.apply(
        GalleryAction::TouchMove {
            client_x: 10.0,
            client_y: 300.0,
            rect: Some(container()),
        },
        &config,
    );
    assert!(!changed);
    assert_eq!(state, before);
}

#[test]
fn touch_drag_scrolls_incrementally_with_inverted_sign() {
    let config = GalleryConfig::fixed();
    let mut state = GalleryState::new(&config, 3, 1200.0, 800.0);
    let rect = Some(container());
    state.apply(
        GalleryAction::TouchStart {
            client_x: 600.0,
            client_y: 500.0,
            rect,
        },
        &config,
    );
    state.apply(
        GalleryAction::TouchMove {
            client_x: 600.0,
            client_y: 440.0,
            rect,
        },
        &config,
    );
    assert_close(state.offsets()[1], 60.0);
    state.apply(
        GalleryAction::TouchMove {
            client_x: 600.0,
            client_y: 460.0,
            rect,
        },
        &config,
    );
    assert_close(state.offsets()[1], 40.0);
    assert_close(state.offsets()[0], 24.0);

    state.apply(GalleryAction::TouchEnd, &config);
    let before = state.clone();
    state.apply(
        GalleryAction::TouchMove {
            client_x: 600.0,
            client_y: 100.0,
            rect,
        },
        &config,
    );
    assert_eq!(state, before);
}

#[test]
fn resize_within_mode_keeps_offsets() {
    let config = GalleryConfig::responsive(768.0);
    let mut state = GalleryState::new(&config, 3, 1200.0, 800.0);
    state.apply(wheel(600.0, 100.0), &config);
    let offsets = state.offsets().to_vec();
    state.apply(
        GalleryAction::Resize {
            width: 1000.0,
            height: 700.0,
        },
        &config,
    );
    assert_eq!(state.mode(), LayoutMode::Desktop);
    assert_eq!(state.offsets(), offsets.as_slice());
    assert_eq!(state.viewport_height(), 700.0);
}

#[test]
fn crossing_breakpoint_resets_offsets_and_column_count() {
    let config = GalleryConfig::responsive(768.0);
    let mut state = GalleryState::new(&config, 3, 1200.0, 800.0);
    state.apply(wheel(1100.0, 250.0), &config);

    let changed = state.apply(
        GalleryAction::Resize {
            width: 500.0,
            height: 800.0,
        },
        &config,
    );
    assert!(changed);
    assert_eq!(state.mode(), LayoutMode::Mobile);
    assert_eq!(state.offsets(), &[0.0]);
    assert_eq!(state.active_column(), 0);

    state.apply(wheel(100.0, 90.0), &config);
    assert_close(state.offsets()[0], 90.0);

    state.apply(
        GalleryAction::Resize {
            width: 1024.0,
            height: 800.0,
        },
        &config,
    );
    assert_eq!(state.mode(), LayoutMode::Desktop);
    assert_eq!(state.offsets(), &[0.0, 0.0, 0.0]);
}

#[test]
fn crossing_breakpoint_drops_pending_touch() {
    let config = GalleryConfig::responsive(768.0);
    let mut state = GalleryState::new(&config, 3, 1200.0, 800.0);
    state.apply(
        GalleryAction::TouchStart {
            client_x: 10.0,
            client_y: 10.0,
            rect: Some(container()),
        },
        &config,
    );
    state.apply(
        GalleryAction::Resize {
            width: 400.0,
            height: 800.0,
        },
        &config,
    );
    let changed = state.apply(
        GalleryAction::TouchMove {
            client_x: 10.0,
            client_y: 200.0,
            rect: Some(container()),
        },
        &config,
    );
    assert!(!changed);
    assert_eq!(state.offsets(), &[0.0]);
}

#[test]
fn fixed_layout_ignores_width_changes() {
    let config = GalleryConfig::fixed();
    let mut state = GalleryState::new(&config, 3, 1200.0, 800.0);
    state.apply(wheel(600.0, 100.0), &config);
    state.apply(
        GalleryAction::Resize {
            width: 320.0,
            height: 800.0,
        },
        &config,
    );
    assert_eq!(state.column_count(), 3);
    assert_close(state.offsets()[1], 100.0);
}

#[test]
fn offset_count_matches_columns() {
    let config = GalleryConfig::responsive(768.0);
    let mut state = GalleryState::new(&config, 3, 1200.0, 800.0);
    for width in [1200.0, 300.0, 900.0, 700.0, 768.0, 767.0] {
        state.apply(GalleryAction::Resize { width, height: 800.0 }, &config);
        let expected = if width < 768.0 { 1 } else { 3 };
        assert_eq!(state.column_count(), expected);
        assert_eq!(state.offsets().len(), expected);
        assert!(state.active_column() < expected);
    }
}

#[test]
fn normalized_offset_is_always_in_range() {
    let height = 1600.0;
    let samples = [
        0.0,
        -0.0,
        1.0,
        -1.0,
        height,
        -height,
        height * 7.0,
        -height * 7.0,
        height - 1e-9,
        1e15,
        -1e15,
        12_345.678,
        -98_765.4321,
    ];
    for raw in samples {
        let value = normalize_offset(raw, height);
        assert!(
            (0.0..height).contains(&value),
            "raw {raw} normalized to {value}"
        );
    }
}
