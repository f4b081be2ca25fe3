//! End-to-end lifecycle scenarios: style switching, overlay disposal
//! ordering, resize forwarding, and the stale-load race.

use pretty_assertions::assert_eq;
use styles::{ALL_STYLES, MapStyle};
use viewer::{LifecycleEventKind, MapView, SelectionControl};

#[test]
fn initial_mount_builds_one_topographic_map() {
    let control = SelectionControl::new();
    let (view, _ticket) = MapView::mount(control.selected()).unwrap();

    assert_eq!(view.log().count(LifecycleEventKind::MapCreated), 1);
    assert_eq!(view.log().count(LifecycleEventKind::MapRemoved), 0);
    assert_eq!(
        view.map().unwrap().style_url(),
        MapStyle::Topographic.style_url()
    );
}

#[test]
fn style_change_disposes_before_constructing() {
    let (mut view, ticket) = MapView::mount(MapStyle::Topographic).unwrap();
    view.finish_load(ticket).unwrap();

    let ticket = view
        .set_style(MapStyle::Satellite)
        .unwrap()
        .expect("a new cycle");
    view.finish_load(ticket).unwrap();

    assert_eq!(view.log().count(LifecycleEventKind::MapCreated), 2);
    assert_eq!(view.log().count(LifecycleEventKind::MapRemoved), 1);
    assert_eq!(
        view.map().unwrap().style_url(),
        MapStyle::Satellite.style_url()
    );

    // The topographic map's removal strictly precedes the satellite map's
    // construction.
    let events = view.log().events();
    let removed = events
        .iter()
        .position(|e| e.kind == LifecycleEventKind::MapRemoved)
        .unwrap();
    let second_created = events
        .iter()
        .rposition(|e| e.kind == LifecycleEventKind::MapCreated)
        .unwrap();
    assert!(removed < second_created);
}

#[test]
fn every_cycle_keeps_exactly_one_live_map() {
    let (mut view, ticket) = MapView::mount(MapStyle::Topographic).unwrap();
    view.finish_load(ticket).unwrap();

    for style in [
        MapStyle::Satellite,
        MapStyle::Buildings,
        MapStyle::Terrain,
        MapStyle::Topographic,
        MapStyle::Buildings,
    ] {
        if let Some(ticket) = view.set_style(style).unwrap() {
            view.finish_load(ticket).unwrap();
        }
        view.render_frame();
    }

    let created = view.log().count(LifecycleEventKind::MapCreated);
    let removed = view.log().count(LifecycleEventKind::MapRemoved);
    assert_eq!(created, removed + 1);
    assert!(view.is_mounted());

    let attached = view.log().count(LifecycleEventKind::OverlayAttached);
    let disposed = view.log().count(LifecycleEventKind::OverlayDisposed);
    assert_eq!(attached, disposed + 1);
}

#[test]
fn rapid_reselection_wins_over_a_pending_load() {
    let (mut view, first) = MapView::mount(MapStyle::Topographic).unwrap();
    view.finish_load(first).unwrap();

    // Two selections before either load completes.
    let satellite = view.set_style(MapStyle::Satellite).unwrap().unwrap();
    let buildings = view.set_style(MapStyle::Buildings).unwrap().unwrap();

    // The superseded cycle's load completion attaches nothing.
    view.finish_load(satellite).unwrap();
    assert_eq!(view.log().count(LifecycleEventKind::StaleLoadIgnored), 1);
    assert!(view.engine().borrow().is_none());
    assert!(view.render_frame().is_none());

    view.finish_load(buildings).unwrap();
    assert!(view.engine().borrow().is_some());
    assert_eq!(
        view.map().unwrap().style_url(),
        MapStyle::Buildings.style_url()
    );
}

#[test]
fn resize_reaches_the_engine_exactly_once_while_live() {
    let (mut view, ticket) = MapView::mount(MapStyle::Topographic).unwrap();
    view.finish_load(ticket).unwrap();

    view.viewport_resized(1920, 1080);
    assert_eq!(view.log().count(LifecycleEventKind::OverlayResized), 1);
    {
        let engine = view.engine().borrow();
        assert_eq!(engine.as_ref().unwrap().surface_size(), (1920, 1080));
    }

    view.unmount();
    view.viewport_resized(640, 480);
    assert_eq!(view.log().count(LifecycleEventKind::OverlayResized), 1);
}

#[test]
fn unmount_disposes_everything() {
    let (mut view, ticket) = MapView::mount(MapStyle::Terrain).unwrap();
    view.finish_load(ticket).unwrap();
    view.render_frame();

    view.unmount();
    assert!(!view.is_mounted());
    assert!(view.engine().borrow().is_none());
    assert_eq!(
        view.log().count(LifecycleEventKind::MapCreated),
        view.log().count(LifecycleEventKind::MapRemoved)
    );
    assert_eq!(
        view.log().count(LifecycleEventKind::OverlayAttached),
        view.log().count(LifecycleEventKind::OverlayDisposed)
    );
}

#[test]
fn selection_control_drives_the_full_cycle() {
    let mut control = SelectionControl::new();
    let (mut view, ticket) = MapView::mount(control.selected()).unwrap();
    view.finish_load(ticket).unwrap();

    for option in control.options() {
        let style = control.select(option.value);
        if let Some(ticket) = view.set_style(style).unwrap() {
            view.finish_load(ticket).unwrap();
        }
        assert_eq!(view.map().unwrap().style_url(), style.style_url());
    }
    assert_eq!(
        view.log().count(LifecycleEventKind::MapCreated),
        ALL_STYLES.len()
    );
}
