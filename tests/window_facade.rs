//! Black-box tests of the main window facade through its public API.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use proptest::prelude::*;

use previewdeck::view::theme::Theme;
use previewdeck::view::window::{
    MainWindow, PixelSize, ThumbnailDescription, ThumbnailId, ThumbnailRef, ZoomAnchor,
};

fn make_window() -> MainWindow {
    MainWindow::new(Theme::default())
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

struct Client {
    title: String,
    id: ThumbnailId,
    disabled: bool,
}

impl Client {
    fn entry(title: &str, id: u64) -> ThumbnailRef {
        Rc::new(RefCell::new(Client {
            title: title.to_string(),
            id: ThumbnailId(id),
            disabled: false,
        }))
    }
}

impl ThumbnailDescription for Client {
    fn title(&self) -> String {
        self.title.clone()
    }
    fn id(&self) -> ThumbnailId {
        self.id
    }
    fn is_disabled(&self) -> bool {
        self.disabled
    }
    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}

#[test]
fn every_anchor_round_trips_with_one_active_toggle() {
    let mut window = make_window();
    for anchor in ZoomAnchor::ALL {
        window.set_thumbnail_zoom_anchor(anchor);
        assert_eq!(window.thumbnail_zoom_anchor(), anchor);
        assert_eq!(window.anchor_grid().checked_count(), 1);
    }
}

#[test]
fn empty_batches_leave_the_list_untouched() {
    let mut window = make_window();
    let before = window.thumbnail_list().revision();
    window.add_thumbnails(&[]);
    window.update_thumbnails(&[]);
    window.remove_thumbnails(&[]);
    assert_eq!(window.thumbnail_list().revision(), before);
    assert!(window.thumbnail_list().is_empty());
}

#[test]
fn adding_then_removing_the_same_entries_empties_the_list() {
    let mut window = make_window();
    let entries: Vec<ThumbnailRef> = (0..5)
        .map(|i| Client::entry(&format!("Client {i}"), i))
        .collect();
    window.add_thumbnails(&entries);
    assert_eq!(window.thumbnail_list().len(), 5);
    window.remove_thumbnails(&entries);
    assert!(window.thumbnail_list().is_empty());
}

#[test]
fn update_requests_a_single_repaint() {
    let mut window = make_window();
    let entries = vec![Client::entry("Client", 1), Client::entry("Other", 2)];
    window.add_thumbnails(&entries);
    let before = window.thumbnail_list().revision();
    window.update_thumbnails(&entries);
    assert_eq!(window.thumbnail_list().revision(), before + 1);
}

#[test]
fn zoom_flag_gates_the_dependent_controls() {
    use previewdeck::view::controls::FocusState;

    let mut window = make_window();
    window.set_thumbnail_zoom_enabled(false);
    assert_eq!(window.zoom_factor_input().focus, FocusState::Disabled);
    assert_eq!(window.anchor_grid().focus, FocusState::Disabled);
    window.set_thumbnail_zoom_enabled(true);
    assert_ne!(window.zoom_factor_input().focus, FocusState::Disabled);
    assert_ne!(window.anchor_grid().focus, FocusState::Disabled);
}

#[test]
fn unhandled_close_request_closes_the_window() {
    let mut window = make_window();
    window.handle_event(key(KeyCode::Esc));
    assert!(window.is_closing());
}

#[test]
fn vetoed_close_request_keeps_the_window_open() {
    let mut window = make_window();
    let asked = Rc::new(Cell::new(false));
    {
        let asked = Rc::clone(&asked);
        window.on_window_close_requested(move |_, request| {
            asked.set(true);
            request.allow = false;
        });
    }
    window.handle_event(key(KeyCode::Esc));
    assert!(asked.get());
    assert!(!window.is_closing());
}

#[test]
fn size_limitations_clamp_subsequent_writes() {
    let mut window = make_window();
    window.set_thumbnail_size_limitations(PixelSize::new(80, 45), PixelSize::new(640, 360));
    window.set_thumbnail_size(PixelSize::new(10_000, 10));
    assert_eq!(window.thumbnail_size(), PixelSize::new(640, 45));
}

#[test]
fn opacity_known_values_quantize_as_expected() {
    let mut window = make_window();
    for (input, expected) in [(0.0, 0.0), (0.25, 0.25), (0.999, 0.99), (1.0, 1.0)] {
        window.set_thumbnails_opacity(input);
        assert!(
            (window.thumbnails_opacity() - expected).abs() < 1e-9,
            "input {input}"
        );
    }
}

proptest! {
    #[test]
    fn opacity_round_trips_within_a_percent(value in 0.0f64..=1.0) {
        let mut window = make_window();
        window.set_thumbnails_opacity(value);
        let read = window.thumbnails_opacity();
        prop_assert!(read >= 0.0 && read <= 1.0);
        prop_assert!((read - value).abs() <= 0.01 + 1e-9);
    }

    #[test]
    fn any_anchor_index_round_trips(index in 0usize..9) {
        let mut window = make_window();
        let anchor = ZoomAnchor::ALL[index];
        window.set_thumbnail_zoom_anchor(anchor);
        prop_assert_eq!(window.thumbnail_zoom_anchor(), anchor);
        prop_assert_eq!(window.anchor_grid().checked_count(), 1);
    }
}
