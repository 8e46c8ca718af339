//! Integration tests for following the window size in the GUI shell.
#![cfg(feature = "gui")]

mod common;

use std::sync::Arc;

use common::*;
use iced::{Point, Size, window};
use solarmap::AppConfig;
use solarmap::core::LayoutMode;
use solarmap::gui::{Message, SolarMapApp, window_size};

#[test]
fn test_opened_window_reports_its_size() {
    let opened = iced::Event::Window(window::Event::Opened {
        position: Some(Point::ORIGIN),
        size: Size::new(640.0, 900.0),
    });
    assert_eq!(window_size(&opened), Some(Size::new(640.0, 900.0)));

    let resized = iced::Event::Window(window::Event::Resized(Size::new(1440.0, 900.0)));
    assert_eq!(window_size(&resized), Some(Size::new(1440.0, 900.0)));

    assert_eq!(window_size(&iced::Event::Window(window::Event::Focused)), None);
}

#[test]
fn test_layout_follows_granted_size() {
    let catalog = Arc::new(sample_catalog());
    let (mut app, _boot) = SolarMapApp::new(AppConfig::default(), catalog, 1280.0);
    assert_eq!(app.state().layout_mode(), LayoutMode::Desktop);

    // A smaller window than requested switches to the stacked layout straight away
    let _ = app.update(Message::WindowResized(Size::new(700.0, 900.0)));
    assert_eq!(app.state().window_width, 700.0);
    assert_eq!(app.state().layout_mode(), LayoutMode::Mobile);
    assert!(!app.state().shows_header_stats());

    let _ = app.update(Message::WindowResized(Size::new(1100.0, 900.0)));
    assert_eq!(app.state().layout_mode(), LayoutMode::Desktop);
    assert!(app.state().shows_header_stats());
}
