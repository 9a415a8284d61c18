#![allow(non_snake_case)]

use super::*;

#[test]
fn ReloadHandle___new___is_not_attached() {
    let handle = ReloadHandle::new();

    assert!(!handle.is_attached());
}

#[test]
fn ReloadHandle___reload_without_subscriber___returns_error() {
    let handle = ReloadHandle::new();

    let result = handle.reload_level(LogLevel::Debug);

    assert_eq!(result.unwrap_err(), "Reload handle not initialized");
}

#[test]
fn ReloadHandle___attached___reloads_level() {
    use tracing_subscriber::prelude::*;

    let (layer, reload_handle) = reload::Layer::new(filter_for_level(LogLevel::Info));
    let subscriber = tracing_subscriber::registry().with(layer);
    let handle = ReloadHandle::new();
    handle.set_handle(reload_handle);

    tracing::subscriber::with_default(subscriber, || {
        assert!(handle.reload_level(LogLevel::Trace).is_ok());
    });
    assert!(handle.is_attached());
}
