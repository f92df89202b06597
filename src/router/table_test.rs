use super::*;

// =============================================================
// build
// =============================================================

#[test]
fn standard_table_has_two_routes_in_order() {
    let table = RouteTable::standard().unwrap();
    assert_eq!(
        table.routes(),
        &[Route::new("/", ViewId::Entry), Route::new("/chat", ViewId::Interactive)]
    );
}

#[test]
fn build_rejects_duplicate_paths() {
    let err = RouteTable::build(vec![
        Route::new("/", ViewId::Entry),
        Route::new("/chat", ViewId::Interactive),
        Route::new("/chat", ViewId::Entry),
    ])
    .unwrap_err();
    assert_eq!(err, ConfigError::DuplicatePath { path: "/chat".to_owned() });
}

#[test]
fn build_rejects_relative_paths() {
    let err = RouteTable::build(vec![Route::new("/", ViewId::Entry), Route::new("chat", ViewId::Interactive)])
        .unwrap_err();
    assert_eq!(err, ConfigError::InvalidPath { path: "chat".to_owned() });
}

#[test]
fn build_rejects_paths_navigation_would_rewrite() {
    for path in ["/chat/", "/chat?x", "/chat#y", "//"] {
        let err = RouteTable::build(vec![Route::new("/", ViewId::Entry), Route::new(path, ViewId::Interactive)])
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidPath { path: path.to_owned() }, "path {path:?}");
    }
}

#[test]
fn build_accepts_nested_normalized_paths() {
    let table =
        RouteTable::build(vec![Route::new("/", ViewId::Entry), Route::new("/rooms/main", ViewId::Interactive)]).unwrap();
    assert_eq!(table.path_of(ViewId::Interactive), Some("/rooms/main"));
}

#[test]
fn build_requires_entry_view_at_root() {
    let err = RouteTable::build(vec![Route::new("/", ViewId::Interactive)]).unwrap_err();
    assert_eq!(err, ConfigError::MissingFallback);
    assert_eq!(RouteTable::build(Vec::new()).unwrap_err(), ConfigError::MissingFallback);
}

// =============================================================
// resolve / path_of
// =============================================================

#[test]
fn resolve_finds_bound_paths() {
    let table = RouteTable::standard().unwrap();
    assert_eq!(table.resolve("/chat").map(|r| r.view), Some(ViewId::Interactive));
    assert_eq!(table.resolve("/").map(|r| r.view), Some(ViewId::Entry));
}

#[test]
fn resolve_unknown_path_is_none() {
    let table = RouteTable::standard().unwrap();
    assert!(table.resolve("/unknown").is_none());
    assert!(table.resolve("/chat/extra").is_none());
}

#[test]
fn path_of_returns_first_binding() {
    let table = RouteTable::build(vec![
        Route::new("/", ViewId::Entry),
        Route::new("/rooms", ViewId::Interactive),
        Route::new("/chat", ViewId::Interactive),
    ])
    .unwrap();
    assert_eq!(table.path_of(ViewId::Interactive), Some("/rooms"));
}

#[test]
fn interactive_view_needs_http_and_widgets() {
    assert_eq!(ViewId::Interactive.required_capabilities(), &[Capability::Http, Capability::Widgets]);
}
