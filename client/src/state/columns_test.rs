use super::*;

fn summary(slug: &str) -> ColumnSummary {
    ColumnSummary {
        slug: slug.to_owned(),
        title: slug.to_uppercase(),
        excerpt: String::new(),
        image: format!("/{slug}.jpg"),
    }
}

// =============================================================
// ColumnsState
// =============================================================

#[test]
fn columns_state_default_is_idle_and_empty() {
    let state = ColumnsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn columns_state_pending_is_loading() {
    assert!(ColumnsState::pending().loading);
}

#[test]
fn apply_ok_keeps_response_order() {
    let mut state = ColumnsState::pending();
    state.apply(Ok(vec![summary("c"), summary("a"), summary("b")]));
    assert!(!state.loading);
    let slugs: Vec<_> = state.items.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["c", "a", "b"]);
}

#[test]
fn apply_ok_empty_is_not_an_error() {
    let mut state = ColumnsState::pending();
    state.apply(Ok(Vec::new()));
    assert!(state.items.is_empty());
    assert!(state.error.is_none());
}

#[test]
fn apply_err_records_message_and_clears_items() {
    let mut state = ColumnsState::pending();
    state.apply(Ok(vec![summary("a")]));
    state.apply(Err("column request failed: 500".to_owned()));
    assert!(state.items.is_empty());
    assert_eq!(state.error.as_deref(), Some("column request failed: 500"));
}

// =============================================================
// ColumnDetailState
// =============================================================

#[test]
fn detail_state_defaults_to_loading() {
    assert_eq!(ColumnDetailState::default(), ColumnDetailState::Loading);
}

fn detail(slug: &str) -> ColumnDetail {
    ColumnDetail {
        slug: slug.to_owned(),
        title: slug.to_uppercase(),
        excerpt: String::new(),
        image: format!("/{slug}.jpg"),
        date: None,
        body: String::new(),
    }
}

#[test]
fn detail_state_from_fetch_result() {
    let detail = detail("a");
    assert_eq!(ColumnDetailState::from(Ok(detail.clone())), ColumnDetailState::Loaded(detail));
    assert_eq!(ColumnDetailState::from(Err(FetchError::NotFound)), ColumnDetailState::NotFound);
    assert_eq!(
        ColumnDetailState::from(Err(FetchError::Failed("boom".to_owned()))),
        ColumnDetailState::Failed("boom".to_owned())
    );
}

#[test]
fn for_slug_applies_result_for_current_route() {
    assert_eq!(
        ColumnDetailState::for_slug("b", "b", Ok(detail("b"))),
        Some(ColumnDetailState::Loaded(detail("b")))
    );
    assert_eq!(
        ColumnDetailState::for_slug("b", "b", Err(FetchError::NotFound)),
        Some(ColumnDetailState::NotFound)
    );
}

#[test]
fn for_slug_discards_late_result_for_previous_route() {
    // Navigated a -> b; the response for a lands after b's.
    assert_eq!(ColumnDetailState::for_slug("a", "b", Ok(detail("a"))), None);
    assert_eq!(ColumnDetailState::for_slug("a", "b", Err(FetchError::Failed("timeout".to_owned()))), None);
}
