use super::*;

fn doc_of(lines: &[&str]) -> Document {
    Document::from_lines(lines.iter().map(|l| l.as_bytes()))
}

#[test]
fn test_find() {
    assert_eq!(find(b"hello world", b"world"), Some(6));
    assert_eq!(find(b"hello", b"hello"), Some(0));
    assert_eq!(find(b"hello", b"xyz"), None);
    assert_eq!(find(b"hi", b"high"), None);
    assert_eq!(find(b"abc", b""), None);
}

#[test]
fn test_first_key_finds_first_row() {
    let mut doc = doc_of(&["nothing", "a needle here", "needle again"]);
    let mut search = SearchState::new();
    let m = search.on_key(&mut doc, b"needle", Key::Char(b'e'));
    assert_eq!(m, Some(SearchMatch { row: 1, cx: 2 }));
    assert_eq!(search.last_match(), Some(1));
}

#[test]
fn test_forward_wraps_around() {
    let mut doc = doc_of(&["x", "-x", "--x"]);
    let mut search = SearchState::new();

    let rows: Vec<usize> = [Key::Char(b'x'), Key::ArrowDown, Key::ArrowDown, Key::ArrowDown]
        .into_iter()
        .map(|k| search.on_key(&mut doc, b"x", k).unwrap().row)
        .collect();
    assert_eq!(rows, vec![0, 1, 2, 0]);
}

#[test]
fn test_backward_wraps_around() {
    let mut doc = doc_of(&["x", "x", "x"]);
    let mut search = SearchState::new();

    assert_eq!(search.on_key(&mut doc, b"x", Key::Char(b'x')).unwrap().row, 0);
    assert_eq!(search.on_key(&mut doc, b"x", Key::ArrowUp).unwrap().row, 2);
    assert_eq!(search.direction(), SearchDirection::Backward);
    assert_eq!(search.on_key(&mut doc, b"x", Key::ArrowLeft).unwrap().row, 1);
    assert_eq!(search.on_key(&mut doc, b"x", Key::ArrowRight).unwrap().row, 2);
}

#[test]
fn test_backward_without_prior_match_goes_forward() {
    let mut doc = doc_of(&["a", "x", "x"]);
    let mut search = SearchState::new();
    let m = search.on_key(&mut doc, b"x", Key::ArrowUp).unwrap();
    assert_eq!(m.row, 1);
    assert_eq!(search.direction(), SearchDirection::Forward);
}

#[test]
fn test_typing_restarts_from_top() {
    let mut doc = doc_of(&["ab", "abc", "abc"]);
    let mut search = SearchState::new();
    search.on_key(&mut doc, b"ab", Key::Char(b'b'));
    search.on_key(&mut doc, b"ab", Key::ArrowDown);
    assert_eq!(search.last_match(), Some(1));

    let m = search.on_key(&mut doc, b"abc", Key::Char(b'c')).unwrap();
    assert_eq!(m.row, 1);
}

#[test]
fn test_match_overlay_and_restore() {
    let mut doc = doc_of(&["int foo = bar;"]);
    doc.set_path("x.c");
    let original = doc.row(0).unwrap().highlight().to_vec();

    let mut search = SearchState::new();
    search.on_key(&mut doc, b"foo", Key::Char(b'o'));
    let hl = doc.row(0).unwrap().highlight();
    assert!(hl[4..7].iter().all(|&h| h == Highlight::Match));
    assert_eq!(hl[0], Highlight::Keyword2);

    search.on_key(&mut doc, b"foo", Key::Escape);
    assert_eq!(doc.row(0).unwrap().highlight(), &original[..]);
    assert_eq!(search.last_match(), None);
}

#[test]
fn test_match_maps_render_offset_to_char_column() {
    let mut doc = doc_of(&["\tneedle"]);
    let mut search = SearchState::new();
    let m = search.on_key(&mut doc, b"needle", Key::Char(b'e')).unwrap();
    assert_eq!(m.cx, 1);
    let hl = doc.row(0).unwrap().highlight();
    assert!(hl[8..14].iter().all(|&h| h == Highlight::Match));
    assert_eq!(hl[0], Highlight::Normal);
}

#[test]
fn test_no_match_leaves_state() {
    let mut doc = doc_of(&["abc"]);
    let mut search = SearchState::new();
    assert!(search.on_key(&mut doc, b"zzz", Key::Char(b'z')).is_none());
    assert_eq!(search.last_match(), None);
}

#[test]
fn test_empty_query_searches_nothing() {
    let mut doc = doc_of(&["abc"]);
    let mut search = SearchState::new();
    assert!(search.on_key(&mut doc, b"", Key::Backspace).is_none());
    assert!(doc.row(0).unwrap().highlight().iter().all(|&h| h == Highlight::Normal));
}

#[test]
fn test_empty_document() {
    let mut doc = Document::new();
    let mut search = SearchState::new();
    assert!(search.on_key(&mut doc, b"x", Key::Char(b'x')).is_none());
}

#[test]
fn test_reset_restores_overlay() {
    let mut doc = doc_of(&["xx"]);
    let mut search = SearchState::new();
    search.on_key(&mut doc, b"x", Key::Char(b'x'));
    search.reset(&mut doc);
    assert!(doc.row(0).unwrap().highlight().iter().all(|&h| h == Highlight::Normal));
    assert_eq!(search.last_match(), None);
}
