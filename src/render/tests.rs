use super::*;

fn doc_of(lines: &[&str]) -> Document {
    Document::from_lines(lines.iter().map(|l| l.as_bytes()))
}

fn row_bytes(doc: &Document, at: usize, left: usize, width: usize) -> String {
    let mut buf = Vec::new();
    draw_row(&mut buf, doc.row(at).unwrap(), left, width);
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_draw_plain_row() {
    let doc = doc_of(&["abc"]);
    assert_eq!(row_bytes(&doc, 0, 0, 80), "abc\x1b[39m");
}

#[test]
fn test_draw_row_emits_color_only_on_change() {
    let mut doc = doc_of(&["int x"]);
    doc.set_path("a.c");
    assert_eq!(row_bytes(&doc, 0, 0, 80), "\x1b[32mint\x1b[39m x\x1b[39m");
}

#[test]
fn test_draw_row_horizontal_slice() {
    let doc = doc_of(&["abcdef"]);
    assert_eq!(row_bytes(&doc, 0, 2, 3), "cde\x1b[39m");
    assert_eq!(row_bytes(&doc, 0, 10, 3), "\x1b[39m");
}

#[test]
fn test_draw_row_control_glyph() {
    let doc = doc_of(&["a\x01b"]);
    assert_eq!(row_bytes(&doc, 0, 0, 80), "a\x1b[7mA\x1b[mb\x1b[39m");

    let doc = doc_of(&["\x7f"]);
    assert_eq!(row_bytes(&doc, 0, 0, 80), "\x1b[7m?\x1b[m\x1b[39m");
}

#[test]
fn test_draw_row_control_glyph_restores_color() {
    let mut doc = doc_of(&["\"\x01\""]);
    doc.set_path("a.c");
    assert_eq!(
        row_bytes(&doc, 0, 0, 80),
        "\x1b[35m\"\x1b[7mA\x1b[m\x1b[35m\"\x1b[39m"
    );
}

#[test]
fn test_draw_welcome_is_centered() {
    let welcome = format!("Tilde editor -- version {VERSION}");
    let mut buf = Vec::new();
    draw_welcome(&mut buf, 80);
    let padding = (80 - welcome.len()) / 2;
    let expected = format!("~{}{}", " ".repeat(padding - 1), welcome);
    assert_eq!(String::from_utf8(buf).unwrap(), expected);
}

#[test]
fn test_draw_welcome_truncates() {
    let mut buf = Vec::new();
    draw_welcome(&mut buf, 5);
    assert_eq!(buf, b"Tilde".to_vec());
}

#[test]
fn test_draw_rows_empty_document() {
    let doc = Document::new();
    let viewport = Viewport::new(6, 80);
    let mut buf = Vec::new();
    draw_rows(&mut buf, &doc, &viewport);
    let out = String::from_utf8(buf).unwrap();

    assert_eq!(out.matches("\x1b[K\r\n").count(), 6);
    assert_eq!(out.matches("~\x1b[K\r\n").count(), 5);
    assert!(out.contains("Tilde editor -- version"));
}

#[test]
fn test_draw_rows_with_content_has_no_banner() {
    let doc = doc_of(&["one", "two"]);
    let viewport = Viewport::new(4, 80);
    let mut buf = Vec::new();
    draw_rows(&mut buf, &doc, &viewport);
    let out = String::from_utf8(buf).unwrap();

    assert!(out.starts_with("one\x1b[39m\x1b[K\r\ntwo\x1b[39m\x1b[K\r\n"));
    assert_eq!(out.matches("~\x1b[K\r\n").count(), 2);
    assert!(!out.contains("Tilde editor"));
}

#[test]
fn test_status_bar_layout() {
    let doc = Document::new();
    let mut buf = Vec::new();
    draw_status_bar(&mut buf, &doc, &Cursor::default(), 40);

    let left = "[No Name] - 0 lines ";
    let right = "No Filetype | 1/0";
    let expected = format!("\x1b[7m{}{}{}\x1b[m\r\n", left, " ".repeat(3), right);
    assert_eq!(String::from_utf8(buf).unwrap(), expected);
}

#[test]
fn test_status_bar_truncates() {
    let doc = Document::new();
    let mut buf = Vec::new();
    draw_status_bar(&mut buf, &doc, &Cursor::default(), 10);
    assert_eq!(String::from_utf8(buf).unwrap(), "\x1b[7m[No Name] \x1b[m\r\n");
}

#[test]
fn test_status_bar_dirty_and_file_type() {
    let mut doc = doc_of(&["x"]);
    doc.set_path("a_really_long_file_name_here.c");
    doc.insert_char(0, 0, b'y');
    let mut buf = Vec::new();
    draw_status_bar(&mut buf, &doc, &Cursor::default(), 80);
    let out = String::from_utf8(buf).unwrap();

    assert!(out.contains("a_really_long_file_n - 1 lines (modified)"));
    assert!(out.ends_with("c | 1/1\x1b[m\r\n"));
}

#[test]
fn test_message_bar() {
    let mut buf = Vec::new();
    draw_message_bar(&mut buf, Some("hello"), 3);
    assert_eq!(buf, b"\x1b[Khel".to_vec());

    let mut buf = Vec::new();
    draw_message_bar(&mut buf, None, 80);
    assert_eq!(buf, b"\x1b[K".to_vec());
}

#[test]
fn test_compose_frame_order() {
    let lines: Vec<String> = (0..10).map(|i| format!("line {i}")).collect();
    let doc = Document::from_lines(lines.iter().map(|l| l.as_bytes()));
    let mut viewport = Viewport::new(5, 20);
    viewport.set_scroll(2, 1);
    let cursor = Cursor { cx: 5, cy: 3, rx: 5 };

    let frame = compose_frame(&FrameState {
        document: &doc,
        viewport: &viewport,
        cursor: &cursor,
        message: Some("hi"),
    });
    let out = String::from_utf8(frame).unwrap();

    assert!(out.starts_with("\x1b[?25l\x1b[H"));
    assert!(out.ends_with("\x1b[2;5H\x1b[?25h"));
    assert!(out.contains("ine 2\x1b[39m\x1b[K\r\n"));
    assert!(!out.contains("line 1"));
    assert!(out.contains("\x1b[Khi\x1b[2;5H"));
}
