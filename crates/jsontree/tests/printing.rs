//! Printer shape: indentation, comma placement, the unconditional `{}`
//! document wrapper, and the io sink adapter.

use jsontree::{ErrorKind, parse, print, render};

#[test]
fn nested_objects_indent_four_spaces_per_level() {
    let doc = parse(br#"{"a":{"b":{"c":1}}}"#).unwrap();
    let expected = concat!(
        "{\n",
        "    \"a\": {\n",
        "        \"b\": {\n",
        "            \"c\": 1\n",
        "        }\n",
        "    }\n",
        "}\n",
    );
    assert_eq!(doc.to_string(), expected);
}

#[test]
fn commas_after_every_entry_but_the_last() {
    let doc = parse(br#"{"a": 1, "b": [true, false], "c": "x"}"#).unwrap();
    let expected = concat!(
        "{\n",
        "    \"a\": 1,\n",
        "    \"b\": [\n",
        "        true,\n",
        "        false\n",
        "    ],\n",
        "    \"c\": \"x\"\n",
        "}\n",
    );
    assert_eq!(doc.to_string(), expected);
}

#[test]
fn array_root_prints_wrapped_in_braces_with_index_keys() {
    // Source quirk, kept: the top level is always `{` ... `}`, and an array
    // root's synthesized keys are printed like object keys.
    let doc = parse(b"[10,20,30]").unwrap();
    let expected = concat!(
        "{\n",
        "    \"0\": 10,\n",
        "    \"1\": 20,\n",
        "    \"2\": 30\n",
        "}\n",
    );
    assert_eq!(doc.to_string(), expected);
}

#[test]
fn decoded_escapes_print_verbatim() {
    // The printer does not re-escape: the decoded TAB and LF land in the
    // output as raw bytes.
    let doc = parse(b"{\"a\":\"x\\ty\\n\"}").unwrap();
    assert_eq!(doc.to_string(), "{\n    \"a\": \"x\ty\n\"\n}\n");
}

#[test]
fn render_and_print_agree() {
    let doc = parse(br#"{"k": [1, 2], "s": "v"}"#).unwrap();

    let mut text = String::new();
    render(&doc, &mut text).unwrap();

    let mut bytes = Vec::new();
    print(&doc, &mut bytes).unwrap();

    assert_eq!(bytes, text.as_bytes());
    assert_eq!(text, doc.to_string());
}

struct FailingSink;

impl std::io::Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("sink is closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn sink_write_failure_surfaces_as_io() {
    let doc = parse(b"{\"a\": 1}").unwrap();
    let err = print(&doc, &mut FailingSink).expect_err("sink rejects writes");
    assert!(matches!(err.kind(), ErrorKind::Io(_)));
}
