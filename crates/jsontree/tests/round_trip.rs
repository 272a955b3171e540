//! Structural properties: storage growth, loose round-tripping, and the
//! magnitude-only integer classification.

use jsontree::{Entry, Node, NodeKind, Value, parse};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use rstest::rstest;

#[rstest]
#[case(0)]
#[case(1)]
#[case(9)]
#[case(10)]
#[case(11)]
#[case(100)]
fn object_growth_yields_exact_entry_count(#[case] k: usize) {
    let mut src = String::from("{");
    for i in 0..k {
        src.push_str(&format!("\"k{i}\": {i},"));
    }
    src.push('}');

    let doc = parse(src.as_bytes()).unwrap();
    assert_eq!(doc.len(), k);
    for i in 0..k {
        let key = format!("k{i}");
        assert_eq!(
            doc.get(&key).and_then(Value::as_i64),
            Some(i64::try_from(i).unwrap()),
            "entry {key} survived growth"
        );
    }
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(9)]
#[case(10)]
#[case(11)]
#[case(100)]
fn array_growth_yields_exact_entry_count(#[case] k: usize) {
    let elements: Vec<String> = (0..k).map(|i| i.to_string()).collect();
    let src = format!("[{}]", elements.join(","));

    let doc = parse(src.as_bytes()).unwrap();
    assert_eq!(doc.kind(), NodeKind::Array);
    assert_eq!(doc.len(), k);
    for (i, entry) in doc.entries().iter().enumerate() {
        assert_eq!(entry.key, i.to_string());
        assert_eq!(entry.value.as_i64(), Some(i64::try_from(i).unwrap()));
    }
}

#[test]
fn parse_print_parse_is_structurally_stable() {
    let doc = parse(
        br#"{
            "name": "example",
            "flags": [true, false],
            "nested": {"inner": [1, 2, {"deep": "yes"}]},
            "text": "tab\there"
        }"#,
    )
    .unwrap();

    let printed = doc.to_string();
    let reparsed = parse(printed.as_bytes()).unwrap();
    assert_eq!(reparsed, doc);
}

#[test]
fn wide_integer_below_threshold_narrows_on_reparse() {
    // Classification is a function of magnitude, not of prior storage: a
    // hand-built Int64 holding a small value comes back as Int32.
    let doc = Node::from_entries(
        NodeKind::Object,
        vec![Entry {
            key: "v".to_string(),
            value: Value::Int64(5),
        }],
    );

    let reparsed = parse(doc.to_string().as_bytes()).unwrap();
    assert_eq!(reparsed.get("v"), Some(&Value::Int32(5)));
}

#[test]
fn printing_is_idempotent() {
    let doc = parse(br#"{"a": [10, {"b": "x"}], "c": true}"#).unwrap();
    let once = doc.to_string();
    let twice = parse(once.as_bytes()).unwrap().to_string();
    assert_eq!(once, twice);
}

// Generated trees stay within the dialect the parser accepts: non-negative
// integers, quote-free ASCII strings, object roots.
#[derive(Clone, Debug)]
struct Doc(Node);

fn arbitrary_text(g: &mut Gen) -> String {
    let alphabet = [
        'a', 'b', 'c', 'x', 'y', 'z', 'A', 'Z', '0', '9', ' ', '-', '_', '.',
    ];
    let len = usize::arbitrary(g) % 8;
    (0..len).map(|_| *g.choose(&alphabet).unwrap()).collect()
}

fn arbitrary_value(g: &mut Gen, depth: usize) -> Value {
    let max_choice = if depth == 0 { 3 } else { 5 };
    match usize::arbitrary(g) % (max_choice + 1) {
        0 => Value::Int32(i32::from(u16::arbitrary(g))),
        1 => Value::Int64(i64::from(i32::MAX) + i64::from(u32::arbitrary(g))),
        2 => Value::Bool(bool::arbitrary(g)),
        3 => Value::String(arbitrary_text(g)),
        4 => Value::Object(arbitrary_node(g, NodeKind::Object, depth - 1)),
        _ => Value::Array(arbitrary_node(g, NodeKind::Array, depth - 1)),
    }
}

fn arbitrary_node(g: &mut Gen, kind: NodeKind, depth: usize) -> Node {
    let count = usize::arbitrary(g) % 4;
    let entries = (0..count)
        .map(|i| Entry {
            key: match kind {
                NodeKind::Object => format!("k{i}"),
                NodeKind::Array => i.to_string(),
            },
            value: arbitrary_value(g, depth),
        })
        .collect();
    Node::from_entries(kind, entries)
}

impl Arbitrary for Doc {
    fn arbitrary(g: &mut Gen) -> Self {
        Doc(arbitrary_node(g, NodeKind::Object, 2))
    }
}

#[quickcheck]
fn generated_trees_round_trip(doc: Doc) -> bool {
    let printed = doc.0.to_string();
    match parse(printed.as_bytes()) {
        Ok(reparsed) => reparsed == doc.0,
        Err(_) => false,
    }
}
