//! Integration tests for templated output
//!
//! These drive the output engine the way generated code does: values built
//! from the runtime's types, passed through `print_line!`/`write_line`.

use std::fmt;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use velocity_runtime::{
    ArgumentPolicy, Array, Format, Maybe, PrintConfig, RuntimeError, TaggedUnion, array,
    impl_format_via_display, print_line, render, tagged_union, write_line,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Type {
    A,
    B,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::A => write!(f, "A"),
            Type::B => write!(f, "B"),
        }
    }
}

impl_format_via_display!(Type);

#[derive(Debug, Clone, PartialEq)]
struct A {
    a: i32,
    b: i32,
}

#[derive(Debug, Clone, PartialEq)]
struct B {
    values: Array<f64>,
}

impl Format for A {
    fn format(&self) -> String {
        format!("A{{a = {}, b = {}}}", self.a, self.b)
    }
}

impl Format for B {
    fn format(&self) -> String {
        format!("B{{values = {}}}", self.values.format())
    }
}

tagged_union! {
    #[derive(Debug, Clone, PartialEq)]
    enum Value {
        A(A),
        B(B),
    }
}

struct Tagged {
    kind: Type,
    value: Value,
}

fn read_back(mut file: File) -> String {
    file.seek(SeekFrom::Start(0)).unwrap();
    let mut out = String::new();
    file.read_to_string(&mut out).unwrap();
    out
}

#[test]
fn test_named_discriminant_line() {
    let x = Tagged {
        kind: Type::A,
        value: Value::from(A { a: 1, b: 2 }),
    };
    let mut file = tempfile::tempfile().unwrap();
    write_line(&mut file, "x.type = {}", &[&x.kind], &PrintConfig::new()).unwrap();
    assert_eq!(read_back(file), "x.type = A\n");
    assert!(x.value.get_as::<A>().is_ok());
}

#[test]
fn test_union_line_uses_active_payload() {
    let x = Tagged {
        kind: Type::B,
        value: Value::from(B {
            values: array![0.5, 1.25],
        }),
    };
    let config = PrintConfig::new();
    let mut file = tempfile::tempfile().unwrap();
    write_line(&mut file, "x.type = {}", &[&x.kind], &config).unwrap();
    write_line(&mut file, "x.value = {}", &[&x.value], &config).unwrap();
    assert_eq!(
        read_back(file),
        "x.type = B\nx.value = TaggedUnion{arg = B{values = [0.5, 1.25]}}\n"
    );
}

#[test]
fn test_union_format_contains_payload_in_order() {
    let x = Value::from(A { a: 1, b: 2 });
    let rendered = render!("{}", x).unwrap();
    let one = rendered.find('1').unwrap();
    let two = rendered.find('2').unwrap();
    assert!(one < two);
    assert!(rendered.starts_with("TaggedUnion{"));
}

#[test]
fn test_mixed_arguments() {
    let items: Array<i32> = (1..=3).collect();
    let missing: Maybe<i32> = Maybe::Nothing;
    let out = render!(
        "{} has {} items, first {}, {}",
        items,
        items.len(),
        items.first().unwrap(),
        missing
    )
    .unwrap();
    assert_eq!(out, "[1, 2, 3] has 3 items, first 1, TaggedUnion{}");
}

#[test]
fn test_print_line_to_stdout() {
    print_line!("{{}}").unwrap();
    print_line!("{} + {} = {}", 1, 2, 1 + 2).unwrap();
}

#[test]
fn test_print_line_rejects_lone_brace() {
    let err = print_line!("{", 1).unwrap_err();
    match err {
        RuntimeError::InvalidTemplate { position, .. } => assert_eq!(position, 0),
        other => panic!("Expected InvalidTemplate, got {:?}", other),
    }
}

#[test]
fn test_lenient_policy_drops_surplus() {
    let lenient = PrintConfig::new().with_argument_policy(ArgumentPolicy::Lenient);
    let mut file = tempfile::tempfile().unwrap();
    write_line(&mut file, "only {}", &[&1, &2, &3], &lenient).unwrap();
    assert_eq!(read_back(file), "only 1\n");
}
