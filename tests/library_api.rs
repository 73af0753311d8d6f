use examplelib::config::DemoConfig;
use examplelib::{Multiplier, OverflowPolicy, demo, double_concat, normal_concat};

const SAMPLES: &[(&str, &str)] = &[
    ("foo", "bar"),
    ("", ""),
    ("hello ", "world"),
    ("a", ""),
    ("", "b"),
    ("日本", "語"),
];

#[test]
fn normal_concat_is_a_then_b() {
    for &(a, b) in SAMPLES {
        let out = normal_concat(a, b);
        assert_eq!(out.len(), a.len() + b.len());
        assert!(out.starts_with(a));
        assert!(out.ends_with(b));
    }
}

#[test]
fn double_concat_is_normal_concat_twice() {
    for &(a, b) in SAMPLES {
        let once = normal_concat(a, b);
        assert_eq!(double_concat(a, b), format!("{once}{once}"));
    }
}

#[test]
fn concat_scenarios() {
    assert_eq!(normal_concat("foo", "bar"), "foobar");
    assert_eq!(double_concat("foo", "bar"), "foobarfoobar");
}

#[test]
fn multiplier_scenarios() {
    let cases = [
        (3, 4, 12),
        (-2, 5, -10),
        (-3, -4, 12),
        (100_000, 200_000, 20_000_000_000),
        (0, 5, 0),
        (1, 9999, 9999),
    ];
    for (a, b, expected) in cases {
        let mut m = Multiplier::new();
        m.multiply(a, b);
        assert_eq!(m.result(), expected, "{a} * {b}");
    }
}

#[test]
fn multiplier_overwrites_instead_of_accumulating() {
    let mut m = Multiplier::new();
    assert_eq!(m.result(), 0);
    m.multiply(2, 3);
    m.multiply(4, 5);
    assert_eq!(m.result(), 20);
}

#[test]
fn demo_runs_with_defaults() {
    let report = demo::run(&DemoConfig::default(), OverflowPolicy::default()).unwrap();
    assert_eq!(report.product, 12);
    assert_eq!(report.concatenation, "hello world");
    assert!(report.preamble.starts_with("examplelib v"));
}
