//! Classifier properties over the whole known directive set.

use cspreport_core::{classify, Directive, UNKNOWN};

#[test]
fn known_set_has_seventeen_distinct_names() {
    let mut names: Vec<&str> = Directive::ALL.iter().map(|d| d.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 17);
    assert!(!names.contains(&UNKNOWN));
}

#[test]
fn any_suffix_keeps_the_directive() {
    let suffixes = ["", " ", " 'none'", " http://x http://y", "\n'self'", "  'unsafe-eval'  "];
    for d in Directive::ALL {
        for s in suffixes {
            let raw = format!("{}{}", d, s);
            assert_eq!(classify(&raw), d.as_str(), "input {raw:?}");
        }
    }
}

#[test]
fn output_is_always_bounded() {
    let inputs = ["", "my-directive", "script-src", "report-uri /csp", "🙂", "default-src;"];
    for i in inputs {
        let out = classify(i);
        assert!(
            out == UNKNOWN || Directive::from_name(out).is_some(),
            "{i:?} classified to {out:?}"
        );
    }
}
