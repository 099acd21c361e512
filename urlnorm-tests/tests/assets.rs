//! Tests using the JSON case files under `assets/`.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use urlnorm::normalize::Rules;
use urlnorm::resolve::Base;
use urlnorm::Url;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
struct ResolutionSet {
    base: String,
    testcases: Vec<(String, String)>,
}

fn load<T: for<'de> Deserialize<'de>>(filename: &str) -> T {
    let path = Path::new("assets").join(filename);
    let file = File::open(path).expect("test file not found");
    serde_json::from_reader(file).expect("failed to load test asset")
}

#[test]
fn resolution() {
    let sets: HashMap<String, ResolutionSet> = load("resolution.json");
    for (name, set) in &sets {
        let base: Base = set.base.parse().expect("base should be absolute");
        for (input, expected) in &set.testcases {
            let resolved = base
                .to_absolute(&Url::new(input.as_str()))
                .expect("resolution should succeed");
            assert_eq!(
                resolved.as_str(),
                expected,
                "set={name:?}, base={:?}, input={input:?}",
                set.base
            );
        }
    }
}

#[test]
fn normalization() {
    let sets: HashMap<String, Vec<(String, String)>> = load("normalization.json");
    for (name, cases) in &sets {
        let rules = match name.as_str() {
            "basic" => Rules::basic(),
            "safe" => Rules::safe(),
            _ => panic!("unknown rule set: {name:?}"),
        };
        for (input, expected) in cases {
            let normalized = rules
                .apply(&Url::new(input.as_str()))
                .expect("normalization should succeed");
            assert_eq!(
                normalized.as_str(),
                expected,
                "set={name:?}, input={input:?}"
            );
        }
    }
}

#[cfg(feature = "serde")]
#[test]
fn url_as_json_string() {
    let url: Url = serde_json::from_str("\"http://test.com/a?b=1\"").expect("valid JSON string");
    assert_eq!(url.as_str(), "http://test.com/a?b=1");
    assert_eq!(
        serde_json::to_string(&url).expect("serializable"),
        "\"http://test.com/a?b=1\""
    );
}
