use recipelang_parser::recognize;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;

#[derive(Debug, Deserialize)]
struct TestGroup {
    #[allow(dead_code)]
    metadata: Metadata,
    vectors: Vec<TestVector>,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    #[allow(dead_code)]
    description: Option<String>,
    #[allow(dead_code)]
    version: String,
}

#[derive(Debug, Deserialize)]
struct TestVector {
    id: String,
    raw: String,
    /// Expected rendering of the recognized instruction.
    display: Option<String>,
    #[serde(default)]
    noop: bool,
    error: Option<ErrorExpectation>,
}

#[derive(Debug, Deserialize)]
struct ErrorExpectation {
    code: String,
    token: Option<String>,
    message: Option<String>,
}

fn check(vector: &TestVector) -> Result<(), String> {
    let result = recognize(&vector.raw);

    if vector.noop {
        return match result {
            Ok(None) => Ok(()),
            other => Err(format!("expected no-op, got {:?}", other)),
        };
    }

    if let Some(expected) = &vector.error {
        let err = match result {
            Err(e) => e,
            Ok(other) => return Err(format!("expected {} error, got {:?}", expected.code, other)),
        };
        if err.code() != expected.code {
            return Err(format!("expected code {}, got {}", expected.code, err.code()));
        }
        if let Some(token) = &expected.token {
            if err.offending_token() != Some(token.as_str()) {
                return Err(format!(
                    "expected token {:?}, got {:?}",
                    token,
                    err.offending_token()
                ));
            }
        }
        if let Some(message) = &expected.message {
            if &err.to_string() != message {
                return Err(format!("message mismatch: {:?}", err.to_string()));
            }
        }
        return Ok(());
    }

    match (result, &vector.display) {
        (Ok(Some(instruction)), Some(display)) if &instruction.to_string() == display => Ok(()),
        (other, display) => Err(format!("expected {:?}, got {:?}", display, other)),
    }
}

#[test]
fn test_vectors_compliance() {
    let path = "tests/vectors/recognizer.v1.yaml";
    let content = fs::read_to_string(path).unwrap_or_else(|_| panic!("Failed to read {}", path));

    let groups: HashMap<String, TestGroup> =
        serde_yaml::from_str(&content).expect("Failed to parse YAML");

    let mut total = 0;
    let mut failures = Vec::new();

    for (group_name, group) in groups {
        for vector in &group.vectors {
            total += 1;
            if let Err(msg) = check(vector) {
                failures.push(format!("{}/{}: {}", group_name, vector.id, msg));
            }
        }
    }

    if !failures.is_empty() {
        for f in &failures {
            println!("- {}", f);
        }
        panic!("Failed {}/{} vectors", failures.len(), total);
    }

    assert!(total > 0, "no vectors loaded");
}
