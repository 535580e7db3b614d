use super::*;

#[test]
fn constructor_helpers_build_matching_variants() {
    assert!(matches!(
        LoopforgeError::validation("x"),
        LoopforgeError::Validation(_)
    ));
    assert!(matches!(
        LoopforgeError::provider("x"),
        LoopforgeError::Provider(_)
    ));
    assert!(matches!(LoopforgeError::encode("x"), LoopforgeError::Encode(_)));
    assert!(matches!(LoopforgeError::serde("x"), LoopforgeError::Serde(_)));
}

#[test]
fn display_includes_category_prefix() {
    assert_eq!(
        LoopforgeError::validation("bad fold count").to_string(),
        "validation error: bad fold count"
    );
    assert_eq!(
        LoopforgeError::provider("no JSON object found in generated text").to_string(),
        "provider error: no JSON object found in generated text"
    );
}

#[test]
fn anyhow_errors_pass_through_transparently() {
    let err: LoopforgeError = anyhow::anyhow!("underlying io failure").into();
    assert_eq!(err.to_string(), "underlying io failure");
}
