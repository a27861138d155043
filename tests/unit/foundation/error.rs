use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LayoutError::invalid_attribute("layout_position", "9", "out of range")
            .to_string()
            .contains("invalid attribute 'layout_position' = '9'")
    );
    assert!(
        LayoutError::missing_spec("#3")
            .to_string()
            .contains("missing position spec")
    );
    assert!(
        LayoutError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        LayoutError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LayoutError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
