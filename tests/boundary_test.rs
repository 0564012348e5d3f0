use channel_tag::boundary::BoundaryWarning;
use channel_tag::domain::{increment, select_latest_tag, Severity, TagIncrementer};
use channel_tag::ui;

// ============================================================================
// BoundaryWarning Display Tests
// ============================================================================

#[test]
fn test_boundary_warning_unparsable_tag_display() {
    let warning = BoundaryWarning::UnparsableTag {
        tag: "master".to_string(),
        fallback: "1.0.0".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("Could not increment"),
        "Message should contain 'Could not increment', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("master"),
        "Message should contain tag 'master', got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_build_number_display() {
    let warning = BoundaryWarning::BuildNumberTag {
        tag: "3147".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("build number"),
        "Message should mention the build number, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_no_tags_display() {
    let warning = BoundaryWarning::NoTags {
        fallback: "master".to_string(),
    };

    assert_eq!(warning.to_string(), "Repository has no tags, using 'master'");
}

#[test]
fn test_display_boundary_warning_does_not_panic() {
    ui::display_boundary_warning(&BoundaryWarning::HeadAlreadyTagged {
        tags: vec!["1.0.0".to_string()],
    });
}

// ============================================================================
// Warnings raised by the engine
// ============================================================================

#[test]
fn test_increment_raises_build_number_warning() {
    let next = increment("3143", &Severity::Minor);
    assert_eq!(
        next.warning,
        Some(BoundaryWarning::BuildNumberTag {
            tag: "3143".to_string()
        })
    );
}

#[test]
fn test_increment_fallback_warning_names_fallback() {
    let next = TagIncrementer::new()
        .create_when_missing(true)
        .increment("develop", &Severity::Patch);

    assert_eq!(
        next.warning,
        Some(BoundaryWarning::UnparsableTag {
            tag: "develop".to_string(),
            fallback: "1.0.0".to_string(),
        })
    );
}

#[test]
fn test_successful_increment_has_no_warning() {
    assert_eq!(increment("v2.3.4", &Severity::Major).warning, None);
    assert_eq!(increment("v2.3.4", &Severity::NoChange).warning, None);
}

#[test]
fn test_no_tags_warning() {
    let latest = select_latest_tag(&[]);
    assert_eq!(
        latest.warning,
        Some(BoundaryWarning::NoTags {
            fallback: "master".to_string()
        })
    );
}
