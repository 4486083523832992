//! Method-name construction tests.

use convoke::{CaseStyle, DispatchOptions, Dispatcher, Overrides};

#[test]
fn camel_is_the_default_format() {
    let dispatcher = Dispatcher::new();
    assert_eq!(
        dispatcher.build_method_name("find", "all", &Overrides::new()),
        "findAll"
    );
}

#[test]
fn pascal_override() {
    let dispatcher = Dispatcher::new();
    assert_eq!(
        dispatcher.build_method_name("find", "all", &Overrides::new().format(CaseStyle::Pascal)),
        "FindAll"
    );
}

#[test]
fn multi_word_variant_splits_on_spaces() {
    let dispatcher = Dispatcher::new();
    assert_eq!(
        dispatcher.build_method_name("find", "all Applications", &Overrides::new()),
        "findAllApplications"
    );
}

#[test]
fn multi_word_variant_is_boundary_aware() {
    let dispatcher = Dispatcher::new();
    // Same words whether the boundary is a space or a case change.
    assert_eq!(
        dispatcher.build_method_name("find", "all applications", &Overrides::new()),
        "findAllApplications"
    );
    assert_eq!(
        dispatcher.build_method_name("find", "allApplications", &Overrides::new()),
        "findAllApplications"
    );
}

#[test]
fn snake_override() {
    let dispatcher = Dispatcher::new();
    assert_eq!(
        dispatcher.build_method_name("find", "all", &Overrides::new().format(CaseStyle::Snake)),
        "find_all"
    );
    assert_eq!(
        dispatcher.build_method_name(
            "find",
            "all Applications",
            &Overrides::new().format(CaseStyle::Snake)
        ),
        "find_all_applications"
    );
}

#[test]
fn dot_override() {
    let dispatcher = Dispatcher::new();
    assert_eq!(
        dispatcher.build_method_name(
            "find",
            "all Applications",
            &Overrides::new().format(CaseStyle::Dot)
        ),
        "find.all.applications"
    );
}

#[test]
fn default_method_name_uses_default_prefix() {
    let dispatcher = Dispatcher::new();
    assert_eq!(
        dispatcher.build_default_method_name("find", &Overrides::new()),
        "defaultFind"
    );
}

#[test]
fn default_prefix_override_wins() {
    let dispatcher = Dispatcher::new();
    assert_eq!(
        dispatcher.build_default_method_name("find", &Overrides::new().default_prefix("fallback")),
        "fallbackFind"
    );
}

#[test]
fn instance_options_survive_per_call_overrides() {
    let dispatcher = Dispatcher::new();
    let _ = dispatcher.build_method_name("find", "all", &Overrides::new().format(CaseStyle::Snake));
    let _ = dispatcher.build_default_method_name("find", &Overrides::new().default_prefix("fallback"));

    // Later calls without overrides still see the instance configuration.
    assert_eq!(
        dispatcher.build_method_name("find", "all", &Overrides::new()),
        "findAll"
    );
    assert_eq!(
        dispatcher.build_default_method_name("find", &Overrides::new()),
        "defaultFind"
    );
}

#[test]
fn instance_level_options_apply_everywhere() {
    let dispatcher = Dispatcher::with_options(DispatchOptions {
        format: CaseStyle::Snake,
        default_prefix: "fallback".to_string(),
    });
    assert_eq!(
        dispatcher.build_method_name("find", "all", &Overrides::new()),
        "find_all"
    );
    assert_eq!(
        dispatcher.build_default_method_name("find", &Overrides::new()),
        "fallback_find"
    );
}

#[test]
fn unrecognized_style_spelling_falls_back_to_camel() {
    assert_eq!(CaseStyle::from_name("camelCase"), CaseStyle::Camel);
    assert_eq!(CaseStyle::from_name("pascalCase"), CaseStyle::Pascal);
    assert_eq!(CaseStyle::from_name("snakeCase"), CaseStyle::Snake);
    assert_eq!(CaseStyle::from_name("dotCase"), CaseStyle::Dot);
    assert_eq!(CaseStyle::from_name("kebabCase"), CaseStyle::Camel);
    assert_eq!(CaseStyle::from_name(""), CaseStyle::Camel);
}
