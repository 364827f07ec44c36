//! Integration tests for rendering Doxyfile templates

use doxyfile_gen::{
    joined, parse, render, DoxyfileConfig, RenderContext, RenderError, DEFAULT_TEMPLATE,
};
use pretty_assertions::assert_eq;

const DOXYFILE_TEMPLATE: &str = r#"PROJECT_NAME           = blink
PROJECT_NUMBER         = <%= version %>.<%= commit_number %>
INPUT                  =<%= input %>
EXAMPLE_PATH           =<%= example_path %>
STRIP_FROM_PATH        =<%= strip_from_path %>
USE_MDFILE_AS_MAINPAGE = <%= use_mdfile_as_mainpage %>
"#;

#[test]
fn test_input_paths_example() {
    let ctx = RenderContext::new("INPUT =<%= input %>").with_input_paths(["src", "include"]);
    insta::assert_snapshot!(ctx.render().unwrap(), @"INPUT = src include");
}

#[test]
fn test_empty_example_paths_example() {
    let ctx = RenderContext::new("EXAMPLE_PATH =<%= example_path %>");
    assert_eq!(ctx.render().unwrap(), "EXAMPLE_PATH =");
}

#[test]
fn test_undefined_field_example() {
    let ctx = RenderContext::new("<%= nonexistent %>");
    let err = ctx.render().unwrap_err();
    assert!(matches!(err, RenderError::UnresolvedField { ref name, .. } if name == "nonexistent"));
    assert_eq!(err.to_string(), "unresolved field 'nonexistent'");
}

#[test]
fn test_joined_form_for_varied_lists() {
    let lists: Vec<Vec<String>> = vec![
        vec![],
        vec!["a".to_string()],
        vec!["a".to_string(), "b c".to_string()],
        vec!["x".to_string(); 5],
    ];
    for list in lists {
        let expected: String = list.iter().map(|e| format!(" {}", e)).collect();
        assert_eq!(joined(&list), expected);

        let ctx = RenderContext::new("")
            .with_input_paths(list.clone())
            .with_example_paths(list.clone())
            .with_strip_from_path_paths(list.clone());
        assert_eq!(ctx.input_paths(), expected);
        assert_eq!(ctx.example_paths(), expected);
        assert_eq!(ctx.strip_from_path_paths(), expected);
    }
}

#[test]
fn test_full_doxyfile() {
    let ctx = RenderContext::new(DOXYFILE_TEMPLATE)
        .with_version("0.3")
        .with_commit_number("1432")
        .with_use_mdfile_as_mainpage(true)
        .with_input_paths(["include", "src", "README.md"])
        .with_example_paths(["test"])
        .with_strip_from_path_paths(["include"]);

    assert_eq!(
        ctx.render().unwrap(),
        "PROJECT_NAME           = blink\n\
         PROJECT_NUMBER         = 0.3.1432\n\
         INPUT                  = include src README.md\n\
         EXAMPLE_PATH           = test\n\
         STRIP_FROM_PATH        = include\n\
         USE_MDFILE_AS_MAINPAGE = true\n"
    );
}

#[test]
fn test_render_does_not_mutate() {
    let mut ctx = RenderContext::new(DOXYFILE_TEMPLATE).with_input_paths(["a"]);
    let first = ctx.render().unwrap();
    let second = ctx.render().unwrap();
    assert_eq!(first, second);

    ctx.set_input_paths(Vec::<String>::new());
    let third = ctx.render().unwrap();
    assert!(first.contains("INPUT                  = a\n"));
    assert!(third.contains("INPUT                  =\n"));
}

#[test]
fn test_config_file_contents_drive_render() {
    let config = DoxyfileConfig::from_str(
        r#"
version = "1.0"
commit_number = "7"
input = ["lib"]
"#,
    )
    .expect("Should parse");
    let out = render(DOXYFILE_TEMPLATE, config).unwrap();
    assert!(out.contains("PROJECT_NUMBER         = 1.0.7\n"));
    assert!(out.contains("INPUT                  = lib\n"));
    assert!(out.contains("USE_MDFILE_AS_MAINPAGE = \n"));
}

#[test]
fn test_construction_does_not_validate() {
    // A broken template is accepted until it is rendered
    let ctx = RenderContext::new("<%= input");
    assert_eq!(ctx.template(), "<%= input");
    assert!(matches!(ctx.render(), Err(RenderError::Parse(_))));
}

#[test]
fn test_trim_and_comments() {
    let ctx = RenderContext::new("<%# header -%>\nA = <%= version -%>\nB\n").with_version("1");
    assert_eq!(ctx.render().unwrap(), "A = 1B\n");
}

#[test]
fn test_escaped_tag_is_literal() {
    let ctx = RenderContext::new("<%%= version %> <%= version %>").with_version("9");
    assert_eq!(ctx.render().unwrap(), "<%= version %> 9");
}

#[test]
fn test_parse_error_format_points_at_tag() {
    let source = "INPUT = <% x %>\n";
    let errors = parse(source).expect_err("Should fail");
    let formatted = errors[0].format(source, "Doxyfile.erb");
    assert!(formatted.contains("code tags are not supported"));
    assert!(formatted.contains("Doxyfile.erb"));
}

#[test]
fn test_default_template_renders_with_no_fields_set() {
    let out = RenderContext::new(DEFAULT_TEMPLATE).render().unwrap();
    assert!(out.contains("PROJECT_NUMBER         =  ()\n"));
    assert!(out.contains("INPUT                  =\n"));
}
