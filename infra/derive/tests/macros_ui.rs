#[test]
fn folio_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/folio_error_pass.rs");
}

#[test]
fn content_model_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/content_model_pass.rs");
}
