use super::test_harness::{TEST_SHARE_URL, ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_topics_and_share_url() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Compilers"), "missing header in {html}");
    assert!(html.contains("Context-Free Grammar"), "missing topic in {html}");
    assert!(html.contains("Syntax Tree"), "missing topic in {html}");
    assert!(html.contains("Ambiguity"), "missing topic in {html}");
    assert!(html.contains(TEST_SHARE_URL), "missing share url in {html}");
    assert!(html.contains("Copy"), "missing copy button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn grammar_view_smoke_renders_rules_and_quiz() {
    let mut harness = setup_view_harness(ViewKind::Grammar);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Question 1 of 10"), "missing quiz progress in {html}");
    assert!(html.contains("Show Explanation"), "missing reveal button in {html}");
    assert!(html.contains("E + T"), "missing production rule in {html}");
    assert!(html.contains("Formal definition:"), "missing definition card in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn trees_view_smoke_renders_expression_and_toggle() {
    let mut harness = setup_view_harness(ViewKind::Trees);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("(a + b) * c"), "missing expression in {html}");
    assert!(html.contains("AST"), "missing ast toggle in {html}");
    assert!(html.contains("CST"), "missing cst toggle in {html}");
    assert!(html.contains("Question 1 of 10"), "missing quiz in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn ambiguity_view_smoke_renders_cases_and_walkthrough() {
    let mut harness = setup_view_harness(ViewKind::Ambiguity);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("id + id * id"), "missing first case in {html}");
    assert!(html.contains("Case 2"), "missing case selector in {html}");
    assert!(html.contains("Dangling Else"), "missing walkthrough in {html}");
    assert!(html.contains("Step-by-step execution"), "missing trace panel in {html}");
}
