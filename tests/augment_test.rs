use pretty_assertions::assert_eq;

use pathmark::edge_ast::{EdgeEnd, NodeCategory};
use pathmark::{Augmenter, HighlightPath, PrefixClassifier};

const SCENARIO: &str = "S1-->|go|D1\nD1-->|yes|E1\nD1-->|no|S1\n";

fn directive_lines(output: &str, source: &str) -> Vec<String> {
    output[source.len()..]
        .lines()
        .map(|l| l.trim().to_string())
        .collect()
}

// =============================================================================
// Edge indexing
// =============================================================================

#[test]
fn scenario_sequence_table() {
    let index = Augmenter::new().index(SCENARIO);
    let table: Vec<(String, usize)> = index
        .edges
        .edges()
        .iter()
        .map(|e| (e.key(), e.index))
        .collect();
    assert_eq!(
        table,
        vec![
            ("S1->go->D1".to_string(), 0),
            ("D1->yes->E1".to_string(), 1),
            ("D1->no->S1".to_string(), 2),
        ]
    );
    assert_eq!(index.categories.start, vec!["S1"]);
    assert_eq!(index.categories.decision, vec!["D1"]);
    assert_eq!(index.categories.ending, vec!["E1"]);
}

#[test]
fn index_counts_only_labeled_edges() {
    let source = "\
graph TD
    A[Start] --> B
    B -->|one| C
    C --- D
    C -->|two| D
";
    let index = Augmenter::new().index(source);
    assert_eq!(index.edges.len(), 2);
    assert_eq!(index.edges.edges()[0].key(), "B->one->C");
    assert_eq!(index.edges.edges()[1].index, 1);
}

#[test]
fn terminal_decoration_stripped() {
    let source = "graph TD\n    D1 -->|yes| E1((Done))\n";
    let out = pathmark::augment(source, &["D1 -> yes -> E1"]);
    assert!(out.contains("    class E1 ending;\n"));
    assert!(out.contains("    linkStyle 0 "));
}

#[test]
fn bracket_shapes_are_part_of_the_id() {
    let source = "S1[Begin] -->|go| D1\n";
    let out = pathmark::augment(source, &["S1 -> go -> D1"]);
    assert!(out.contains("class S1[Begin] start;"));
    assert!(!out.contains("linkStyle"));
}

// =============================================================================
// Categories
// =============================================================================

#[test]
fn prefix_classification() {
    let source = "S1-->|a|X9\nD2-->|b|E3\nX1-->|c|Y1\n";
    let out = pathmark::augment(source, &[]);
    assert!(out.contains("class S1 start;"));
    assert!(out.contains("class D2 decision;"));
    assert!(out.contains("class E3 ending;"));
    assert!(!out.contains("class X1"));
    assert!(!out.contains("class X9"));
    assert!(!out.contains("class Y1"));
}

#[test]
fn categories_are_deduplicated() {
    let out = pathmark::augment("S1-->|a|E1\nS1-->|b|E1\nS1-->|c|E2\n", &[]);
    assert_eq!(out.matches("class S1 start;").count(), 1);
    assert_eq!(out.matches("class E1 ending;").count(), 1);
    assert_eq!(out.matches("class E2 ending;").count(), 1);
}

#[test]
fn category_order_start_decision_ending() {
    let source = "D1-->|a|E1\nS1-->|b|D1\n";
    let lines = directive_lines(&pathmark::augment(source, &[]), source);
    assert_eq!(
        &lines[..6],
        &[
            "class S1 start;",
            "class D1 decision;",
            "class E1 ending;",
            "classDef start fill:#a8e6cf,stroke:#2b7a4b,stroke-width:2px;",
            "classDef decision fill:#d0e8f2,stroke:#4682b4,stroke-width:2px;",
            "classDef ending fill:#f9a,stroke:#333,stroke-width:2px;",
        ]
    );
}

#[test]
fn injected_classifier() {
    let augmenter = Augmenter::new().with_classifier(|id: &str, end: EdgeEnd| match end {
        EdgeEnd::From if id.starts_with("start_") => Some(NodeCategory::Start),
        EdgeEnd::To if id.starts_with("end_") => Some(NodeCategory::Ending),
        _ => None,
    });
    let out = augmenter.augment("start_a-->|go|end_b\nS1-->|x|E1\n", &[]);
    assert!(out.text.contains("class start_a start;"));
    assert!(out.text.contains("class end_b ending;"));
    assert!(!out.text.contains("class S1 start;"));
}

#[test]
fn custom_prefixes() {
    let classifier = PrefixClassifier::new('B', 'Q', 'F').unwrap();
    let augmenter = Augmenter::new().with_classifier(classifier);
    let out = augmenter.augment("B1-->|x|Q1\nQ1-->|y|F1\n", &[]);
    assert!(out.text.contains("class B1 start;"));
    assert!(out.text.contains("class Q1 decision;"));
    assert!(out.text.contains("class F1 ending;"));
}

#[test]
fn categories_stay_disjoint() {
    let augmenter = Augmenter::new().with_classifier(|id: &str, end: EdgeEnd| match end {
        EdgeEnd::From if id.starts_with('N') => Some(NodeCategory::Start),
        EdgeEnd::To if id.starts_with('N') => Some(NodeCategory::Ending),
        _ => None,
    });
    let out = augmenter.augment("N1-->|x|N2\nN2-->|y|N1\n", &[]);
    assert_eq!(out.index.categories.start, vec!["N1"]);
    assert_eq!(out.index.categories.ending, vec!["N2"]);
    assert!(!out.text.contains("class N1 ending;"));
    assert!(!out.text.contains("class N2 start;"));
}

#[test]
fn overlapping_prefixes_cannot_be_configured() {
    let err = PrefixClassifier::new('N', 'D', 'N').unwrap_err();
    assert!(err.to_string().contains("prefixes must differ"), "got: {err}");
}

// =============================================================================
// Path highlighting
// =============================================================================

#[test]
fn scenario_path() {
    let out = pathmark::augment(SCENARIO, &["S1 -> go -> D1 -> yes -> E1"]);
    let lines = directive_lines(&out, SCENARIO);
    let highlights: Vec<&str> = lines[6..].iter().map(String::as_str).collect();
    assert_eq!(
        highlights,
        vec![
            "class S1 highlightedNode;",
            "class D1 highlightedNode;",
            "linkStyle 0 stroke:#3366FF,stroke-width:5px;",
            "class D1 highlightedNode;",
            "class E1 highlightedNode;",
            "linkStyle 1 stroke:#3366FF,stroke-width:5px;",
            "classDef highlightedNode stroke:#3366FF,stroke-width:5px;",
        ]
    );
}

#[test]
fn empty_path_list() {
    let out = pathmark::augment(SCENARIO, &[]);
    assert!(!out.contains("linkStyle"));
    assert!(!out.contains("highlightedNode;"));
    assert_eq!(out.matches("classDef highlightedNode").count(), 1);
    assert!(out.ends_with("    classDef highlightedNode stroke:#3366FF,stroke-width:5px;\n"));
}

#[test]
fn leftmost_match_on_duplicates() {
    let source = "A-->|a|B\nB-->|b|C\nX-->|x|Y\nC-->|c|D\nD-->|d|E\nX-->|x|Y\n";
    let augmented = Augmenter::new().augment(source, &[HighlightPath::parse("X -> x -> Y")]);
    assert_eq!(augmented.index.edges.len(), 6);
    assert_eq!(augmented.index.edges.edges()[5].index, 5);
    assert!(augmented.text.contains("linkStyle 2 "));
    assert!(!augmented.text.contains("linkStyle 5 "));
}

#[test]
fn omission_on_miss() {
    let out = pathmark::augment(SCENARIO, &["S1 -> stop -> E1"]);
    assert!(out.contains("class S1 highlightedNode;"));
    assert!(out.contains("class E1 highlightedNode;"));
    assert!(!out.contains("linkStyle"));
}

#[test]
fn partial_path_resolution() {
    let augmented = Augmenter::new().augment(
        SCENARIO,
        &[HighlightPath::parse("S1 -> go -> D1 -> maybe -> E1 -> back -> S1")],
    );
    assert_eq!(augmented.text.matches("linkStyle").count(), 1);
    assert_eq!(augmented.text.matches("highlightedNode;").count(), 6);
    let keys: Vec<&str> = augmented.unresolved.iter().map(|u| u.key.as_str()).collect();
    assert_eq!(keys, vec!["D1->maybe->E1", "E1->back->S1"]);
}

#[test]
fn multiple_paths_in_order() {
    let out = pathmark::augment(SCENARIO, &["D1 -> no -> S1", "S1 -> go -> D1"]);
    let first = out.find("linkStyle 2 ").unwrap();
    let second = out.find("linkStyle 0 ").unwrap();
    assert!(first < second, "paths emitted in input order");
}

#[test]
fn malformed_paths_are_tolerated() {
    let out = pathmark::augment(SCENARIO, &["", "S1", "S1 -> go", "S1 -> go -> D1 -> yes"]);
    assert_eq!(out.matches("linkStyle").count(), 1);
    assert_eq!(out.matches("class S1 highlightedNode;").count(), 1);
    assert_eq!(out.matches("class E1 highlightedNode;").count(), 0);
}

#[test]
fn label_whitespace_must_match_exactly() {
    let source = "A -->| go | B\n";
    assert!(!pathmark::augment(source, &["A -> go -> B"]).contains("linkStyle"));
    assert!(pathmark::augment(source, &["A ->  go  -> B"]).contains("linkStyle 0 "));
}

#[test]
fn repeated_invocation_is_identical() {
    let paths = ["S1 -> go -> D1 -> yes -> E1", "D1 -> no -> S1"];
    assert_eq!(
        pathmark::augment(SCENARIO, &paths),
        pathmark::augment(SCENARIO, &paths)
    );
}
