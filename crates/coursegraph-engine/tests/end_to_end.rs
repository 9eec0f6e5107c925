//! Full runs against a mock catalog

use coursegraph_catalog::{FetchError, MockCatalogBuilder};
use coursegraph_core::{Config, CourseIdentifier, DiagnosticCode};
use coursegraph_engine::{parse_course_list, render_edges, write_artifacts, GraphEdge, GraphPipeline};
use pretty_assertions::assert_eq;

fn id(department: &str, number: u32) -> CourseIdentifier {
    CourseIdentifier::new(department, number)
}

fn core_catalog() -> MockCatalogBuilder {
    MockCatalogBuilder::new()
        .with_course(
            "CS",
            225,
            "Data Structures",
            "Prerequisite: CS 173 and credit or concurrent registration in one of MATH 231, MATH 241.",
        )
        .with_course("CS", 173, "Discrete Structures", "Prerequisite: One of CS 124, CS 125, ECE 220.")
        .with_course("MATH", 231, "Calculus II", "Prerequisite: MATH 221.")
}

#[tokio::test]
async fn core_sequence_yields_expected_graph() {
    let catalog = core_catalog().build();
    let list = parse_course_list("CS 225\nCS 173\nMATH 231\n", "courses.txt");

    let outcome = GraphPipeline::new(&catalog, &Config::default()).run(&list).await;

    assert_eq!(
        outcome.graph.edges(),
        &[
            GraphEdge { from: id("CS", 173), to: id("CS", 225), corequisite: false },
            GraphEdge { from: id("MATH", 231), to: id("CS", 225), corequisite: true },
        ]
    );

    let node_ids: Vec<String> = outcome.graph.nodes().iter().map(|n| n.id()).collect();
    assert_eq!(node_ids, vec!["CS225", "CS173", "MATH231"]);

    assert_eq!(
        render_edges(&outcome.graph),
        "export const edges = [[\"CS173\",\"CS225\", false],[\"MATH231\",\"CS225\", true]];\n"
    );

    // MATH241, CS124, CS125, ECE220 and MATH221 are not listed
    assert_eq!(outcome.report.count(DiagnosticCode::EdgeOutOfScope), 5);
    assert!(!outcome.report.has_warnings());
}

#[tokio::test]
async fn cross_referenced_course_takes_target_prerequisites() {
    let catalog = core_catalog()
        .with_course("ECE", 374, "", "See CS 374.")
        .with_course("CS", 374, "Algorithms & Models of Computation", "Prerequisite: CS 225.")
        .build();
    let list = parse_course_list("ECE 374\nCS 225\n", "courses.txt");

    let outcome = GraphPipeline::new(&catalog, &Config::default()).run(&list).await;

    assert_eq!(
        outcome.graph.edges(),
        &[GraphEdge { from: id("CS", 225), to: id("ECE", 374), corequisite: false }]
    );
    assert_eq!(
        outcome.graph.nodes()[0].label,
        "ECE374 (Algorithms & Models of Computation)"
    );
}

#[tokio::test]
async fn courses_citing_a_cross_listed_target_link_to_the_listed_alias() {
    let catalog = MockCatalogBuilder::new()
        .with_course("ECE", 374, "", "See CS 374.")
        .with_course("CS", 374, "Algorithms & Models of Computation", "Prerequisite: CS 225.")
        .with_course("CS", 473, "Algorithms", "Prerequisite: CS 374.")
        .with_course("CS", 225, "Data Structures", "")
        .build();
    let list = parse_course_list("ECE 374\nCS 473\nCS 225\n", "courses.txt");

    let outcome = GraphPipeline::new(&catalog, &Config::default()).run(&list).await;

    assert_eq!(
        render_edges(&outcome.graph),
        "export const edges = [[\"CS225\",\"ECE374\", false],[\"ECE374\",\"CS473\", false]];\n"
    );
    assert_eq!(outcome.report.count(DiagnosticCode::EdgeOutOfScope), 0);
}

#[tokio::test]
async fn failed_fetches_drop_the_course_only() {
    let catalog = core_catalog()
        .with_error("MATH", 231, FetchError::HttpStatus { status: 503, url: "http://catalog/MATH/231.xml".into() })
        .build();
    let list = parse_course_list("CS 225\nCS 173\nMATH 231\n", "courses.txt");

    let outcome = GraphPipeline::new(&catalog, &Config::default()).run(&list).await;

    let node_ids: Vec<String> = outcome.graph.nodes().iter().map(|n| n.id()).collect();
    assert_eq!(node_ids, vec!["CS225", "CS173"]);
    assert_eq!(outcome.graph.edges().len(), 1);
    assert_eq!(outcome.report.count(DiagnosticCode::FetchFailed), 1);
    assert!(outcome.report.has_warnings());
}

#[tokio::test]
async fn annotations_and_bad_lines_flow_through() {
    let catalog = core_catalog().build();
    let list = parse_course_list("CS 225 (honors)\n\nElectives:\nCS 225\nCS 173\n", "courses.txt");

    let outcome = GraphPipeline::new(&catalog, &Config::default()).run(&list).await;

    assert_eq!(outcome.graph.nodes()[0].label, "CS225 (Data Structures) (honors)");
    assert_eq!(outcome.report.count(DiagnosticCode::InputLineUnparseable), 1);
    assert_eq!(outcome.report.count(DiagnosticCode::DuplicateInputCourse), 1);
    assert_eq!(outcome.report.summary.courses_requested, 2);
}

#[tokio::test]
async fn artifacts_are_written_after_a_run() {
    let catalog = core_catalog().build();
    let list = parse_course_list("CS 225\nCS 173\nMATH 231\n", "courses.txt");
    let outcome = GraphPipeline::new(&catalog, &Config::default()).run(&list).await;

    let dir = tempfile::tempdir().unwrap();
    let edges_path = dir.path().join("edges.ts");
    let nodes_path = dir.path().join("nodes.ts");
    write_artifacts(&outcome.graph, &edges_path, &nodes_path).unwrap();

    let nodes = std::fs::read_to_string(&nodes_path).unwrap();
    assert!(nodes.contains("{id: \"CS173\", label: \"CS173 (Discrete Structures)\", dept: \"CS\", num: \"173\"}"));
    assert!(nodes.contains("{id: \"MATH231\", label: \"MATH231 (Calculus II)\", dept: \"MATH\", num: \"231\"}"));
}
