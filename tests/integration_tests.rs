use indoc::indoc;
use pretty_assertions::assert_eq;
use unchurnable::{
    structure::{is_isomorphic, is_regular, vertex_connectivity},
    unchurnable_graphs, Classifier, Error, Graph, Graph6Reader, ReportWriter,
};

const ATLAS: &str = include_str!("fixtures/atlas6.g6");
const ATLAS_REPORT: &str = include_str!("fixtures/atlas6.expected");

fn report(graphs: &[Graph]) -> String {
    let mut out = Vec::new();
    let mut writer = ReportWriter::new(&mut out);
    for graph in graphs {
        writer.write_graph(graph).unwrap();
    }
    writer.finish().unwrap();
    String::from_utf8(out).unwrap()
}

fn atlas() -> Vec<Graph> {
    Graph6Reader::new(ATLAS.as_bytes())
        .collect::<Result<_, _>>()
        .unwrap()
}

#[test]
fn atlas_contains_every_graph_up_to_six_vertices() {
    assert_eq!(atlas().len(), 209);
}

#[test]
fn report_for_all_graphs_up_to_six_vertices() {
    let accepted = unchurnable_graphs(ATLAS).unwrap();
    assert_eq!(accepted.len(), 53);
    assert_eq!(report(&accepted), ATLAS_REPORT);
}

#[test]
fn parallel_filter_matches_sequential_report() {
    let graphs = Graph6Reader::new(ATLAS.as_bytes()).map(|graph| graph.map_err(Error::from));
    let accepted: Vec<Graph> = Classifier::default()
        .par_unchurnable(graphs, 16)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(report(&accepted), ATLAS_REPORT);
}

#[test]
fn reader_opens_files() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/atlas6.g6");
    let count = Graph6Reader::open(path).unwrap().count();
    assert_eq!(count, 209);
}

#[test]
fn k5_with_isolated_vertex_is_reported() {
    let accepted = unchurnable_graphs("E~{?\n").unwrap();
    let expected = indoc! {"
        Graph 1
        6 10
        0 1
        0 2
        0 3
        0 4
        1 2
        1 3
        1 4
        2 3
        2 4
        3 4
    "};
    assert_eq!(report(&accepted), expected);
}

#[test]
fn numbering_skips_discarded_graphs() {
    // P5, star K1,4, C5, K5 plus an isolated vertex.
    let input = indoc! {"
        DhC

        D?{
        Dhc
        E~{?
    "};
    let accepted = unchurnable_graphs(input).unwrap();
    let expected = indoc! {"
        Graph 1
        5 4
        0 4
        1 4
        2 4
        3 4
        Graph 2
        6 10
        0 1
        0 2
        0 3
        0 4
        1 2
        1 3
        1 4
        2 3
        2 4
        3 4
    "};
    assert_eq!(report(&accepted), expected);
}

#[test]
fn malformed_line_stops_the_run() {
    match unchurnable_graphs("D?{\n\n:Fa@x^\nE~{?\n") {
        Err(Error::Decode(err)) => assert_eq!(err.line, 3),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn complement_is_an_involution_on_the_atlas() {
    for graph in atlas() {
        let twice = graph.complement().complement();
        assert!(is_isomorphic(&twice, &graph));
        assert_eq!(twice, graph);
    }
}

#[test]
fn complete_graphs_are_in_y_and_in_x_or_y() {
    let classifier = Classifier::default();
    for graph in atlas().into_iter().filter(unchurnable::structure::is_complete) {
        assert!(classifier.in_y(&graph));
        assert!(classifier.in_x_or_y(&graph, &graph.complement()));
    }
}

#[test]
fn regular_graphs_are_never_unchurnable() {
    let classifier = Classifier::default();
    for graph in atlas().into_iter().filter(is_regular) {
        assert!(classifier.in_x_or_y(&graph, &graph.complement()));
        assert_eq!(classifier.is_unchurnable(&graph), Ok(false));
    }
}

#[test]
fn unchurnable_graphs_have_low_connectivity() {
    for graph in unchurnable_graphs(ATLAS).unwrap() {
        assert!(vertex_connectivity(&graph) < 3);
        assert!(vertex_connectivity(&graph.complement()) < 3);
        assert!(!is_regular(&graph));
    }
}
