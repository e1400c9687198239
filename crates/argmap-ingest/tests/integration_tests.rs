//! End-to-end tests for the ingest pipeline

use argmap_domain::traits::MapStore;
use argmap_ingest::{IngestError, IngestPipeline, MemoryStore};
use argmap_normalizer::GraphNormalizer;
use argmap_validator::SchemaValidator;

fn pipeline() -> IngestPipeline<MemoryStore> {
    IngestPipeline::new(
        SchemaValidator::builtin().unwrap(),
        GraphNormalizer::default_config(),
        MemoryStore::new(),
    )
}

const VALID: &str = r#"
    <arg:argument_map xmlns:arg="http://example.com/argument_map">
        <arg:title>Carbon Tax</arg:title>
        <arg:description>Should a carbon tax be introduced?</arg:description>
        <arg:statements>
            <arg:premise id="p1">Emissions fall when carbon is priced</arg:premise>
            <arg:premise id="p2">Revenue can offset regressive effects</arg:premise>
            <arg:conclusion id="c1">A carbon tax should be introduced</arg:conclusion>
            <arg:rebuttal id="r1">Border leakage erodes the effect</arg:rebuttal>
        </arg:statements>
        <arg:relationships>
            <arg:support from="p1" to="c1" group_id="econ"/>
            <arg:support from="p2" to="c1" group_id="econ" strength="0.6"/>
            <arg:oppose from="r1" to="c1"/>
        </arg:relationships>
        <arg:evidence>
            <arg:item id="e1">
                <arg:title>Price elasticity study</arg:title>
                <arg:source_type>study</arg:source_type>
                <arg:credibility_rating>0.9</arg:credibility_rating>
            </arg:item>
        </arg:evidence>
    </arg:argument_map>
"#;

#[test]
fn test_valid_document_is_stored() {
    let mut pipeline = pipeline();
    let outcome = pipeline.ingest(VALID).unwrap();

    assert_eq!(outcome.title, "Carbon Tax");
    assert_eq!(outcome.statement_count, 4);
    assert_eq!(outcome.relationship_count, 3);
    assert_eq!(outcome.evidence_count, 1);
    assert_eq!(pipeline.store().len(), 1);
}

#[test]
fn test_stored_map_has_complete_labeling() {
    let mut pipeline = pipeline();
    let outcome = pipeline.ingest(VALID).unwrap();
    let map = pipeline.store().get_map(outcome.map_id).unwrap().unwrap();

    // Every statement carries a path and a non-negative depth
    assert!(map.statements.iter().all(|s| s.path.is_some()));

    assert_eq!(map.statement("c1").unwrap().path.as_deref(), Some("c1"));
    assert_eq!(map.statement("c1").unwrap().depth, 0);
    assert_eq!(map.statement("p1").unwrap().path.as_deref(), Some("c1.p1"));
    assert_eq!(map.statement("p2").unwrap().path.as_deref(), Some("c1.p2"));
    // The oppose edge gives r1 no parent
    assert_eq!(map.statement("r1").unwrap().path.as_deref(), Some("r1"));
    assert_eq!(map.statement("r1").unwrap().depth, 0);

    // Both converging premises share the same group id
    assert_eq!(
        map.relationships[0].convergence_group_id,
        map.relationships[1].convergence_group_id,
    );
    assert_eq!(map.relationships[1].strength, Some(0.6));
    assert_eq!(map.source_xml, VALID);
}

#[test]
fn test_invalid_document_is_rejected_with_all_diagnostics() {
    let xml = r#"
        <argument_map xmlns="http://example.com/argument_map">
            <statements>
                <premise>No id here</premise>
            </statements>
        </argument_map>
    "#;
    let mut pipeline = pipeline();
    let err = pipeline.ingest(xml).unwrap_err();

    let diagnostics = err.diagnostics().expect("rejection carries diagnostics");
    // Missing title and missing premise id at minimum
    assert!(diagnostics.len() >= 2, "diagnostics: {:?}", diagnostics);
    assert!(pipeline.store().is_empty());
}

#[test]
fn test_syntax_error_is_rejected_with_one_diagnostic() {
    let mut pipeline = pipeline();
    let err = pipeline.ingest("<argument_map><title>Oops</argument_map>").unwrap_err();

    match err {
        IngestError::Rejected(result) => {
            assert_eq!(result.diagnostics.len(), 1);
            assert!(result.diagnostics[0].contains("XML syntax error"));
        }
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[test]
fn test_dangling_relationship_is_caught_at_validation() {
    let xml = r#"
        <argument_map xmlns="http://example.com/argument_map">
            <title>Dangling</title>
            <statements>
                <conclusion id="c1">C</conclusion>
            </statements>
            <relationships>
                <support from="ghost" to="c1"/>
            </relationships>
        </argument_map>
    "#;
    let mut pipeline = pipeline();
    let err = pipeline.ingest(xml).unwrap_err();

    let diagnostics = err.diagnostics().unwrap();
    assert!(diagnostics.iter().any(|d| d.contains("unknown reference 'ghost'")));
}
