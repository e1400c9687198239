//! Core GraphNormalizer implementation

use crate::config::NormalizerConfig;
use crate::error::NormalizerError;
use crate::extract::extract;
use crate::hierarchy::assign_paths_and_depths;
use argmap_domain::ArgumentMap;
use argmap_xml::Document;
use tracing::{error, info};

/// The GraphNormalizer turns a validated document into a structured
/// [`ArgumentMap`] with a deterministic hierarchical labeling
///
/// The normalizer holds only read-only configuration; all per-call state
/// (including the placeholder-label counter) is created fresh inside
/// [`parse`](Self::parse), so one instance can serve concurrent callers
/// without label collisions.
pub struct GraphNormalizer {
    config: NormalizerConfig,
}

impl GraphNormalizer {
    /// Create a normalizer with the given configuration
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Create a normalizer with default configuration
    pub fn default_config() -> Self {
        Self::new(NormalizerConfig::default())
    }

    /// Parse raw XML text into a normalized map
    ///
    /// Fails only if the text is not well-formed XML; validation is the
    /// upstream stage's job, which is why it runs first in the pipeline.
    pub fn parse_str(&self, xml_text: &str) -> Result<ArgumentMap, NormalizerError> {
        let doc = Document::parse(xml_text).map_err(|e| {
            error!("document could not be parsed: {}", e);
            e
        })?;
        Ok(self.parse(&doc))
    }

    /// Normalize an already-parsed document
    ///
    /// Extraction drops malformed records with a logged warning; it never
    /// fails. On return every statement carries a path and depth.
    pub fn parse(&self, doc: &Document) -> ArgumentMap {
        let mut map = extract(doc, &self.config.namespace);
        assign_paths_and_depths(&mut map.statements, &map.relationships);
        info!(
            statements = map.statements.len(),
            relationships = map.relationships.len(),
            evidence = map.evidence.len(),
            "document normalized, paths and depths assigned"
        );
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argmap_domain::{convergence_group_id, RelationType, StatementType};

    fn normalizer() -> GraphNormalizer {
        GraphNormalizer::default_config()
    }

    #[test]
    fn test_parse_with_prefixed_namespace() {
        let xml = r#"
            <arg:argument_map xmlns:arg="http://example.com/argument_map">
                <arg:title>Test Map</arg:title>
                <arg:description>Test Description</arg:description>
                <arg:statements>
                    <arg:premise id="p1">Premise 1</arg:premise>
                    <arg:conclusion id="c1">Conclusion</arg:conclusion>
                </arg:statements>
                <arg:relationships>
                    <arg:support from="p1" to="c1" group_id="group1"/>
                </arg:relationships>
                <arg:evidence>
                    <arg:item id="e1">
                        <arg:title>Evidence Title</arg:title>
                        <arg:source_type>Article</arg:source_type>
                        <arg:credibility_rating>0.8</arg:credibility_rating>
                    </arg:item>
                </arg:evidence>
            </arg:argument_map>
        "#;
        let map = normalizer().parse_str(xml).unwrap();

        assert_eq!(map.title, "Test Map");
        assert_eq!(map.description, "Test Description");
        assert_eq!(map.source_xml, xml);

        assert_eq!(map.statements.len(), 2);
        let p1 = &map.statements[0];
        assert_eq!(p1.external_id, "p1");
        assert_eq!(p1.text, "Premise 1");
        assert_eq!(p1.statement_type, StatementType::Premise);
        assert_eq!(p1.path.as_deref(), Some("c1.p1"));
        assert_eq!(p1.depth, 1);
        let c1 = &map.statements[1];
        assert_eq!(c1.external_id, "c1");
        assert_eq!(c1.path.as_deref(), Some("c1"));
        assert_eq!(c1.depth, 0);

        assert_eq!(map.relationships.len(), 1);
        let rel = &map.relationships[0];
        assert_eq!(rel.from_id, "p1");
        assert_eq!(rel.to_id, "c1");
        assert_eq!(rel.relation_type, RelationType::Support);
        assert_eq!(rel.convergence_group_id, Some(convergence_group_id("group1")));

        assert_eq!(map.evidence.len(), 1);
        let ev = &map.evidence[0];
        assert_eq!(ev.external_id, "e1");
        assert_eq!(ev.title, "Evidence Title");
        assert_eq!(ev.source_type, "Article");
        assert_eq!(ev.source_name, "");
        assert_eq!(ev.url, "");
        assert_eq!(ev.description, "");
        assert_eq!(ev.credibility_rating, Some(0.8));
    }

    #[test]
    fn test_parse_with_default_namespace() {
        let xml = r#"
            <argument_map xmlns="http://example.com/argument_map">
                <title>Default NS Map</title>
                <statements>
                    <premise id="p1">Premise 1</premise>
                    <rebuttal id="r1">Rebuttal 1</rebuttal>
                </statements>
                <relationships>
                    <oppose from="r1" to="p1"/>
                </relationships>
            </argument_map>
        "#;
        let map = normalizer().parse_str(xml).unwrap();

        assert_eq!(map.title, "Default NS Map");
        assert_eq!(map.description, "");

        // oppose is not hierarchical, so both statements stand alone
        assert_eq!(map.statements.len(), 2);
        assert_eq!(map.statements[0].path.as_deref(), Some("p1"));
        assert_eq!(map.statements[0].depth, 0);
        assert_eq!(map.statements[1].external_id, "r1");
        assert_eq!(map.statements[1].statement_type, StatementType::Rebuttal);
        assert_eq!(map.statements[1].path.as_deref(), Some("r1"));
        assert_eq!(map.statements[1].depth, 0);

        assert_eq!(map.relationships.len(), 1);
        let rel = &map.relationships[0];
        assert_eq!(rel.relation_type, RelationType::Oppose);
        assert_eq!(rel.convergence_group_id, None);
        assert_eq!(rel.strength, None);
    }

    #[test]
    fn test_parse_without_namespace() {
        let xml = r#"
            <argument_map>
                <title>Bare Map</title>
                <statements>
                    <conclusion id="c1">Conclusion</conclusion>
                </statements>
            </argument_map>
        "#;
        let map = normalizer().parse_str(xml).unwrap();
        assert_eq!(map.title, "Bare Map");
        assert_eq!(map.statements.len(), 1);
    }

    #[test]
    fn test_missing_ids_are_dropped() {
        let xml = r#"
            <arg:argument_map xmlns:arg="http://example.com/argument_map">
                <arg:title>Missing IDs Test</arg:title>
                <arg:statements>
                    <arg:premise>Premise without id</arg:premise>
                    <arg:conclusion id="c1">Conclusion</arg:conclusion>
                </arg:statements>
                <arg:relationships>
                    <arg:support from="p1" to=""/>
                </arg:relationships>
            </arg:argument_map>
        "#;
        let map = normalizer().parse_str(xml).unwrap();

        assert_eq!(map.statements.len(), 1);
        assert_eq!(map.statements[0].external_id, "c1");
        assert_eq!(map.relationships.len(), 0);
    }

    #[test]
    fn test_invalid_credibility_rating_becomes_none() {
        let xml = r#"
            <arg:argument_map xmlns:arg="http://example.com/argument_map">
                <arg:title>Evidence Test</arg:title>
                <arg:evidence>
                    <arg:item id="e1">
                        <arg:title>Evidence Title</arg:title>
                        <arg:credibility_rating>invalid</arg:credibility_rating>
                    </arg:item>
                </arg:evidence>
            </arg:argument_map>
        "#;
        let map = normalizer().parse_str(xml).unwrap();

        assert_eq!(map.evidence.len(), 1);
        assert_eq!(map.evidence[0].title, "Evidence Title");
        assert_eq!(map.evidence[0].credibility_rating, None);
    }

    #[test]
    fn test_evidence_without_title_is_dropped() {
        let xml = r#"
            <argument_map xmlns="http://example.com/argument_map">
                <title>Evidence Test</title>
                <evidence>
                    <item id="e1"><title>Kept</title></item>
                    <item id="e2"><url>https://example.com</url></item>
                </evidence>
            </argument_map>
        "#;
        let map = normalizer().parse_str(xml).unwrap();
        assert_eq!(map.evidence.len(), 1);
        assert_eq!(map.evidence[0].external_id, "e1");
    }

    #[test]
    fn test_relationship_strength_is_parsed_best_effort() {
        let xml = r#"
            <argument_map xmlns="http://example.com/argument_map">
                <title>Strength</title>
                <statements>
                    <premise id="p1">P</premise>
                    <premise id="p2">Q</premise>
                    <conclusion id="c1">C</conclusion>
                </statements>
                <relationships>
                    <support from="p1" to="c1" strength="0.75"/>
                    <support from="p2" to="c1" strength="strong"/>
                </relationships>
            </argument_map>
        "#;
        let map = normalizer().parse_str(xml).unwrap();

        assert_eq!(map.relationships[0].strength, Some(0.75));
        // Unparsable strength degrades to None, the record survives
        assert_eq!(map.relationships[1].strength, None);
    }

    #[test]
    fn test_dangling_relationship_is_kept_but_ignored_by_hierarchy() {
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
        let map = normalizer().parse_str(xml).unwrap();

        // Tolerated at extraction, ignored at hierarchy build
        assert_eq!(map.relationships.len(), 1);
        assert_eq!(map.statements[0].path.as_deref(), Some("c1"));
        assert_eq!(map.statements[0].depth, 0);
    }

    #[test]
    fn test_convergence_group_is_stable_across_parse_calls() {
        let xml = r#"
            <argument_map xmlns="http://example.com/argument_map">
                <title>Stable</title>
                <statements>
                    <premise id="p1">P</premise>
                    <conclusion id="c1">C</conclusion>
                </statements>
                <relationships>
                    <support from="p1" to="c1" group_id="shared-group"/>
                </relationships>
            </argument_map>
        "#;
        let first = normalizer().parse_str(xml).unwrap();
        let second = GraphNormalizer::default_config().parse_str(xml).unwrap();

        assert!(first.relationships[0].convergence_group_id.is_some());
        assert_eq!(
            first.relationships[0].convergence_group_id,
            second.relationships[0].convergence_group_id
        );
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        let result = normalizer().parse_str("<argument_map><title>");
        assert!(matches!(result, Err(NormalizerError::Xml(_))));
    }
}
