//! Extraction of typed records from a parsed document
//!
//! One walk per entity category, in document order. Records missing a
//! required field are dropped with a logged warning and never abort the
//! parse; numeric fields are parsed best-effort with a `None` fallback.

use argmap_domain::{
    ArgumentMap, EvidenceRecord, RelationType, RelationshipEdge, StatementNode, StatementType,
};
use argmap_xml::Document;
use tracing::warn;

/// Extract title, description, statements, relationships, and evidence
///
/// Paths and depths are not assigned here; see [`crate::hierarchy`].
pub(crate) fn extract(doc: &Document, namespace: &str) -> ArgumentMap {
    let root = doc.root();
    let mut map = ArgumentMap {
        title: root.find_text(namespace, "title").unwrap_or_default().to_string(),
        description: root
            .find_text(namespace, "description")
            .unwrap_or_default()
            .to_string(),
        source_xml: doc.source().to_string(),
        ..ArgumentMap::default()
    };

    for statement_type in StatementType::ALL {
        for elem in root
            .descendants()
            .filter(|e| e.is(namespace, statement_type.as_str()))
        {
            let id = elem.attribute("id").unwrap_or("");
            if id.is_empty() {
                warn!(
                    element = elem.name(),
                    "statement element is missing an 'id' attribute; skipping"
                );
                continue;
            }
            map.statements
                .push(StatementNode::new(id, elem.text(), statement_type));
        }
    }

    for relation_type in [RelationType::Support, RelationType::Oppose] {
        for elem in root
            .descendants()
            .filter(|e| e.is(namespace, relation_type.as_str()))
        {
            let from = elem.attribute("from").unwrap_or("");
            let to = elem.attribute("to").unwrap_or("");
            if from.is_empty() || to.is_empty() {
                warn!(
                    element = elem.name(),
                    from, to, "relationship element is missing 'from' or 'to'; skipping"
                );
                continue;
            }
            let mut edge = RelationshipEdge::new(from, to, relation_type);
            if let Some(token) = elem.attribute("group_id") {
                if !token.is_empty() {
                    edge = edge.with_group_token(token);
                }
            }
            if let Some(raw) = elem.attribute("strength") {
                match raw.parse::<f64>() {
                    Ok(strength) => edge = edge.with_strength(strength),
                    Err(_) => warn!(
                        from, to,
                        "invalid float value for strength: '{}'", raw
                    ),
                }
            }
            map.relationships.push(edge);
        }
    }

    for container in root.descendants().filter(|e| e.is(namespace, "evidence")) {
        for item in container.children().iter().filter(|e| e.is(namespace, "item")) {
            let id = item.attribute("id").unwrap_or("");
            if id.is_empty() {
                warn!("evidence item is missing an 'id' attribute; skipping");
                continue;
            }
            let Some(title) = item.find_text(namespace, "title") else {
                warn!(id, "evidence item is missing a 'title'; skipping");
                continue;
            };
            let mut record = EvidenceRecord::new(id, title);
            record.source_type = item
                .find_text(namespace, "source_type")
                .unwrap_or_default()
                .to_string();
            record.source_name = item
                .find_text(namespace, "source_name")
                .unwrap_or_default()
                .to_string();
            record.url = item.find_text(namespace, "url").unwrap_or_default().to_string();
            record.description = item
                .find_text(namespace, "description")
                .unwrap_or_default()
                .to_string();
            if let Some(raw) = item.find_text(namespace, "credibility_rating") {
                match raw.parse::<f64>() {
                    Ok(rating) => record.credibility_rating = Some(rating),
                    Err(_) => warn!(
                        id,
                        "invalid float value for credibility_rating: '{}'", raw
                    ),
                }
            }
            map.evidence.push(record);
        }
    }

    map
}
