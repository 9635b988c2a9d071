use std::collections::HashSet;

use super::*;
use crate::state::nav::{Domain, Project};

fn assert_unique_ids(sections: &[ContentSection], page: &str) {
    let mut seen = HashSet::new();
    for section in sections {
        assert!(!section.anchor.id.is_empty(), "{page}: empty anchor id");
        assert!(seen.insert(section.anchor.id), "{page}: duplicate anchor {}", section.anchor.id);
    }
}

// =============================================================
// Section anchors
// =============================================================

#[test]
fn anchors_preserve_document_order() {
    let ids: Vec<_> = anchors(&resume::SECTIONS).iter().map(|a| a.id).collect();
    assert_eq!(ids, vec!["profile", "skills", "experience", "education", "contact"]);
}

#[test]
fn every_page_has_unique_anchor_ids() {
    assert_unique_ids(&resume::SECTIONS, "resume");
    assert_unique_ids(&performance::SECTIONS, "performance");
    assert_unique_ids(&docs::SECTIONS, "docs");
    for project in Project::ALL {
        assert_unique_ids(projects::writeup(project).sections, project.slug());
    }
    for domain in Domain::ALL {
        assert_unique_ids(domains::domain_doc(domain).sections, domain.slug());
    }
}

#[test]
fn with_diagram_keeps_anchor() {
    let section = ContentSection::new("a", "A", "body").with_diagram("flowchart LR\n  A --> B");
    assert_eq!(section.anchor, SectionAnchor::new("a", "A"));
    assert!(section.diagram.is_some());
}

// =============================================================
// Coverage of routed content
// =============================================================

#[test]
fn every_project_has_a_writeup() {
    for project in Project::ALL {
        let writeup = projects::writeup(project);
        assert_eq!(writeup.project, project);
        assert!(!writeup.sections.is_empty());
        assert!(!writeup.stack.is_empty());
    }
}

#[test]
fn every_domain_has_documentation() {
    for domain in Domain::ALL {
        let doc = domains::domain_doc(domain);
        assert_eq!(doc.domain, domain);
        assert!(!doc.endpoints.is_empty(), "{} has no endpoints", domain.slug());
    }
}

#[test]
fn doc_links_group_by_category() {
    let categories = docs::categories();
    assert_eq!(categories, vec!["설계", "API", "운영"]);
    let total: usize = categories.iter().map(|c| docs::links_in(c).len()).sum();
    assert_eq!(total, docs::DOC_LINKS.len());
    assert!(docs::links_in("없음").is_empty());
}

#[test]
fn measurements_cover_distinct_apis() {
    let apis: HashSet<_> = performance::MEASUREMENTS.iter().map(|m| m.api).collect();
    assert_eq!(apis.len(), performance::MEASUREMENTS.len());
}
