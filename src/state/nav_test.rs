use super::*;

fn labels(links: &[NavLink]) -> Vec<&'static str> {
    links.iter().map(|l| l.label).collect()
}

fn links_for(path: &str) -> Vec<NavLink> {
    nav_links(&select_variant(path), path)
}

// =============================================================
// select_variant rule table
// =============================================================

#[test]
fn root_is_home() {
    assert_eq!(select_variant("/"), NavVariant::Home);
}

#[test]
fn portfolio_index() {
    assert_eq!(select_variant("/portfolio"), NavVariant::PortfolioIndex);
}

#[test]
fn project_detail_pages() {
    assert_eq!(select_variant("/portfolio/petory"), NavVariant::ProjectDetail(Project::Petory));
    assert_eq!(select_variant("/portfolio/linkup"), NavVariant::ProjectDetail(Project::Linkup));
}

#[test]
fn domain_pages_extract_slug() {
    assert_eq!(select_variant("/domains/board"), NavVariant::DomainPage("board".to_owned()));
    assert_eq!(
        select_variant("/domains/missing-pet"),
        NavVariant::DomainPage("missing-pet".to_owned())
    );
    assert_eq!(
        select_variant("/domains/chat/rooms"),
        NavVariant::DomainPage("chat".to_owned())
    );
}

#[test]
fn unknown_domain_slug_is_still_a_domain_page() {
    let variant = select_variant("/domains/payments");
    assert_eq!(variant, NavVariant::DomainPage("payments".to_owned()));
    assert_eq!(variant.active_domain(), None);
}

#[test]
fn demo_and_docs_share_default_variant() {
    assert_eq!(select_variant("/demo"), NavVariant::DefaultDocsDemo);
    assert_eq!(select_variant("/docs"), NavVariant::DefaultDocsDemo);
}

#[test]
fn unrecognised_paths_fall_back_to_home() {
    for path in ["", "/resume", "/performance", "/portfolio/", "/portfolio/other", "/domains", "/nope", "//"] {
        assert_eq!(select_variant(path), NavVariant::Home, "path {path:?}");
    }
}

// =============================================================
// Portfolio link suppression
// =============================================================

#[test]
fn portfolio_link_hidden_exactly_on_home_and_portfolio_pages() {
    assert!(!NavVariant::Home.shows_portfolio_link());
    assert!(!NavVariant::PortfolioIndex.shows_portfolio_link());
    assert!(!NavVariant::ProjectDetail(Project::Petory).shows_portfolio_link());
    assert!(!NavVariant::ProjectDetail(Project::Linkup).shows_portfolio_link());
    assert!(NavVariant::DomainPage("user".to_owned()).shows_portfolio_link());
    assert!(NavVariant::DefaultDocsDemo.shows_portfolio_link());
}

#[test]
fn home_link_always_renders_first() {
    for path in ["/", "/portfolio", "/portfolio/petory", "/domains/care", "/docs", "/resume"] {
        let links = links_for(path);
        assert_eq!(links[0].label, "홈", "path {path:?}");
        assert_eq!(links[0].kind, LinkKind::Home);
    }
}

#[test]
fn project_detail_has_back_link_but_no_forward_link() {
    let links = links_for("/portfolio/petory");
    let names = labels(&links);
    assert!(names.contains(&"← 포트폴리오"));
    assert!(!names.contains(&"포트폴리오"));
    let back = links.iter().find(|l| l.label == "← 포트폴리오").unwrap();
    assert_eq!(back.href, "/portfolio");
    assert_eq!(back.kind, LinkKind::Back);
}

#[test]
fn project_detail_marks_current_project_active() {
    let links = links_for("/portfolio/linkup");
    let current = links.iter().find(|l| l.href == "/portfolio/linkup").unwrap();
    let sibling = links.iter().find(|l| l.href == "/portfolio/petory").unwrap();
    assert_eq!(current.state, LinkState::Active);
    assert_eq!(sibling.state, LinkState::Default);
}

#[test]
fn back_link_is_never_marked_active() {
    let links = nav_links(&NavVariant::ProjectDetail(Project::Petory), "/portfolio");
    let back = links.iter().find(|l| l.kind == LinkKind::Back).unwrap();
    assert_eq!(back.state, LinkState::Default);
}

// =============================================================
// Domain links
// =============================================================

#[test]
fn domain_page_marks_only_matching_domain_active() {
    let links = links_for("/domains/board");
    let domains: Vec<_> = links.iter().filter(|l| l.kind == LinkKind::Domain).collect();
    assert_eq!(domains.len(), 7);
    for link in domains {
        if link.href == "/domains/board" {
            assert_eq!(link.state, LinkState::Active);
        } else {
            assert_eq!(link.state, LinkState::Muted, "{}", link.label);
        }
    }
}

#[test]
fn unknown_domain_mutes_every_domain_link() {
    let links = links_for("/domains/unknown");
    assert!(
        links
            .iter()
            .filter(|l| l.kind == LinkKind::Domain)
            .all(|l| l.state == LinkState::Muted)
    );
}

#[test]
fn domain_page_keeps_portfolio_and_demo_links() {
    let names = labels(&links_for("/domains/chat"));
    assert!(names.contains(&"포트폴리오"));
    assert!(names.contains(&"← 데모"));
}

#[test]
fn domain_slugs_round_trip_and_are_unique() {
    for domain in Domain::ALL {
        assert_eq!(Domain::from_slug(domain.slug()), Some(domain));
        assert_eq!(domain.href(), format!("/domains/{}", domain.slug()));
    }
    let mut slugs: Vec<_> = Domain::ALL.iter().map(|d| d.slug()).collect();
    slugs.sort_unstable();
    slugs.dedup();
    assert_eq!(slugs.len(), 7);
}

#[test]
fn project_slugs_round_trip() {
    for project in Project::ALL {
        assert_eq!(Project::from_slug(project.slug()), Some(project));
        assert_eq!(select_variant(project.href()), NavVariant::ProjectDetail(project));
    }
    assert_eq!(Project::from_slug("other"), None);
}

// =============================================================
// Other variants
// =============================================================

#[test]
fn home_variant_omits_portfolio_link() {
    let names = labels(&links_for("/"));
    assert!(!names.contains(&"포트폴리오"));
    assert_eq!(links_for("/")[0].state, LinkState::Active);
}

#[test]
fn docs_page_marks_docs_link_active() {
    let links = links_for("/docs");
    let docs = links.iter().find(|l| l.href == "/docs").unwrap();
    let demo = links.iter().find(|l| l.href == "/demo").unwrap();
    assert_eq!(docs.state, LinkState::Active);
    assert_eq!(demo.state, LinkState::Default);
}

#[test]
fn fallback_path_renders_home_links_without_active_marks() {
    let links = links_for("/resume");
    let home = links.iter().find(|l| l.kind == LinkKind::Home).unwrap();
    assert_eq!(home.state, LinkState::Default);
    let resume = links.iter().find(|l| l.href == "/resume").unwrap();
    assert_eq!(resume.state, LinkState::Active);
}
