//! Route-dependent navigation selection.
//!
//! DESIGN
//! ======
//! The current path is classified by an ordered rule table (first match
//! wins) into a [`NavVariant`]; each variant maps to a fixed link list.
//! Classification never fails: unknown paths fall back to `Home`.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Portfolio projects with their own detail page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Project {
    Petory,
    Linkup,
}

impl Project {
    pub const ALL: [Project; 2] = [Project::Petory, Project::Linkup];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Petory => "petory",
            Self::Linkup => "linkup",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Petory => "Petory",
            Self::Linkup => "LinkUp",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Self::Petory => "/portfolio/petory",
            Self::Linkup => "/portfolio/linkup",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.slug() == slug)
    }

    fn sibling(self) -> Self {
        match self {
            Self::Petory => Self::Linkup,
            Self::Linkup => Self::Petory,
        }
    }
}

/// Backend domains documented under `/domains/{slug}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    User,
    Board,
    Care,
    MissingPet,
    Location,
    Meetup,
    Chat,
}

impl Domain {
    pub const ALL: [Domain; 7] = [
        Domain::User,
        Domain::Board,
        Domain::Care,
        Domain::MissingPet,
        Domain::Location,
        Domain::Meetup,
        Domain::Chat,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Board => "board",
            Self::Care => "care",
            Self::MissingPet => "missing-pet",
            Self::Location => "location",
            Self::Meetup => "meetup",
            Self::Chat => "chat",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::User => "회원",
            Self::Board => "게시판",
            Self::Care => "펫케어",
            Self::MissingPet => "실종 제보",
            Self::Location => "위치 서비스",
            Self::Meetup => "모임",
            Self::Chat => "채팅",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Self::User => "/domains/user",
            Self::Board => "/domains/board",
            Self::Care => "/domains/care",
            Self::MissingPet => "/domains/missing-pet",
            Self::Location => "/domains/location",
            Self::Meetup => "/domains/meetup",
            Self::Chat => "/domains/chat",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.slug() == slug)
    }
}

/// Which link set the header renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavVariant {
    Home,
    PortfolioIndex,
    ProjectDetail(Project),
    /// Raw slug from the path; may not name a known [`Domain`].
    DomainPage(String),
    DefaultDocsDemo,
}

impl NavVariant {
    /// Known domain for a `DomainPage` variant.
    pub fn active_domain(&self) -> Option<Domain> {
        match self {
            Self::DomainPage(slug) => Domain::from_slug(slug),
            _ => None,
        }
    }

    /// The forward "포트폴리오" link is redundant on the portfolio pages
    /// themselves and is left off the home header.
    pub fn shows_portfolio_link(&self) -> bool {
        !matches!(self, Self::Home | Self::PortfolioIndex | Self::ProjectDetail(_))
    }
}

const DOMAIN_PREFIX: &str = "/domains/";

struct RouteRule {
    classify: fn(&str) -> Option<NavVariant>,
}

/// Evaluated top to bottom; the first rule returning `Some` wins.
const ROUTE_RULES: [RouteRule; 6] = [
    RouteRule {
        classify: |path| (path == "/").then_some(NavVariant::Home),
    },
    RouteRule {
        classify: |path| (path == "/portfolio").then_some(NavVariant::PortfolioIndex),
    },
    RouteRule {
        classify: |path| (path == "/portfolio/petory").then_some(NavVariant::ProjectDetail(Project::Petory)),
    },
    RouteRule {
        classify: |path| (path == "/portfolio/linkup").then_some(NavVariant::ProjectDetail(Project::Linkup)),
    },
    RouteRule {
        classify: |path| path.strip_prefix(DOMAIN_PREFIX).map(|rest| NavVariant::DomainPage(domain_slug(rest))),
    },
    RouteRule {
        classify: |path| matches!(path, "/demo" | "/docs").then_some(NavVariant::DefaultDocsDemo),
    },
];

/// Classify `path` into exactly one nav variant.
pub fn select_variant(path: &str) -> NavVariant {
    ROUTE_RULES
        .iter()
        .find_map(|rule| (rule.classify)(path))
        .unwrap_or(NavVariant::Home)
}

/// First path segment after `/domains/`.
fn domain_slug(rest: &str) -> String {
    rest.split(['/', '?', '#']).next().unwrap_or_default().to_owned()
}

/// Visual state of a rendered link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkState {
    #[default]
    Default,
    Active,
    Muted,
}

/// What a link is for; drives its styling slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Home,
    Back,
    Page,
    Domain,
}

/// One header link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub kind: LinkKind,
    pub state: LinkState,
}

impl NavLink {
    const fn new(label: &'static str, href: &'static str, kind: LinkKind) -> Self {
        Self {
            label,
            href,
            kind,
            state: LinkState::Default,
        }
    }
}

const HOME: NavLink = NavLink::new("홈", "/", LinkKind::Home);
const PORTFOLIO: NavLink = NavLink::new("포트폴리오", "/portfolio", LinkKind::Page);
const BACK_TO_PORTFOLIO: NavLink = NavLink::new("← 포트폴리오", "/portfolio", LinkKind::Back);
const BACK_TO_DEMO: NavLink = NavLink::new("← 데모", "/demo", LinkKind::Back);
const RESUME: NavLink = NavLink::new("이력서", "/resume", LinkKind::Page);
const DEMO: NavLink = NavLink::new("데모", "/demo", LinkKind::Page);
const DOCS: NavLink = NavLink::new("문서", "/docs", LinkKind::Page);
const PERFORMANCE: NavLink = NavLink::new("성능 개선", "/performance", LinkKind::Page);

/// Links for `variant`, with states resolved against `path`.
pub fn nav_links(variant: &NavVariant, path: &str) -> Vec<NavLink> {
    let mut links = vec![HOME];
    if variant.shows_portfolio_link() {
        links.push(PORTFOLIO);
    }

    match variant {
        NavVariant::Home => links.extend([RESUME, DEMO, DOCS]),
        NavVariant::PortfolioIndex => {
            links.push(RESUME);
            links.extend(Project::ALL.map(project_link));
        }
        NavVariant::ProjectDetail(project) => {
            links.push(BACK_TO_PORTFOLIO);
            links.push(project_link(*project));
            links.push(project_link(project.sibling()));
            if *project == Project::Petory {
                links.push(PERFORMANCE);
            }
        }
        NavVariant::DomainPage(slug) => {
            links.push(BACK_TO_DEMO);
            links.extend(Domain::ALL.map(|domain| {
                let mut link = NavLink::new(domain.label(), domain.href(), LinkKind::Domain);
                link.state = if domain.slug() == slug {
                    LinkState::Active
                } else {
                    LinkState::Muted
                };
                link
            }));
            return links;
        }
        NavVariant::DefaultDocsDemo => links.extend([DEMO, DOCS, PERFORMANCE]),
    }

    for link in &mut links {
        if link.kind != LinkKind::Back && link.href == path {
            link.state = LinkState::Active;
        }
    }
    links
}

fn project_link(project: Project) -> NavLink {
    NavLink::new(project.title(), project.href(), LinkKind::Page)
}
