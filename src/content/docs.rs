//! Documentation-file link directory.

use super::ContentSection;

/// A link to a project document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocLink {
    pub category: &'static str,
    pub title: &'static str,
    pub href: &'static str,
    pub description: &'static str,
}

pub static DOC_LINKS: [DocLink; 8] = [
    DocLink {
        category: "설계",
        title: "아키텍처 개요",
        href: "/docs/architecture.md",
        description: "서비스 구성과 배포 구조",
    },
    DocLink {
        category: "설계",
        title: "ERD",
        href: "/docs/erd.md",
        description: "도메인별 테이블과 연관 관계",
    },
    DocLink {
        category: "설계",
        title: "도메인 경계",
        href: "/docs/domain-boundaries.md",
        description: "7개 도메인의 책임과 의존 방향",
    },
    DocLink {
        category: "API",
        title: "API 명세",
        href: "/docs/api.md",
        description: "전체 REST 엔드포인트 목록",
    },
    DocLink {
        category: "API",
        title: "인증 흐름",
        href: "/docs/auth.md",
        description: "JWT 발급과 재발급 절차",
    },
    DocLink {
        category: "운영",
        title: "성능 측정 기록",
        href: "/docs/performance.md",
        description: "N+1 개선 전후 측정 원본",
    },
    DocLink {
        category: "운영",
        title: "배포 가이드",
        href: "/docs/deploy.md",
        description: "GitHub Actions와 EC2 배포 절차",
    },
    DocLink {
        category: "운영",
        title: "트러블슈팅 로그",
        href: "/docs/troubleshooting.md",
        description: "장애와 해결 과정 기록",
    },
];

/// Distinct categories in first-seen order.
pub fn categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for link in &DOC_LINKS {
        if !seen.contains(&link.category) {
            seen.push(link.category);
        }
    }
    seen
}

/// Links in `category`, in table order.
pub fn links_in(category: &str) -> Vec<DocLink> {
    DOC_LINKS.iter().filter(|l| l.category == category).copied().collect()
}

pub static SECTIONS: [ContentSection; 2] = [
    ContentSection::new(
        "guide",
        "문서 안내",
        "설계 문서와 운영 기록을 분류별로 모았습니다. 각 문서는 저장소의 `docs/` 디렉터리 원본입니다.",
    ),
    ContentSection::new("directory", "문서 목록", ""),
];
