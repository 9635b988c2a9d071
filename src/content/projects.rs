//! Portfolio project write-ups.

use super::ContentSection;
use crate::state::nav::Project;

/// Card and detail-page content for one project.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectWriteup {
    pub project: Project,
    pub summary: &'static str,
    pub period: &'static str,
    pub stack: &'static [&'static str],
    pub sections: &'static [ContentSection],
}

const PETORY_ARCHITECTURE: &str = "flowchart LR
    Client[Web Client] --> Nginx
    Nginx --> App[Spring Boot API]
    App --> MySQL[(MySQL)]
    App --> Redis[(Redis)]
    App --> S3[(S3 Images)]
    App -. STOMP .-> Client";

const PETORY_ERD: &str = "erDiagram
    USER ||--o{ BOARD : writes
    BOARD ||--o{ COMMENT : has
    USER ||--o{ PET : owns
    PET ||--o{ CARE_REQUEST : needs
    USER ||--o{ MISSING_REPORT : files
    MEETUP ||--o{ MEETUP_MEMBER : includes
    USER ||--o{ MEETUP_MEMBER : joins
    CHAT_ROOM ||--o{ CHAT_MESSAGE : contains";

const LINKUP_ARCHITECTURE: &str = "flowchart LR
    Client[Web Client] --> App[Spring Boot API]
    App --> MySQL[(MySQL)]
    App --> Redis[(Redis Cache)]
    App --> Batch[Recommendation Batch]
    Batch --> MySQL";

const LINKUP_JOIN_SEQUENCE: &str = "sequenceDiagram
    participant U as User
    participant A as API
    participant D as MySQL
    U->>A: POST /meetups/{id}/join
    A->>D: SELECT ... FOR UPDATE
    D-->>A: meetup row (locked)
    A->>D: INSERT member, UPDATE count
    A-->>U: 201 Created";

const PETORY_SECTIONS: [ContentSection; 4] = [
    ContentSection::new(
        "overview",
        "개요",
        "반려인이 게시판, 펫케어 요청, 실종 제보, 주변 모임을 한 곳에서 이용하는 커뮤니티 서비스입니다.\n\n\
         7개 도메인을 패키지 단위로 분리하고 도메인 간 의존은 ID 참조로만 연결했습니다.",
    ),
    ContentSection::new(
        "architecture",
        "아키텍처",
        "단일 Spring Boot 애플리케이션이 REST API와 STOMP 채팅을 함께 제공합니다.",
    )
    .with_diagram(PETORY_ARCHITECTURE),
    ContentSection::new(
        "erd",
        "데이터 모델",
        "도메인별 애그리거트 루트만 외부에 노출합니다.",
    )
    .with_diagram(PETORY_ERD),
    ContentSection::new(
        "troubleshooting",
        "트러블슈팅",
        "게시글 목록 조회에서 작성자·댓글 수 조회가 게시글마다 반복되는 **N+1 문제**를 발견했습니다.\n\n\
         fetch join과 `@BatchSize`를 조합해 쿼리 수를 고정했고, 측정 결과는 성능 개선 페이지에 정리했습니다.",
    ),
];

const LINKUP_SECTIONS: [ContentSection; 3] = [
    ContentSection::new(
        "overview",
        "개요",
        "관심사 태그를 기반으로 소규모 모임을 추천하고 참여 신청을 받는 서비스입니다.",
    ),
    ContentSection::new(
        "architecture",
        "아키텍처",
        "추천 목록은 배치로 미리 계산해 Redis에 캐시하고, API는 캐시를 우선 조회합니다.",
    )
    .with_diagram(LINKUP_ARCHITECTURE),
    ContentSection::new(
        "concurrency",
        "동시성 제어",
        "정원이 1명 남은 모임에 동시 신청이 몰리면 정원이 초과되는 문제가 있었습니다.\n\n\
         모임 행에 비관적 락을 걸어 신청을 직렬화했습니다.",
    )
    .with_diagram(LINKUP_JOIN_SEQUENCE),
];

pub static WRITEUPS: [ProjectWriteup; 2] = [
    ProjectWriteup {
        project: Project::Petory,
        summary: "반려동물 커뮤니티 플랫폼 · 7개 도메인 백엔드",
        period: "2024.03 – 2024.08",
        stack: &["Spring Boot", "JPA", "QueryDSL", "MySQL", "Redis", "STOMP", "AWS"],
        sections: &PETORY_SECTIONS,
    },
    ProjectWriteup {
        project: Project::Linkup,
        summary: "관심사 기반 모임 매칭 서비스",
        period: "2024.09 – 2024.12",
        stack: &["Spring Boot", "JPA", "MySQL", "Redis", "Spring Batch"],
        sections: &LINKUP_SECTIONS,
    },
];

/// Write-up for `project`.
pub fn writeup(project: Project) -> &'static ProjectWriteup {
    match project {
        Project::Petory => &WRITEUPS[0],
        Project::Linkup => &WRITEUPS[1],
    }
}
