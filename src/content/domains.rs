//! Per-domain documentation for the Petory backend.

use super::ContentSection;
use crate::state::nav::Domain;

/// One documented HTTP endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

const fn ep(method: &'static str, path: &'static str, description: &'static str) -> Endpoint {
    Endpoint {
        method,
        path,
        description,
    }
}

/// Documentation page for one domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DomainDoc {
    pub domain: Domain,
    pub summary: &'static str,
    pub endpoints: &'static [Endpoint],
    pub sections: &'static [ContentSection],
}

pub static DOMAIN_DOCS: [DomainDoc; 7] = [
    DomainDoc {
        domain: Domain::User,
        summary: "회원가입, 로그인, 프로필과 반려동물 등록을 담당합니다.",
        endpoints: &[
            ep("POST", "/api/users", "회원가입"),
            ep("POST", "/api/auth/login", "로그인 (JWT 발급)"),
            ep("GET", "/api/users/me", "내 프로필 조회"),
            ep("POST", "/api/users/me/pets", "반려동물 등록"),
        ],
        sections: &[
            ContentSection::new("model", "도메인 모델", "`User`가 여러 `Pet`을 소유합니다. 비밀번호는 BCrypt로 저장합니다."),
            ContentSection::new("auth", "인증", "Access Token은 헤더로, Refresh Token은 Redis에 저장해 재발급합니다.")
                .with_diagram(
                    "sequenceDiagram
    participant C as Client
    participant A as API
    participant R as Redis
    C->>A: POST /api/auth/login
    A->>R: SET refresh:{userId}
    A-->>C: access + refresh token",
                ),
        ],
    },
    DomainDoc {
        domain: Domain::Board,
        summary: "게시글, 댓글, 좋아요와 목록 조회를 담당합니다.",
        endpoints: &[
            ep("GET", "/api/boards", "게시글 목록 (페이지네이션)"),
            ep("POST", "/api/boards", "게시글 작성"),
            ep("GET", "/api/boards/{id}", "게시글 상세"),
            ep("POST", "/api/boards/{id}/comments", "댓글 작성"),
        ],
        sections: &[
            ContentSection::new("model", "도메인 모델", "`Board` 1 : N `Comment`, 좋아요는 `(board_id, user_id)` 유니크 제약으로 중복을 막습니다."),
            ContentSection::new(
                "n-plus-one",
                "목록 조회 최적화",
                "작성자는 fetch join, 댓글 수는 `@BatchSize(100)`으로 묶어 목록 한 페이지를 **쿼리 3회**로 고정했습니다.",
            ),
        ],
    },
    DomainDoc {
        domain: Domain::Care,
        summary: "펫시터 돌봄 요청과 지원, 매칭 상태를 관리합니다.",
        endpoints: &[
            ep("POST", "/api/care-requests", "돌봄 요청 등록"),
            ep("POST", "/api/care-requests/{id}/applications", "돌봄 지원"),
            ep("PATCH", "/api/care-requests/{id}/status", "매칭 상태 변경"),
        ],
        sections: &[ContentSection::new("states", "상태 전이", "요청은 OPEN → MATCHED → COMPLETED 순으로만 이동합니다.")
            .with_diagram(
                "stateDiagram-v2
    [*] --> OPEN
    OPEN --> MATCHED
    MATCHED --> COMPLETED
    OPEN --> CANCELLED
    COMPLETED --> [*]",
            )],
    },
    DomainDoc {
        domain: Domain::MissingPet,
        summary: "실종 제보 등록과 목격 댓글, 위치 기반 검색을 제공합니다.",
        endpoints: &[
            ep("POST", "/api/missing-reports", "실종 제보 등록"),
            ep("GET", "/api/missing-reports?lat=&lng=&radius=", "반경 내 제보 검색"),
            ep("POST", "/api/missing-reports/{id}/sightings", "목격 정보 등록"),
        ],
        sections: &[ContentSection::new("search", "반경 검색", "MySQL 공간 인덱스와 `ST_Distance_Sphere`로 반경 내 제보를 조회합니다.")],
    },
    DomainDoc {
        domain: Domain::Location,
        summary: "동물병원·산책로 등 위치 정보와 즐겨찾기를 제공합니다.",
        endpoints: &[
            ep("GET", "/api/locations?category=", "카테고리별 장소 목록"),
            ep("POST", "/api/locations/{id}/favorites", "즐겨찾기 추가"),
        ],
        sections: &[ContentSection::new("import", "데이터 적재", "공공데이터 CSV를 배치로 적재하고 좌표를 정규화합니다.")],
    },
    DomainDoc {
        domain: Domain::Meetup,
        summary: "산책 모임 생성, 참여 신청, 정원 관리를 담당합니다.",
        endpoints: &[
            ep("POST", "/api/meetups", "모임 생성"),
            ep("POST", "/api/meetups/{id}/join", "참여 신청"),
            ep("DELETE", "/api/meetups/{id}/join", "참여 취소"),
        ],
        sections: &[ContentSection::new("capacity", "정원 관리", "참여 신청은 모임 행 비관적 락 안에서 인원 수를 검증합니다.")],
    },
    DomainDoc {
        domain: Domain::Chat,
        summary: "모임·돌봄 매칭 이후의 1:1 및 그룹 채팅을 제공합니다.",
        endpoints: &[
            ep("GET", "/api/chat-rooms", "내 채팅방 목록"),
            ep("GET", "/api/chat-rooms/{id}/messages", "메시지 내역 (커서 기반)"),
            ep("WS", "/ws/chat", "STOMP 연결"),
        ],
        sections: &[ContentSection::new("delivery", "메시지 전달", "STOMP 브로커로 구독자에게 전달하고 메시지는 비동기로 저장합니다.")
            .with_diagram(
                "sequenceDiagram
    participant S as Sender
    participant B as STOMP Broker
    participant R as Receiver
    S->>B: SEND /pub/chat/{roomId}
    B-->>R: MESSAGE /sub/chat/{roomId}",
            )],
    },
];

/// Documentation for `domain`.
pub fn domain_doc(domain: Domain) -> &'static DomainDoc {
    let index = Domain::ALL.iter().position(|d| *d == domain).unwrap_or_default();
    &DOMAIN_DOCS[index]
}
