//! Performance write-up: measured results from the Petory backend.
//!
//! These figures were measured against that backend and are reproduced
//! here as text.

use super::ContentSection;

/// One before/after measurement row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Measurement {
    pub api: &'static str,
    pub queries_before: &'static str,
    pub queries_after: &'static str,
    pub latency_before: &'static str,
    pub latency_after: &'static str,
}

pub static MEASUREMENTS: [Measurement; 4] = [
    Measurement {
        api: "GET /api/boards",
        queries_before: "41",
        queries_after: "3",
        latency_before: "1,240ms",
        latency_after: "86ms",
    },
    Measurement {
        api: "GET /api/meetups",
        queries_before: "22",
        queries_after: "2",
        latency_before: "610ms",
        latency_after: "54ms",
    },
    Measurement {
        api: "GET /api/care-requests",
        queries_before: "31",
        queries_after: "4",
        latency_before: "880ms",
        latency_after: "97ms",
    },
    Measurement {
        api: "GET /api/chat-rooms",
        queries_before: "18",
        queries_after: "2",
        latency_before: "430ms",
        latency_after: "41ms",
    },
];

pub static SECTIONS: [ContentSection; 4] = [
    ContentSection::new(
        "method",
        "측정 방법",
        "로컬 MySQL 8에 게시글 10만 건, 회원 1만 명을 적재하고 각 API를 100회 호출한 평균을 기록했습니다.\n\n\
         쿼리 수는 Hibernate `statistics`로 요청당 실행된 SQL을 셌습니다.",
    ),
    ContentSection::new(
        "n-plus-one",
        "N+1 원인",
        "목록 엔티티의 `@ManyToOne(fetch = LAZY)` 연관을 뷰 변환 중에 접근하면서 행마다 추가 쿼리가 실행됐습니다.",
    )
    .with_diagram(
        "sequenceDiagram
    participant S as Service
    participant DB as MySQL
    S->>DB: SELECT boards LIMIT 20
    loop each board
        S->>DB: SELECT user WHERE id = ?
        S->>DB: SELECT count(*) FROM comment
    end",
    ),
    ContentSection::new(
        "results",
        "결과",
        "fetch join으로 단건 연관을, `@BatchSize`로 컬렉션을 묶어 페이지 크기와 무관하게 쿼리 수를 고정했습니다.",
    ),
    ContentSection::new(
        "lessons",
        "정리",
        "- 목록 API는 **쿼리 수를 테스트로 고정**합니다.\n- 컬렉션 fetch join과 페이지네이션은 함께 쓰지 않습니다.",
    ),
];
