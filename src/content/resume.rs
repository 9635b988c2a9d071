//! Resume page content.

use super::ContentSection;

pub static SECTIONS: [ContentSection; 5] = [
    ContentSection::new(
        "profile",
        "소개",
        "JPA 기반 서비스에서 **쿼리 수와 응답 시간을 측정 가능한 지표로** 다루는 백엔드 개발자입니다.\n\n\
         반려동물 커뮤니티 서비스 Petory와 모임 매칭 서비스 LinkUp을 설계부터 배포까지 혼자 진행했습니다.",
    ),
    ContentSection::new(
        "skills",
        "기술 스택",
        "| 분류 | 기술 |\n|---|---|\n\
         | Language | Java 17, Kotlin |\n\
         | Framework | Spring Boot 3, Spring Security, Spring Data JPA, QueryDSL |\n\
         | Data | MySQL 8, Redis |\n\
         | Infra | AWS EC2, RDS, S3, GitHub Actions, Docker |\n",
    ),
    ContentSection::new(
        "experience",
        "프로젝트 경험",
        "- **Petory**: 게시판·펫케어·실종 제보·위치·모임·채팅 7개 도메인 설계, N+1 쿼리 제거로 목록 API 응답 시간 단축\n\
         - **LinkUp**: 관심사 기반 모임 추천, 동시 참여 신청 시 정원 초과를 막는 비관적 락 적용",
    ),
    ContentSection::new(
        "education",
        "교육",
        "- 컴퓨터공학 학사\n- 백엔드 부트캠프 수료 (Spring 트랙)",
    ),
    ContentSection::new(
        "contact",
        "연락처",
        "- GitHub: `github.com/folio-dev`\n- Email: `dev@folio.example`",
    ),
];
