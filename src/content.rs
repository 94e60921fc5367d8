//! Everything the site says. Components only lay this out.

use serde::Serialize;

/// One expandable entry of an accordion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub bullet_points: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechIcon {
    Emoji(&'static str),
    Image {
        src: &'static str,
        alt: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechSkill {
    pub name: &'static str,
    pub icon: TechIcon,
}

const fn emoji(name: &'static str, icon: &'static str) -> TechSkill {
    TechSkill {
        name,
        icon: TechIcon::Emoji(icon),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WorkProject {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub skills: &'static [TechSkill],
    pub highlights: &'static [&'static str],
    pub review: &'static str,
    pub link: Option<&'static str>,
    pub video: Option<&'static str>,
    pub metrics_images: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct SideProject {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub skills: &'static [TechSkill],
    pub highlights: &'static [&'static str],
    pub review: &'static str,
    pub ios_link: Option<&'static str>,
    pub android_link: Option<&'static str>,
    pub link: Option<&'static str>,
}

impl SideProject {
    pub fn has_store_links(&self) -> bool {
        self.ios_link.is_some() || self.android_link.is_some()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LearningProject {
    pub title: &'static str,
    pub description: &'static str,
    pub skills: &'static str,
    pub review: &'static str,
    pub link: Option<&'static str>,
    pub video: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct TimelineEntry {
    pub title: &'static str,
    pub period: &'static str,
    pub note: Option<&'static str>,
    /// Current or primary entries get the darker border.
    pub primary: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub emoji: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactLink {
    pub label: &'static str,
    pub display: &'static str,
    pub href: &'static str,
    pub external: bool,
}

/// schema.org `Person`, emitted as JSON-LD in the page head.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub job_title: &'static str,
    pub email: &'static str,
    pub same_as: &'static [&'static str],
    pub knows_about: Vec<&'static str>,
}

pub const NAME: &str = "박미현";
pub const EMAIL: &str = "akiyun10@gmail.com";
pub const GITHUB: &str = "https://github.com/bangmim";

pub fn person() -> Person {
    Person {
        context: "https://schema.org",
        kind: "Person",
        name: NAME,
        job_title: "Frontend Developer",
        email: EMAIL,
        same_as: &[GITHUB],
        knows_about: SKILLS.iter().map(|s| s.title).collect(),
    }
}

pub static KEYWORDS: [Card; 3] = [
    Card {
        emoji: "🤝",
        title: "협업",
        text: "디자이너, 기획자, 백엔드와 긴밀히 소통합니다",
    },
    Card {
        emoji: "🔧",
        title: "문제 해결",
        text: "사용자 불편을 파악하고 기술로 해결합니다",
    },
    Card {
        emoji: "📚",
        title: "성장",
        text: "코드 리뷰와 기술 공유로 함께 성장합니다",
    },
];

pub static INTRODUCTION: [&str; 4] = [
    "2023년 10월부터 약국 관리 모바일 앱을 개발하고 있습니다. 실시간 채팅, 커뮤니티, 약국관리 등 기능을 구현했으며, 비정상 종료율 감소 등 서비스 안정성을 높였습니다.",
    "디자이너, 기획자와 화면 흐름을 논의하고 백엔드 API를 연동합니다. Redux, Zustand, Context API 등 다양한 상태 관리 도구를 실무에 적용하며 프로젝트 특성에 맞는 기술을 선택합니다.",
    "한국방송통신대학교 컴퓨터과학과에서 실무와 이론을 병행하며 2026년 2월 졸업 예정입니다.",
    "코드 가독성과 재사용성을 중시하며, 리팩토링을 통해 코드 품질을 개선합니다.",
];

pub static EDUCATION: [TimelineEntry; 2] = [
    TimelineEntry {
        title: "한국방송통신대학교 컴퓨터과학과",
        period: "2026년 2월 졸업 예정",
        note: Some("컴퓨터과학 기초 이론 및 알고리즘, 자료구조 학습"),
        primary: true,
    },
    TimelineEntry {
        title: "코리아IT아카데미학원",
        period: "프론트엔드 개발 과정 수료",
        note: Some("HTML, CSS, JavaScript, React 기반 웹 개발"),
        primary: false,
    },
];

pub static CAREER: [TimelineEntry; 1] = [TimelineEntry {
    title: "React Native 앱 개발",
    period: "2023.10 ~ 현재 (재직 중)",
    note: Some("약국 관리 모바일 앱 개발 및 유지보수"),
    primary: true,
}];

pub static CERTIFICATIONS: [TimelineEntry; 1] = [TimelineEntry {
    title: "SQL개발자(SQLD자격)",
    period: "2023.04 취득",
    note: None,
    primary: true,
}];

pub static SKILLS: [PanelItem; 4] = [
    PanelItem {
        icon: "📱",
        title: "React Native 앱 개발",
        summary: "프로덕션 앱 개발 및 운영 (iOS/Android)",
        bullet_points: &[
            "TypeScript 도입으로 비정상 종료율 감소, 안정성 향상",
            "iOS/Android 크로스 플랫폼 개발 및 앱 스토어 배포",
            "본인인증, 커뮤니티, 실시간 채팅 등 핵심 기능 개발",
            "Firebase Analytics, Crashlytics로 성능 모니터링",
        ],
    },
    PanelItem {
        icon: "🔄",
        title: "상태 관리 아키텍처",
        summary: "Redux, Zustand, Context API 실무 적용",
        bullet_points: &[
            "Redux로 중복 모달 로직 단일화 → 개발 생산성 개선",
            "Zustand로 전역 네비게이션 구현 (iOS의 복잡한 제스처 이슈 해결)",
            "Context API로 테마, 인증 상태 관리 및 Provider 패턴 적용",
            "프로젝트 특성에 맞는 상태 관리 도구 선택",
        ],
    },
    PanelItem {
        icon: "💬",
        title: "실시간 통신 시스템",
        summary: "WebSocket 기반 채팅 및 알림 구현",
        bullet_points: &[
            "STOMP.js로 실시간 1:1 채팅 및 커뮤니티 댓글 알림 구현",
            "메시지 큐, 재전송 로직으로 네트워크 불안정 시 유실 방지",
            "Singleton 패턴으로 WebSocket 연결 상태 관리",
            "읽음 처리, 채팅방 목록 동기화로 사용자 경험 개선",
        ],
    },
    PanelItem {
        icon: "🎨",
        title: "UI/UX 개발 및 최적화",
        summary: "React 웹 개발 및 반응형 디자인 구현",
        bullet_points: &[
            "React 기반 사내 CMS(관리자 페이지) 신규 화면 개발",
            "TailwindCSS로 빠른 UI 개발 및 일관된 디자인 시스템 구축",
            "Animated API로 이질적인 로딩 UI 통일, 사용자 경험 향상",
            "Figma 기반 디자이너 협업 및 컴포넌트 재사용성 고려",
        ],
    },
];

/// Emoji and label of each development process step, in order.
pub static PROCESS_STEPS: [(&str, &str); 3] = [
    ("🔍", "문제 분석 및 요구사항 파악"),
    ("💡", "최적의 기술 스택 선택"),
    ("✨", "구현 및 지속적 개선"),
];

pub static WORK_PROJECTS: [WorkProject; 1] = [WorkProject {
    title: "\"약매니저\" 앱 프로젝트",
    subtitle: "React Native 앱 개발 및 유지보수 (2023.10 ~ 현재)",
    image: "https://bangmim.github.io/my-frontend-portfolio/img/pmh.jpg",
    description: "약매니저는 약국과 의료기관에서 의약품 계수·주문·재고 관리와 커뮤니티를 한 번에 사용할 수 있는 종합 업무 앱입니다. 2023년 10월부터 프론트엔드 개발과 유지보수를 맡아, 현재 약 4만 8천 명의 사용자가 사용하는 서비스를 운영하고 있습니다.",
    skills: &[
        emoji("React Native", "📱"),
        emoji("TypeScript", "🔷"),
        emoji("iOS / Android", "📲"),
        emoji("Redux", "🔄"),
        emoji("Context API", "⚙️"),
        emoji("Zustand", "🐻"),
        emoji("Stomp.js (WebSocket)", "💬"),
        emoji("Tailwind CSS", "🎨"),
        emoji("REST API", "🔌"),
        emoji("Firebase", "🔥"),
        TechSkill {
            name: "Figma",
            icon: TechIcon::Image {
                src: "https://www.vectorlogo.zone/logos/figma/figma-icon.svg",
                alt: "Figma",
            },
        },
    ],
    highlights: &[
        "실시간 채팅 · 커뮤니티 화면 개발 및 UX 개선",
        "Redux · Context API · Zustand, TypeScript를 활용한 상태 관리 및 리팩토링",
        "약매니저 사내 CMS(관리자 페이지) 신규 화면 개발",
        "릴리즈 대응과 운영 이슈 해결 지원",
    ],
    review: "입사 직후 본인인증 도입 및 대규모 리뉴얼이 있었으며, 커뮤니티 기능 개발과 함께 기존 코드를 분석했습니다.\n\n리뉴얼 초기 발생한 불안정 이슈를 겪으며 배포 전 품질 검증(QA)과 방어적 코딩의 중요성을 절감했습니다. 이를 위해 TypeScript 도입을 통한 타입 안정성 확보와 불필요한 의존성 정리에 집중했고, 그 결과 비정상 종료율을 줄이며 안정적인 서비스를 구축할 수 있었습니다.\n\n기능적으로는 중복된 모달을 Redux로 단일화해 DX를 개선했고, 이질적인 로딩 UI는 Animated 공통 컴포넌트로 통일했습니다. 단발성 이벤트 페이지는 WebView를 연동 및 동적 라우팅으로 유연성을 확보했으며, 복잡한 iOS 제스처는 Zustand 전역 네비게이션으로 해결했습니다.\n\n실시간 채팅의 유실 문제는 큐·재전송·Singleton 전략으로 신뢰성을 높였고, 사내 CMS는 TailwindCSS로 생산성을 높이고 Google OAuth와 Host 감지 기반 진입점을 적용해 보안과 접근 편의성을 동시에 강화했습니다.",
    link: None,
    video: None,
    metrics_images: &["/img/crashImage1.png", "/img/crashImage2.png"],
}];

pub static SIDE_PROJECTS: [SideProject; 2] = [
    SideProject {
        title: "뉴로스 - 뉴스 리딩 앱",
        subtitle: "2025.11 ~ 현재 · 스위프 팀 프로젝트 · 프론트엔드 리드 개발 (PM 1명, 백엔드 2명, 프론트엔드 2명, 디자이너 2명)",
        image: "/img/neurous-icon.png",
        description: "뉴로스는 사용자가 기사를 읽고 퀴즈를 풀며 학습하는 뉴스 리딩 앱입니다. 스위프를 통해 진행한 팀 프로젝트로, 프로젝트 초기 아이디어 기획과 앱 이름 선정을 주도했으며, 프론트엔드 리드 개발자로서 전반적인 앱 버전 관리, 레이아웃 관리, 서버 연동 등을 담당했습니다. iOS와 Android 모두 앱스토어에 정식 출시되었으며, 지속적인 버전 업데이트를 진행하고 있습니다.",
        skills: &[
            emoji("React Native", "📱"),
            emoji("TypeScript", "🔷"),
            emoji("iOS / Android", "📲"),
            emoji("Zustand", "🐻"),
            emoji("TanStack Query", "🔄"),
            emoji("React Navigation", "🧭"),
            emoji("Firebase Auth", "🔥"),
            emoji("소셜 로그인", "🔐"),
            emoji("Google Mobile Ads", "📢"),
            emoji("Axios", "🌐"),
        ],
        highlights: &[
            "프론트엔드 리드 개발자로서 앱 버전 관리 및 배포 프로세스 구축",
            "전역 상태 관리 시스템 설계 및 구현 (Zustand 기반 모달, 인증, 포인트 시스템)",
            "서버 API 연동 아키텍처 설계 및 TanStack Query를 활용한 데이터 페칭 최적화",
            "크로스 플랫폼 레이아웃 관리 및 iOS/Android 네이티브 모듈 연동",
            "소셜 로그인 (Google, Kakao, Naver, Apple) 통합 및 인증 플로우 구현",
            "온보딩 플로우, 미션 시스템, 캐릭터 레벨업, 퀴즈 시스템 등 핵심 기능 개발",
        ],
        review: "스위프를 통해 진행한 7명 규모의 팀 프로젝트에서 프로젝트 초기 아이디어 기획과 앱 이름 선정을 주도했으며, 프론트엔드 리드 개발자로서 기술적 의사결정과 코드 리뷰를 담당했습니다. 프로젝트 초기부터 앱스토어 배포까지 전 과정을 경험하며, 버전 관리 전략과 배포 프로세스를 수립했습니다.\n\n전역 상태 관리를 위해 Zustand를 도입하여 모달, 인증, 포인트, 경험치 등 다양한 상태를 효율적으로 관리했습니다. 특히 전역 모달 시스템을 구축하여 어디서든 일관된 UI/UX로 모달을 표시할 수 있도록 했고, TanStack Query를 활용해 서버 상태를 캐싱하고 자동 리패칭하는 구조를 설계했습니다.\n\n서버 연동 부분에서는 Axios 인스턴스를 중앙화하고, 타입 안전성을 보장하기 위해 TypeScript로 API 응답 타입을 엄격하게 정의했습니다. 또한 네비게이션 구조를 체계적으로 설계하여 온보딩, 메인 탭, 전체 화면 스택 등 복잡한 화면 전환을 효율적으로 관리했습니다.\n\n팀 내 React Native가 처음인 동료 개발자를 위해 매주 정기적으로 컨디션 체크를 진행했습니다. 기술적 어려움, 작업 진행 상황, 필요한 도움 등을 확인하며 멘토링 역할을 수행했습니다. 이를 통해 팀 전체의 개발 속도와 코드 품질을 유지할 수 있었습니다.\n\n디자이너의 요구사항에 따라 AsyncStorage를 활용하여 사용자 경험을 최적화했습니다. 온보딩 과정에서 사용자가 중간에 앱을 종료했다가 다시 진입할 경우, 이탈한 페이지부터 이어서 진행할 수 있도록 구현했습니다. 온보딩 진행 상태를 AsyncStorage에 저장하고, 앱 재시작 시 저장된 상태를 확인하여 적절한 화면으로 라우팅하는 로직을 설계하여 사용자 이탈을 줄이고 완료율을 높일 수 있었습니다.",
        ios_link: Some("https://apps.apple.com/kr/app/뉴로스-neurous/id6757225558?l=en-GB"),
        android_link: Some("https://play.google.com/store/apps/details?id=io.neurous.app"),
        link: None,
    },
    SideProject {
        title: "딱,가계부 - 가계부 관리 앱",
        subtitle: "2025.10 ~ 2026.01 · 1인 개발 (기획, 디자인, 개발, 배포)",
        image: "/img/moneylog-icon.png",
        description: "Supabase 클라우드 DB 기반 가계부 앱으로, Android 스토어에 정식 출시 완료했습니다.",
        skills: &[
            emoji("React Native", "📱"),
            emoji("TypeScript", "🔷"),
            emoji("Supabase", "🗄️"),
            emoji("Figma", "🎨"),
            emoji("GitHub Actions", "⚙️"),
            emoji("Google Mobile Ads", "📢"),
        ],
        highlights: &[
            "클라우드 기반 데이터 관리 시스템 전환 (SQLite → Supabase)",
            "GitHub Actions를 활용한 인프라 자동화",
            "안드로이드 최신 환경 대응",
            "효율적인 디자인 리소스 제작",
        ],
        review: "1인 개발 프로젝트로 기획부터 디자인, 개발, 배포까지 전 과정을 혼자 진행했습니다. 초기에는 SQLite로 시작했지만, 사용자가 기기를 변경하거나 앱을 삭제하면 데이터가 사라지는 문제를 인지하고 클라우드 기반 솔루션으로 전환하기로 결정했습니다.\n\nSupabase 도입 과정에서 무료 플랜의 제약사항을 직접 경험하게 되었습니다. 장기간 사용하지 않으면 인스턴스가 정지되는 문제를 발견했고, 이를 해결하기 위해 GitHub Actions를 활용한 자동화 스크립트를 구현했습니다. 매일 정해진 시간에 간단한 쿼리를 전송하여 인스턴스를 활성 상태로 유지하는 방식으로, 추가 비용 없이 문제를 해결할 수 있었습니다.\n\n안드로이드 최신 환경 대응에서 16KB 페이지 사이즈 호환성 문제로 앱이 빌드되지 않는 상황을 겪었습니다. React Native 공식 문서와 GitHub 이슈를 분석하며 해결책을 찾았고, 의존성 패키지 버전 업그레이드와 gradle 설정 수정을 통해 해결했습니다. 이 경험을 통해 최신 기술 스택의 호환성 문제를 스스로 해결하는 능력을 키울 수 있었습니다.\n\n디자인 리소스 제작에서는 개발자로서 디자인 도구에 익숙하지 않았지만, AI 도구를 활용하여 초안을 빠르게 생성하고 Figma로 정밀하게 가공하는 워크플로우를 구축했습니다. 스토어 등록에 필요한 다양한 해상도의 이미지를 체계적으로 관리하며, 개발 외 영역에서도 효율적으로 작업할 수 있는 방법을 배웠습니다.",
        ios_link: None,
        android_link: None,
        link: Some("https://play.google.com/store/apps/details?id=com.simplemoneylog&hl=ko"),
    },
];

pub static LEARNING_PROJECTS: [LearningProject; 4] = [
    LearningProject {
        title: "Movie Release Reminder - 영화 개봉일 리마인더 앱",
        description: "React Native 네이티브 모듈과 로컬 알림을 활용한 개인 사이드 프로젝트",
        skills: "React Native (TypeScript), TMDB API, React Navigation, TanStack Query, iOS/Android 캘린더 네이티브 모듈, 로컬 푸시 알림",
        review: "TMDB API를 활용해 최신 영화 정보를 조회하고, 관심 있는 영화의 개봉일을 기기 캘린더에 추가하거나 로컬 푸시 알림으로 받아볼 수 있는 앱입니다.\n\niOS(EventKit, Swift)와 Android(Calendar Provider, Kotlin) 네이티브 모듈을 직접 구현해 React Native와 브릿지로 연결했고, TanStack Query를 사용해 서버 상태를 캐싱·리패칭하며 API 호출 흐름을 정리했습니다.\n\n이 과정에서 플랫폼별 권한 처리, 캘린더/알림 스케줄링, 네이티브 모듈의 에러 처리 패턴을 학습하며 크로스 플랫폼 환경에서의 사용자 경험과 안정성을 함께 고려하는 방법을 익혔습니다.",
        link: None,
        video: Some("https://www.youtube.com/shorts/esW5zpTkxvs"),
    },
    LearningProject {
        title: "YouTube Music 홈 화면 클론",
        description: "React Native UI/애니메이션 학습 프로젝트",
        skills: "React Native (TypeScript), Animated API, react-native-linear-gradient, Font Awesome, Safe Area",
        review: "React Native UI/애니메이션 온라인 강의 예제를 기반으로 YouTube Music 홈 화면을 클론한 프로젝트입니다.\n\n스크롤 위치에 따라 상단 헤더가 자연스럽게 숨겨졌다가 다시 나타나는 애니메이션, 카테고리 탭이 상단에 고정(sticky)되면서 배경과 스타일이 바뀌는 효과, 미니 플레이어와 풀스크린 플레이어 간 전환 애니메이션을 구현하는 데 집중했습니다. 또한 그라데이션 배경, Safe Area 처리, 아이콘 시스템(Font Awesome) 적용, @faker-js/faker를 사용한 더미 데이터 생성 등 실제 서비스에 가까운 UI 구조를 설계하면서 React Native에서의 레이아웃과 애니메이션 패턴을 정리할 수 있었습니다.",
        link: Some("https://github.com/bangmim/react-native-youtubemusic-clone"),
        video: Some("https://www.youtube.com/shorts/vHIRL9L9Tlk"),
    },
    LearningProject {
        title: "ChatApp - 실시간 1:1 채팅 앱",
        description: "개인 사이드 프로젝트",
        skills: "React Native (TypeScript), Firebase Authentication, Firestore, Storage, React Navigation",
        review: "React Native + Firebase 온라인 강의를 기반으로, 실시간 1:1 채팅 앱을 따라 구현한 프로젝트입니다.\n\n텍스트, 이미지, 음성 메시지를 전송할 수 있는 실시간 1:1 채팅 앱입니다. Firebase Authentication · Firestore · Storage를 기반으로 별도 서버 없이 구현했으며, onSnapshot을 활용한 실시간 메시지 수신, 사용자별 마지막 읽은 시점을 기준으로 한 안 읽은 메시지 수 계산, 이미지/음성 업로드 및 권한 처리(카메라/갤러리/마이크) 등을 설계·구현했습니다. 이 과정에서 Firebase 보안 규칙 설계, 멀티미디어 파일 경로 설계, 안드로이드/iOS 권한 체계 차이에 대한 대응 등을 경험했습니다.",
        link: Some("https://github.com/bangmim/react-native-chatapp-firebase"),
        video: Some("https://youtu.be/cbqwafX-eoA"),
    },
    LearningProject {
        title: "자동차 사고 다발 지역 조회",
        description: "그룹 프로젝트 (4인, 조장)",
        skills: "React, Recharts, Kakao Map API, 공공데이터 API",
        review: "4인 그룹 프로젝트의 조장을 맡아 팀원들과 역할을 분담하고 일정을 관리했습니다. 공공데이터 포털의 교통사고 데이터를 활용하여 Recharts로 시각화하고, Kakao Map API를 연동하여 지역별 사고 다발 지역을 지도에 표시했습니다. 협업과 외부 API 연동 경험을 쌓을 수 있었습니다.",
        link: Some("https://bangmim.github.io/projectIT/"),
        video: None,
    },
];

pub static CONTACT_LINKS: [ContactLink; 2] = [
    ContactLink {
        label: "Email",
        display: EMAIL,
        href: "mailto:akiyun10@gmail.com",
        external: false,
    },
    ContactLink {
        label: "GitHub",
        display: "github.com/bangmim",
        href: "https://github.com/bangmim/my-frontend-portfolio",
        external: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_skill_panels_well_formed() {
        let titles = SKILLS.iter().map(|s| s.title).collect::<HashSet<_>>();
        assert_eq!(titles.len(), SKILLS.len(), "skill titles key the panels");
        for skill in SKILLS.iter() {
            assert!(!skill.title.is_empty());
            assert!(!skill.bullet_points.is_empty());
        }
    }

    #[test]
    fn test_side_project_links() {
        assert!(SIDE_PROJECTS[0].has_store_links());
        assert!(!SIDE_PROJECTS[1].has_store_links());
        assert!(SIDE_PROJECTS[1].link.is_some());
    }

    #[test]
    fn test_person_json_ld() {
        let value = serde_json::to_value(person()).expect("person should serialize");
        assert_eq!(value["@type"], "Person");
        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["jobTitle"], "Frontend Developer");
        assert_eq!(value["knowsAbout"].as_array().map(Vec::len), Some(SKILLS.len()));
    }
}
