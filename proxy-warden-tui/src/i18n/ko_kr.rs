//! 韩文翻译 (ko-KR)

use super::keys::{
    CommonTexts, ConfirmTexts, FormErrorTexts, HelpActionTexts, HelpTexts, HintTexts,
    ItemFormTexts, LogColumnTexts, LogDecisionTexts, LogsTexts, ModalTexts, NavTexts,
    ReasonTexts, RuleColumnTexts, RuleStatusTexts, RulesTexts, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Proxy Warden",
        loading: "불러오는 중...",
        yes: "예",
        no: "아니오",
        error: "오류",
    },

    hints: HintTexts {
        select: "선택",
        sort: "정렬",
        switch_panel: "패널 전환",
        open: "열기",
        add: "추가",
        edit: "수정",
        delete: "삭제",
        toggle: "사용/중지",
        reload: "새로고침",
        filter: "필터",
        filter_ip: "같은 IP",
        clear_filter: "해제",
        reason: "사유",
        help: "도움말",
        quit: "종료",
        done: "완료",
        cancel: "취소",
    },

    nav: NavTexts {
        title: "메뉴",
        cidrs: "CIDR 규칙",
        domains: "도메인 규칙",
        hides: "숨김 도메인",
        logs: "접속 로그",
    },

    rules: RulesTexts {
        columns: RuleColumnTexts {
            status: "상태",
            cidr: "CIDR",
            domain: "도메인",
            description: "설명",
            updated: "수정일",
            actions: "작업",
        },
        status: RuleStatusTexts {
            allow: "허용",
            deny: "차단",
            success: "성공",
        },
        inactive: "중지됨",
        enable: "사용",
        disable: "중지",
        empty: "등록된 규칙이 없습니다.",
        empty_hint: "Alt+a 를 눌러 추가하세요.",
    },

    logs: LogsTexts {
        columns: LogColumnTexts {
            decision: "결정",
            client_ip: "클라이언트 IP",
            url: "URL",
            time: "시간",
        },
        decision: LogDecisionTexts {
            allow: "허용",
            deny: "차단",
            unknown: "알 수 없음",
        },
        no_reason: "사유 없음",
        no_data: "데이터 없음",
        waiting: "첫 조회를 기다리는 중...",
        fetch_failed: "접속 로그를 가져오지 못했습니다. 마지막 결과를 표시합니다",
        filter_label: "필터",
        filter_ip_label: "클라이언트 IP",
        shown_count: "{total}건 중 {shown}건",
    },

    modal: ModalTexts {
        item_form: ItemFormTexts {
            add_title: "규칙 추가",
            edit_title: "규칙 수정",
            list_type: "유형",
            list_type_hint: " (←→ 전환)",
            cidr: "CIDR",
            domain: "도메인",
            description: "설명",
            cidr_placeholder: "예: 192.168.0.0/24",
            domain_placeholder: "예: example.com",
            submitting: "저장 중...",
            errors: FormErrorTexts {
                required: "필수 항목입니다",
                invalid_domain: "올바른 도메인이 아닙니다",
                invalid_cidr: "올바른 IP 주소, CIDR 또는 호스트 이름이 아닙니다",
                too_long: "최대 {max}자까지 입력할 수 있습니다",
            },
        },
        confirm: ConfirmTexts {
            title: "확인",
            delete_message: "\"{value}\" 을(를) 삭제하시겠습니까?",
            enable_message: "\"{value}\" 을(를) 사용하시겠습니까?",
            disable_message: "\"{value}\" 을(를) 중지하시겠습니까?",
        },
        reason: ReasonTexts {
            allow_title: "허용 사유",
            deny_title: "차단 사유",
            unknown_title: "사유",
            client_ip: "클라이언트 IP",
            url: "URL",
            method: "메서드",
            score: "점수",
            time: "시간",
        },
    },

    status_bar: StatusBarTexts {
        load_failed: "목록을 불러오지 못했습니다",
        create_failed: "규칙을 추가하지 못했습니다",
        update_failed: "규칙을 수정하지 못했습니다",
        delete_failed: "규칙을 삭제하지 못했습니다",
        toggle_failed: "규칙 상태를 변경하지 못했습니다",
        submit_failed: "서버가 요청을 거부했습니다",
        reloading: "새로고침 중...",
        language_changed: "언어: {value}",
        theme_changed: "테마: {value}",
        config_save_failed: "설정을 저장하지 못했습니다",
        theme_dark: "어두운 테마",
        theme_light: "밝은 테마",
    },

    help: HelpTexts {
        title: "도움말",
        global: "전역",
        rules: "규칙 페이지",
        logs: "접속 로그",
        close_hint: "Esc 를 눌러 도움말을 닫습니다",
        actions: HelpActionTexts {
            switch_panel: "패널 전환",
            move_up_down: "위/아래 이동",
            sort: "열 기준 정렬",
            language: "언어 전환",
            theme: "테마 전환",
            quit: "종료",
            add: "추가",
            edit: "수정",
            delete: "삭제",
            toggle: "사용/중지",
            reload: "새로고침",
            filter: "텍스트 필터",
            filter_ip: "이 클라이언트 IP 만",
            clear_filter: "필터 해제",
            reason: "사유 보기",
        },
    },
};
