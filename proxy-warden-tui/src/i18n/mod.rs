//! 国际化（i18n）模块
//!
//! 使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。
//! 支持英语和韩语（服务端部署环境的语言）。

use std::sync::atomic::{AtomicUsize, Ordering};

use proxy_warden_core::table::{LogLabels, StatusLabels};

mod en_us;
pub mod keys;
mod ko_kr;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 英语（美国）
    #[default]
    EnUs,
    /// 韩语（韩国）
    KoKr,
}

impl Language {
    /// 获取语言的显示名称（使用该语言本身的文字）
    pub fn display_name(self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::KoKr => "한국어",
        }
    }

    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::KoKr => "ko-KR",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "ko-KR" | "ko" => Some(Language::KoKr),
            _ => None,
        }
    }

    /// 获取下一个语言（用于循环切换）
    #[must_use]
    pub fn next(self) -> Language {
        match self {
            Language::EnUs => Language::KoKr,
            Language::KoKr => Language::EnUs,
        }
    }
}

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EnUs

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &ko_kr::TRANSLATIONS,
        _ => &en_us::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EnUs => 0,
        Language::KoKr => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

/// 获取当前语言
pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::KoKr,
        _ => Language::EnUs,
    }
}

/// 填充 `{name}` 占位符
pub fn fill(template: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{name}}}"), value)
    })
}

/// 当前语言的规则状态标签
pub fn status_labels() -> StatusLabels {
    let status = &t().rules.status;
    StatusLabels {
        allow: status.allow.to_string(),
        deny: status.deny.to_string(),
        success: status.success.to_string(),
    }
}

/// 当前语言的日志标签
pub fn log_labels() -> LogLabels {
    let logs = &t().logs;
    LogLabels {
        allow: logs.decision.allow.to_string(),
        deny: logs.decision.deny.to_string(),
        unknown: logs.decision.unknown.to_string(),
        no_reason: logs.no_reason.to_string(),
    }
}
