//! 页面路由

use proxy_warden_core::types::ResourceKind;

use crate::i18n::t;

/// 页面枚举
///
/// 三个规则页共用同一套视图和控制器，只由 [`ResourceKind`] 区分。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// CIDR 规则
    #[default]
    Cidrs,
    /// 域名规则
    Domains,
    /// 隐藏域名
    Hides,
    /// 访问日志
    Logs,
}

impl Page {
    /// 导航栏顺序
    pub const ALL: [Page; 4] = [Page::Cidrs, Page::Domains, Page::Hides, Page::Logs];

    /// 规则页对应的资源；日志页为 `None`
    pub fn resource(self) -> Option<ResourceKind> {
        match self {
            Page::Cidrs => Some(ResourceKind::Cidrs),
            Page::Domains => Some(ResourceKind::Domains),
            Page::Hides => Some(ResourceKind::Hides),
            Page::Logs => None,
        }
    }

    /// 页面标题（当前语言）
    pub fn title(self) -> &'static str {
        let nav = &t().nav;
        match self {
            Page::Cidrs => nav.cidrs,
            Page::Domains => nav.domains,
            Page::Hides => nav.hides,
            Page::Logs => nav.logs,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Cidrs => "#",
            Page::Domains => "●",
            Page::Hides => "○",
            Page::Logs => "≡",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_pages_map_to_resources() {
        let kinds: Vec<_> = Page::ALL.iter().filter_map(|p| p.resource()).collect();
        assert_eq!(kinds, ResourceKind::ALL.to_vec());
        assert_eq!(Page::Logs.resource(), None);
    }
}
