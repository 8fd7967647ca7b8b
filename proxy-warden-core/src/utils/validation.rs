//! 表单校验
//!
//! 在发起网络请求之前拦截明显错误的输入。服务端仍会做自己的校验，
//! 这里只覆盖必填项、值的格式和描述长度。

use std::net::Ipv6Addr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::types::{ItemFields, ResourceKind};

/// 描述最大字符数
pub const MAX_DESCRIPTION_CHARS: usize = 255;

static DOMAIN_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,}$").ok()
});

static CIDR_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})(?:/(\d{1,2}))?$").ok()
});

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    ListType,
    Value,
    Description,
}

impl FormField {
    /// 按 Tab 顺序排列的字段（隐藏域名没有类型字段）
    #[must_use]
    pub fn order(kind: ResourceKind) -> &'static [FormField] {
        if kind.has_list_type() {
            &[Self::ListType, Self::Value, Self::Description]
        } else {
            &[Self::Value, Self::Description]
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::ListType => "list_type",
            Self::Value => "value",
            Self::Description => "description",
        })
    }
}

/// 校验失败原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// 必填项为空
    Required,
    /// 不是合法域名
    InvalidDomain,
    /// 不是合法 CIDR、IP 地址或主机名
    InvalidCidr,
    /// 超出长度限制
    TooLong { max: usize },
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => f.write_str("required"),
            Self::InvalidDomain => f.write_str("not a valid domain name"),
            Self::InvalidCidr => f.write_str("not a valid CIDR block"),
            Self::TooLong { max } => write!(f, "longer than {max} characters"),
        }
    }
}

/// 域名格式检查
pub fn is_valid_domain(value: &str) -> bool {
    DOMAIN_RE.as_ref().is_some_and(|re| re.is_match(value))
}

/// CIDR 格式检查
///
/// 接受三种写法：点分四段（可选 `/前缀`，每段 ≤ 255，前缀 ≤ 32）、
/// IPv6 地址（可选 `/前缀`，前缀 ≤ 128）、以及主机名形式的值。
pub fn is_valid_cidr(value: &str) -> bool {
    is_valid_ipv4_block(value) || is_valid_ipv6_block(value) || is_valid_domain(value)
}

fn is_valid_ipv4_block(value: &str) -> bool {
    let Some(caps) = CIDR_RE.as_ref().and_then(|re| re.captures(value)) else {
        return false;
    };
    let octets_ok = (1..=4).all(|i| {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<u16>().ok())
            .is_some_and(|n| n <= 255)
    });
    let prefix_ok = caps
        .get(5)
        .is_none_or(|m| m.as_str().parse::<u8>().is_ok_and(|p| p <= 32));
    octets_ok && prefix_ok
}

fn is_valid_ipv6_block(value: &str) -> bool {
    let (addr, prefix) = match value.split_once('/') {
        Some((addr, prefix)) => (addr, Some(prefix)),
        None => (value, None),
    };
    let prefix_ok = prefix.is_none_or(|p| {
        !p.is_empty() && p.len() <= 3 && p.parse::<u8>().is_ok_and(|p| p <= 128)
    });
    prefix_ok && addr.parse::<Ipv6Addr>().is_ok()
}

/// 去掉首尾空白后的表单
#[must_use]
pub fn normalized(fields: &ItemFields) -> ItemFields {
    ItemFields {
        list_type: fields.list_type,
        value: fields.value.trim().to_string(),
        description: fields.description.trim().to_string(),
    }
}

/// 校验表单；失败时返回出错字段，便于把焦点移回该字段
pub fn validate_fields(
    kind: ResourceKind,
    fields: &ItemFields,
) -> Result<(), (FormField, ValidationIssue)> {
    let value = fields.value.trim();
    if value.is_empty() {
        return Err((FormField::Value, ValidationIssue::Required));
    }

    let value_ok = match kind {
        ResourceKind::Cidrs => is_valid_cidr(value),
        ResourceKind::Domains | ResourceKind::Hides => is_valid_domain(value),
    };
    if !value_ok {
        let issue = if kind == ResourceKind::Cidrs {
            ValidationIssue::InvalidCidr
        } else {
            ValidationIssue::InvalidDomain
        };
        return Err((FormField::Value, issue));
    }

    if fields.description.trim().chars().count() > MAX_DESCRIPTION_CHARS {
        return Err((
            FormField::Description,
            ValidationIssue::TooLong {
                max: MAX_DESCRIPTION_CHARS,
            },
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ListType;

    fn fields(value: &str, description: &str) -> ItemFields {
        ItemFields {
            list_type: Some(ListType::Allow),
            value: value.to_string(),
            description: description.to_string(),
        }
    }

    // ---- domain ----

    #[test]
    fn accepts_common_domains() {
        assert!(is_valid_domain("example.com"));
        assert!(is_valid_domain("a.b-c.example.co"));
        assert!(is_valid_domain("xn--9n2bp8q.com"));
    }

    #[test]
    fn rejects_malformed_domains() {
        assert!(!is_valid_domain("localhost"));
        assert!(!is_valid_domain("-bad.com"));
        assert!(!is_valid_domain("bad-.com"));
        assert!(!is_valid_domain("exa mple.com"));
        assert!(!is_valid_domain("example.c"));
        assert!(!is_valid_domain("*.example.com"));
    }

    // ---- cidr ----

    #[test]
    fn accepts_cidrs_and_hosts() {
        assert!(is_valid_cidr("10.0.0.0/8"));
        assert!(is_valid_cidr("192.168.1.1"));
        assert!(is_valid_cidr("0.0.0.0/0"));
        assert!(is_valid_cidr("255.255.255.255/32"));
    }

    #[test]
    fn accepts_ipv6_blocks() {
        assert!(is_valid_cidr("2001:db8::/32"));
        assert!(is_valid_cidr("::1"));
        assert!(is_valid_cidr("fe80::1/128"));
    }

    #[test]
    fn accepts_hostname_shaped_values() {
        assert!(is_valid_cidr("example.com"));
        assert!(is_valid_cidr("gw.corp.example.net"));
    }

    #[test]
    fn rejects_bad_cidrs() {
        assert!(!is_valid_cidr("256.0.0.0/8"));
        assert!(!is_valid_cidr("10.0.0.0/33"));
        assert!(!is_valid_cidr("10.0.0/8"));
        assert!(!is_valid_cidr("10.0.0.0/"));
        assert!(!is_valid_cidr("2001:db8::/129"));
        assert!(!is_valid_cidr("2001:db8::/"));
        assert!(!is_valid_cidr("2001:db8:::1"));
        assert!(!is_valid_cidr("not a host"));
    }

    // ---- validate_fields ----

    #[test]
    fn empty_value_is_required() {
        assert_eq!(
            validate_fields(ResourceKind::Domains, &fields("   ", "")),
            Err((FormField::Value, ValidationIssue::Required))
        );
    }

    #[test]
    fn domain_resource_checks_domain_shape() {
        assert_eq!(
            validate_fields(ResourceKind::Hides, &fields("not a domain", "")),
            Err((FormField::Value, ValidationIssue::InvalidDomain))
        );
        assert!(validate_fields(ResourceKind::Hides, &fields("ads.example.com", "")).is_ok());
    }

    #[test]
    fn cidr_resource_checks_cidr_shape() {
        assert_eq!(
            validate_fields(ResourceKind::Cidrs, &fields("10.0.0.300", "")),
            Err((FormField::Value, ValidationIssue::InvalidCidr))
        );
        assert!(validate_fields(ResourceKind::Cidrs, &fields(" 10.0.0.0/8 ", "")).is_ok());
        assert!(validate_fields(ResourceKind::Cidrs, &fields("vpn.example.com", "")).is_ok());
        assert!(validate_fields(ResourceKind::Cidrs, &fields("2001:db8::/48", "")).is_ok());
    }

    #[test]
    fn description_limit_counts_chars() {
        let at_limit = "가".repeat(MAX_DESCRIPTION_CHARS);
        assert!(validate_fields(ResourceKind::Domains, &fields("example.com", &at_limit)).is_ok());

        let over = "a".repeat(MAX_DESCRIPTION_CHARS + 1);
        assert_eq!(
            validate_fields(ResourceKind::Domains, &fields("example.com", &over)),
            Err((
                FormField::Description,
                ValidationIssue::TooLong {
                    max: MAX_DESCRIPTION_CHARS
                }
            ))
        );
    }

    #[test]
    fn hidden_form_has_no_list_type_field() {
        assert_eq!(
            FormField::order(ResourceKind::Hides),
            &[FormField::Value, FormField::Description]
        );
        assert_eq!(FormField::order(ResourceKind::Cidrs).len(), 3);
    }
}
