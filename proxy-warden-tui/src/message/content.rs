//! 内容面板消息
//!
//! 规则页面和访问日志页面的操作

/// 内容面板消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// Enter：规则页编辑，日志页查看原因
    Open,
    /// 按列排序（从 0 开始）
    SortBy(usize),

    // ========== 规则操作 ==========
    /// 添加新规则
    Add,
    /// 编辑当前选中规则
    Edit,
    /// 删除当前选中规则
    Delete,
    /// 启用 / 停用当前选中规则
    Toggle,

    // ========== 日志过滤 ==========
    /// 开始编辑过滤文本
    StartFilter,
    /// 过滤文本输入
    FilterInput(char),
    /// 过滤文本删除字符
    FilterBackspace,
    /// 结束编辑（过滤保持生效）
    FinishFilter,
    /// 只显示与选中行相同客户端 IP 的日志
    FilterBySelectedIp,
    /// 清除过滤
    ClearFilter,
}
