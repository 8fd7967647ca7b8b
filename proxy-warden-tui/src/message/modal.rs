//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗（确认框视为“否”）
    Close,

    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// 切换选项：表单中的 allow/deny，确认框中的是/否
    SwitchOption,

    /// 确认/提交
    Confirm,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,
}
