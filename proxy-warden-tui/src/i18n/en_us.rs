//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, ConfirmTexts, FormErrorTexts, HelpActionTexts, HelpTexts, HintTexts,
    ItemFormTexts, LogColumnTexts, LogDecisionTexts, LogsTexts, ModalTexts, NavTexts,
    ReasonTexts, RuleColumnTexts, RuleStatusTexts, RulesTexts, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Proxy Warden",
        loading: "Loading...",
        yes: "Yes",
        no: "No",
        error: "Error",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        select: "Select",
        sort: "Sort",
        switch_panel: "Switch panel",
        open: "Open",
        add: "Add",
        edit: "Edit",
        delete: "Delete",
        toggle: "Enable/Disable",
        reload: "Reload",
        filter: "Filter",
        filter_ip: "Same IP",
        clear_filter: "Clear",
        reason: "Reason",
        help: "Help",
        quit: "Quit",
        done: "Done",
        cancel: "Cancel",
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "Menu",
        cidrs: "CIDR rules",
        domains: "Domain rules",
        hides: "Hidden domains",
        logs: "Access log",
    },

    // ========================================================================
    // 页面
    // ========================================================================
    rules: RulesTexts {
        columns: RuleColumnTexts {
            status: "Status",
            cidr: "CIDR",
            domain: "Domain",
            description: "Description",
            updated: "Updated",
            actions: "Actions",
        },
        status: RuleStatusTexts {
            allow: "Allow",
            deny: "Deny",
            success: "Success",
        },
        inactive: "disabled",
        enable: "Enable",
        disable: "Disable",
        empty: "No rules yet.",
        empty_hint: "Press Alt+a to add one.",
    },

    logs: LogsTexts {
        columns: LogColumnTexts {
            decision: "Decision",
            client_ip: "Client IP",
            url: "URL",
            time: "Time",
        },
        decision: LogDecisionTexts {
            allow: "Allow",
            deny: "Deny",
            unknown: "Unknown",
        },
        no_reason: "No reason given",
        no_data: "No data",
        waiting: "Waiting for the first poll...",
        fetch_failed: "Failed to fetch the access log; showing the last result",
        filter_label: "Filter",
        filter_ip_label: "Client IP",
        shown_count: "{shown} of {total}",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        item_form: ItemFormTexts {
            add_title: "Add rule",
            edit_title: "Edit rule",
            list_type: "Type",
            list_type_hint: " (←→ to switch)",
            cidr: "CIDR",
            domain: "Domain",
            description: "Description",
            cidr_placeholder: "e.g. 192.168.0.0/24",
            domain_placeholder: "e.g. example.com",
            submitting: "Saving...",
            errors: FormErrorTexts {
                required: "This field is required",
                invalid_domain: "Not a valid domain name",
                invalid_cidr: "Not a valid IP address, CIDR block or host name",
                too_long: "At most {max} characters",
            },
        },
        confirm: ConfirmTexts {
            title: "Confirm",
            delete_message: "Delete \"{value}\"?",
            enable_message: "Enable \"{value}\"?",
            disable_message: "Disable \"{value}\"?",
        },
        reason: ReasonTexts {
            allow_title: "Allow reason",
            deny_title: "Deny reason",
            unknown_title: "Reason",
            client_ip: "Client IP",
            url: "URL",
            method: "Method",
            score: "Score",
            time: "Time",
        },
    },

    // ========================================================================
    // 其他组件
    // ========================================================================
    status_bar: StatusBarTexts {
        load_failed: "Failed to load the list",
        create_failed: "Failed to add the rule",
        update_failed: "Failed to update the rule",
        delete_failed: "Failed to delete the rule",
        toggle_failed: "Failed to change the rule state",
        submit_failed: "The server rejected the request",
        reloading: "Reloading...",
        language_changed: "Language: {value}",
        theme_changed: "Theme: {value}",
        config_save_failed: "Could not save settings",
        theme_dark: "Dark",
        theme_light: "Light",
    },

    help: HelpTexts {
        title: "Help",
        global: "Global",
        rules: "Rule pages",
        logs: "Access log",
        close_hint: "Press Esc to close the help",
        actions: HelpActionTexts {
            switch_panel: "Switch panel",
            move_up_down: "Move up/down",
            sort: "Sort by column",
            language: "Switch language",
            theme: "Switch theme",
            quit: "Quit",
            add: "Add",
            edit: "Edit",
            delete: "Delete",
            toggle: "Enable/Disable",
            reload: "Reload",
            filter: "Filter text",
            filter_ip: "Only this client IP",
            clear_filter: "Clear filter",
            reason: "Show reason",
        },
    },
};
