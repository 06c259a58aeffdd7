//! 账户快照的输出渲染

use chrono::{DateTime, Utc};

use crate::model::config::OutputFormat;
use crate::monstercat::{Result, SelfAccount, payload};

/// 渲染选项
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub format: OutputFormat,
    /// 仅作用于摘要输出，JSON 始终原样输出
    pub mask_email: bool,
}

/// 按选项渲染账户快照
pub fn render(account: &SelfAccount, options: &RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::Json => payload::encode_pretty(account),
        OutputFormat::Summary => Ok(summary(account, options.mask_email)),
    }
}

/// 邮箱脱敏：`alice@example.com` → `a***@example.com`
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}

fn summary(account: &SelfAccount, mask: bool) -> String {
    let email = if mask {
        mask_email(account.email())
    } else {
        account.email().to_string()
    };

    let mut lines = vec![
        format!("用户名: {}", account.username()),
        format!("账户 ID: {}", account.id()),
        format!("邮箱: {} ({})", email, or_dash(account.email_verification_status())),
    ];
    if let Some(real_name) = account.real_name() {
        lines.push(format!("姓名: {}", real_name));
    }
    if let Some(place) = account.place_name_full().or(account.place_name()) {
        lines.push(format!("地区: {}", place));
    }
    lines.push(format!("注册时间: {}", format_time(account.created_at())));
    lines.push(format!("最近活跃: {}", or_dash(account.last_seen())));
    lines.push(format!("管理员: {}", yes_no(account.admin())));
    lines.push(format!(
        "Gold: {}{}",
        yes_no(account.has_gold()),
        if account.free_gold() { "（免费）" } else { "" }
    ));
    lines.push(format!("下载权限: {}", yes_no(account.has_download())));
    lines.push(format!("授权上限: {}", account.max_licenses()));
    lines.push(format!("两步验证: {}", or_dash(account.two_factor_state())));

    match account.subscription() {
        Some(subscription) => {
            lines.push(format!(
                "订阅: {} / {} ({})",
                or_dash(subscription.tier()),
                or_dash(subscription.status()),
                or_dash(subscription.provider())
            ));
            if let Some(end) = subscription.current_period_end() {
                let action = if subscription.cancel_at_period_end() {
                    "到期取消"
                } else {
                    "到期续费"
                };
                lines.push(format!("当前周期结束: {} ({})", format_time(end), action));
            }
        }
        None => lines.push("订阅: -".to_string()),
    }

    if let Some(settings) = account.settings() {
        lines.push(format!("首选格式: {}", or_dash(settings.preferred_format())));
        lines.push(format!("主播模式: {}", yes_no(settings.streamer_mode())));
    }

    lines.push(format!("邮件订阅项: {}", account.email_optins().len()));
    lines.join("\n")
}

fn format_time(time: DateTime<Utc>) -> String {
    if time.timestamp() == 0 {
        return "-".to_string();
    }
    time.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn yes_no(value: bool) -> &'static str {
    if value { "是" } else { "否" }
}
