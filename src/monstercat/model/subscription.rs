//! 订阅状态

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_ext::{empty_string_as_none, flexible_datetime_opt, null_as_default};

/// 当前订阅状态
///
/// `provider`、`status`、`tier` 的取值由服务端决定，这里原样保留
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// 订阅 ID
    #[serde(default, alias = "Id", deserialize_with = "empty_string_as_none")]
    id: Option<String>,

    /// 计费渠道
    #[serde(default, alias = "Provider", deserialize_with = "null_as_default")]
    provider: String,

    #[serde(default, alias = "Status", deserialize_with = "null_as_default")]
    status: String,

    /// 订阅档位名称
    #[serde(default, alias = "Tier", deserialize_with = "null_as_default")]
    tier: String,

    #[serde(default, alias = "Active", deserialize_with = "null_as_default")]
    active: bool,

    /// 当前计费周期结束后是否取消
    #[serde(default, alias = "CancelAtPeriodEnd", deserialize_with = "null_as_default")]
    cancel_at_period_end: bool,

    #[serde(default, alias = "CurrentPeriodStart", deserialize_with = "flexible_datetime_opt")]
    current_period_start: Option<DateTime<Utc>>,

    #[serde(default, alias = "CurrentPeriodEnd", deserialize_with = "flexible_datetime_opt")]
    current_period_end: Option<DateTime<Utc>>,
}

impl Subscription {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn tier(&self) -> &str {
        &self.tier
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn cancel_at_period_end(&self) -> bool {
        self.cancel_at_period_end
    }

    pub fn current_period_start(&self) -> Option<DateTime<Utc>> {
        self.current_period_start
    }

    pub fn current_period_end(&self) -> Option<DateTime<Utc>> {
        self.current_period_end
    }
}
