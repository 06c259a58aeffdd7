//! 当前账户数据模型
//!
//! 包含"获取当前用户"接口的响应类型定义。
//! 该结构只是服务端状态的被动投影：每次解码时构建，之后只读。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::serde_ext::{empty_string_as_none, flexible_datetime, non_empty_string, null_as_default};
use super::{Settings, Subscription};

/// 当前登录用户的账户快照
///
/// 字段名同时接受 camelCase 与 PascalCase，序列化时统一输出 camelCase。
/// `id`、`username`、`email` 为必填，其余字段缺失或为 `null` 时取默认值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfAccount {
    /// 账户 ID
    #[serde(alias = "Id", deserialize_with = "non_empty_string")]
    id: String,

    /// 用户名
    #[serde(alias = "Username")]
    username: String,

    /// 用户邮箱
    #[serde(alias = "Email")]
    email: String,

    /// 平台管理员标记
    #[serde(default, alias = "Admin", deserialize_with = "null_as_default")]
    admin: bool,

    /// 用户填写的生日，未填写时为 Unix 纪元
    #[serde(default, alias = "Birthday", deserialize_with = "flexible_datetime")]
    birthday: DateTime<Utc>,

    /// 账户创建时间
    #[serde(default, alias = "CreatedAt", deserialize_with = "flexible_datetime")]
    created_at: DateTime<Utc>,

    /// 关联的 Discord 用户 ID
    #[serde(
        default,
        alias = "DiscordId",
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    discord_id: Option<String>,

    /// 邮件订阅选项，元素结构不受约束
    #[serde(default, alias = "EmailOptins", deserialize_with = "null_as_default")]
    email_optins: Vec<Value>,

    /// 邮箱验证状态（取值不固定）
    #[serde(default, alias = "EmailVerificationStatus", deserialize_with = "null_as_default")]
    email_verification_status: String,

    #[serde(default, alias = "FreeGold", deserialize_with = "null_as_default")]
    free_gold: bool,

    #[serde(
        default,
        alias = "GoogleMapsPlaceId",
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    google_maps_place_id: Option<String>,

    /// 是否有下载权限
    #[serde(default, alias = "HasDownload", deserialize_with = "null_as_default")]
    has_download: bool,

    /// 是否为 Gold 会员
    #[serde(default, alias = "HasGold", deserialize_with = "null_as_default")]
    has_gold: bool,

    /// 最近活跃时间，服务端以普通字符串给出，不做解析
    #[serde(default, alias = "LastSeen", deserialize_with = "null_as_default")]
    last_seen: String,

    /// 可持有的授权数上限
    #[serde(default, alias = "MaxLicenses", deserialize_with = "null_as_default")]
    max_licenses: i32,

    #[serde(
        default,
        alias = "PlaceName",
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    place_name: Option<String>,

    #[serde(
        default,
        alias = "PlaceNameFull",
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    place_name_full: Option<String>,

    /// 真实姓名
    #[serde(
        default,
        alias = "RealName",
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    real_name: Option<String>,

    /// 偏好设置
    #[serde(default, alias = "Settings", skip_serializing_if = "Option::is_none")]
    settings: Option<Settings>,

    /// 当前订阅
    #[serde(default, alias = "Subscription", skip_serializing_if = "Option::is_none")]
    subscription: Option<Subscription>,

    /// 两步验证状态
    #[serde(default, alias = "TwoFactorState", deserialize_with = "null_as_default")]
    two_factor_state: String,
}

impl SelfAccount {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn admin(&self) -> bool {
        self.admin
    }

    pub fn birthday(&self) -> DateTime<Utc> {
        self.birthday
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn discord_id(&self) -> Option<&str> {
        self.discord_id.as_deref()
    }

    pub fn email_optins(&self) -> &[Value] {
        &self.email_optins
    }

    pub fn email_verification_status(&self) -> &str {
        &self.email_verification_status
    }

    pub fn free_gold(&self) -> bool {
        self.free_gold
    }

    pub fn google_maps_place_id(&self) -> Option<&str> {
        self.google_maps_place_id.as_deref()
    }

    pub fn has_download(&self) -> bool {
        self.has_download
    }

    pub fn has_gold(&self) -> bool {
        self.has_gold
    }

    pub fn last_seen(&self) -> &str {
        &self.last_seen
    }

    pub fn max_licenses(&self) -> i32 {
        self.max_licenses
    }

    pub fn place_name(&self) -> Option<&str> {
        self.place_name.as_deref()
    }

    pub fn place_name_full(&self) -> Option<&str> {
        self.place_name_full.as_deref()
    }

    pub fn real_name(&self) -> Option<&str> {
        self.real_name.as_deref()
    }

    pub fn settings(&self) -> Option<&Settings> {
        self.settings.as_ref()
    }

    pub fn subscription(&self) -> Option<&Subscription> {
        self.subscription.as_ref()
    }

    pub fn two_factor_state(&self) -> &str {
        &self.two_factor_state
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;

    /// 服务端 v2 接口风格（PascalCase）的完整响应
    pub(crate) const FULL_PAYLOAD: &str = r#"{
        "Admin": false,
        "Birthday": "1994-07-12T00:00:00Z",
        "CreatedAt": "2019-05-20T18:31:02.117Z",
        "DiscordId": "284736251947",
        "Email": "alice@example.com",
        "EmailOptins": [
            {"Type": "newsletter", "In": true},
            "legacy-optin",
            7
        ],
        "EmailVerificationStatus": "verified",
        "FreeGold": false,
        "GoogleMapsPlaceId": "ChIJs0-pQ_FzhlQRi_OBm-qWkbs",
        "HasDownload": true,
        "HasGold": true,
        "Id": "8b2f3c1e-0d7a-4c55-9a51-3f7f2d6c9e10",
        "LastSeen": "2 hours ago",
        "MaxLicenses": 3,
        "PlaceName": "Vancouver",
        "PlaceNameFull": "Vancouver, BC, Canada",
        "RealName": "Alice Liddell",
        "Settings": {
            "AutoEnableStreamerMode": true,
            "BlockUnlicensableTracks": false,
            "HideUnlicensableTracks": true,
            "PlaylistPublicByDefault": false,
            "PreferredFormat": "mp3_320",
            "StreamerMode": false
        },
        "Subscription": {
            "Id": "sub_9QzF",
            "Provider": "stripe",
            "Status": "active",
            "Tier": "gold",
            "Active": true,
            "CancelAtPeriodEnd": false,
            "CurrentPeriodStart": "2024-09-01T00:00:00Z",
            "CurrentPeriodEnd": "2024-10-01T00:00:00Z"
        },
        "TwoFactorState": "enabled",
        "Username": "alice"
    }"#;

    #[test]
    fn test_full_payload_deserialize() {
        let account: SelfAccount = serde_json::from_str(FULL_PAYLOAD).unwrap();
        assert_eq!(account.id(), "8b2f3c1e-0d7a-4c55-9a51-3f7f2d6c9e10");
        assert_eq!(account.username(), "alice");
        assert_eq!(account.email(), "alice@example.com");
        assert!(!account.admin());
        assert_eq!(account.birthday(), Utc.with_ymd_and_hms(1994, 7, 12, 0, 0, 0).unwrap());
        assert_eq!(account.created_at().timestamp_millis(), 1_558_377_062_117);
        assert_eq!(account.discord_id(), Some("284736251947"));
        assert_eq!(account.email_optins().len(), 3);
        assert_eq!(account.email_optins()[1], Value::String("legacy-optin".to_string()));
        assert_eq!(account.email_verification_status(), "verified");
        assert!(account.has_download());
        assert!(account.has_gold());
        assert!(!account.free_gold());
        assert_eq!(account.last_seen(), "2 hours ago");
        assert_eq!(account.max_licenses(), 3);
        assert_eq!(account.place_name(), Some("Vancouver"));
        assert_eq!(account.place_name_full(), Some("Vancouver, BC, Canada"));
        assert_eq!(account.real_name(), Some("Alice Liddell"));
        assert_eq!(account.two_factor_state(), "enabled");

        let settings = account.settings().unwrap();
        assert!(settings.auto_enable_streamer_mode());
        assert_eq!(settings.preferred_format(), "mp3_320");

        let subscription = account.subscription().unwrap();
        assert_eq!(subscription.tier(), "gold");
        assert!(subscription.active());
    }

    #[test]
    fn test_round_trip_preserves_every_field() {
        let account: SelfAccount = serde_json::from_str(FULL_PAYLOAD).unwrap();
        let json = serde_json::to_string(&account).unwrap();
        let decoded: SelfAccount = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, account);
    }

    #[test]
    fn test_minimal_payload_uses_defaults() {
        let json = r#"{"id":"u1","username":"alice","email":"a@example.com"}"#;
        let account: SelfAccount = serde_json::from_str(json).unwrap();

        assert_eq!(account.id(), "u1");
        assert_eq!(account.username(), "alice");
        assert_eq!(account.email(), "a@example.com");
        assert!(!account.admin());
        assert!(!account.free_gold());
        assert!(!account.has_download());
        assert!(!account.has_gold());
        assert_eq!(account.max_licenses(), 0);
        assert_eq!(account.birthday().timestamp(), 0);
        assert_eq!(account.created_at().timestamp(), 0);
        assert!(account.email_optins().is_empty());
        assert_eq!(account.email_verification_status(), "");
        assert_eq!(account.last_seen(), "");
        assert_eq!(account.two_factor_state(), "");
        assert!(account.discord_id().is_none());
        assert!(account.google_maps_place_id().is_none());
        assert!(account.place_name().is_none());
        assert!(account.place_name_full().is_none());
        assert!(account.real_name().is_none());
        assert!(account.settings().is_none());
        assert!(account.subscription().is_none());
    }

    #[test]
    fn test_missing_required_fields_fail() {
        let err = serde_json::from_str::<SelfAccount>(r#"{"username":"alice","email":"a@example.com"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("missing field `id`"));

        let err = serde_json::from_str::<SelfAccount>(r#"{"id":"u1","email":"a@example.com"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("missing field `username`"));

        let err = serde_json::from_str::<SelfAccount>(r#"{"id":"u1","username":"alice"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("missing field `email`"));
    }

    #[test]
    fn test_empty_id_is_rejected() {
        let json = r#"{"id":"","username":"alice","email":"a@example.com"}"#;
        assert!(serde_json::from_str::<SelfAccount>(json).is_err());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{
            "id": "u1",
            "username": "alice",
            "email": "a@example.com",
            "favoriteGenre": "drumstep",
            "Attributes": {"nested": [1, 2, 3]}
        }"#;
        let account: SelfAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.id(), "u1");
    }

    #[test]
    fn test_null_optional_fields() {
        let json = r#"{
            "Id": "u1",
            "Username": "alice",
            "Email": "a@example.com",
            "Birthday": null,
            "DiscordId": "",
            "EmailOptins": null,
            "MaxLicenses": null,
            "Settings": null,
            "Subscription": null,
            "LastSeen": null
        }"#;
        let account: SelfAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.birthday().timestamp(), 0);
        assert!(account.discord_id().is_none());
        assert!(account.email_optins().is_empty());
        assert_eq!(account.max_licenses(), 0);
        assert!(account.settings().is_none());
        assert_eq!(account.last_seen(), "");
    }

    #[test]
    fn test_pascal_and_camel_case_decode_identically() {
        let pascal = r#"{"Id":"u1","Username":"alice","Email":"a@example.com","HasGold":true,"MaxLicenses":2}"#;
        let camel = r#"{"id":"u1","username":"alice","email":"a@example.com","hasGold":true,"maxLicenses":2}"#;
        let from_pascal: SelfAccount = serde_json::from_str(pascal).unwrap();
        let from_camel: SelfAccount = serde_json::from_str(camel).unwrap();
        assert_eq!(from_pascal, from_camel);
    }

    #[test]
    fn test_serialize_emits_camel_case() {
        let json = r#"{"Id":"u1","Username":"alice","Email":"a@example.com","RealName":"Alice"}"#;
        let account: SelfAccount = serde_json::from_str(json).unwrap();
        let value = serde_json::to_value(&account).unwrap();
        assert_eq!(value["id"], "u1");
        assert_eq!(value["realName"], "Alice");
        assert_eq!(value["maxLicenses"], 0);
        assert!(value.get("discordId").is_none());
        assert!(value.get("RealName").is_none());
    }
}
