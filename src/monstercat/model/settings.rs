//! 用户偏好设置

use serde::{Deserialize, Serialize};

use super::serde_ext::null_as_default;

/// 账户的偏好设置
///
/// 所有字段均可缺省，未知字段忽略
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// 检测到直播软件时自动开启主播模式
    #[serde(default, alias = "AutoEnableStreamerMode", deserialize_with = "null_as_default")]
    auto_enable_streamer_mode: bool,

    /// 阻止播放未获授权的曲目
    #[serde(default, alias = "BlockUnlicensableTracks", deserialize_with = "null_as_default")]
    block_unlicensable_tracks: bool,

    /// 在列表中隐藏未获授权的曲目
    #[serde(default, alias = "HideUnlicensableTracks", deserialize_with = "null_as_default")]
    hide_unlicensable_tracks: bool,

    /// 新建歌单默认公开
    #[serde(default, alias = "PlaylistPublicByDefault", deserialize_with = "null_as_default")]
    playlist_public_by_default: bool,

    /// 首选下载格式（如 `mp3_320`、`flac`）
    #[serde(default, alias = "PreferredFormat", deserialize_with = "null_as_default")]
    preferred_format: String,

    #[serde(default, alias = "StreamerMode", deserialize_with = "null_as_default")]
    streamer_mode: bool,
}

impl Settings {
    pub fn auto_enable_streamer_mode(&self) -> bool {
        self.auto_enable_streamer_mode
    }

    pub fn block_unlicensable_tracks(&self) -> bool {
        self.block_unlicensable_tracks
    }

    pub fn hide_unlicensable_tracks(&self) -> bool {
        self.hide_unlicensable_tracks
    }

    pub fn playlist_public_by_default(&self) -> bool {
        self.playlist_public_by_default
    }

    pub fn preferred_format(&self) -> &str {
        &self.preferred_format
    }

    pub fn streamer_mode(&self) -> bool {
        self.streamer_mode
    }
}
