//! 账户响应解码
//!
//! 所有解码失败统一报告为 [`AccountError::InvalidPayload`]，不会静默产出半成品记录

use std::io::Read;

use super::error::{AccountError, Result};
use super::model::SelfAccount;

/// 从字节解码
pub fn decode_slice(bytes: &[u8]) -> Result<SelfAccount> {
    tracing::debug!("解码账户数据，长度 {} 字节", bytes.len());
    finish(serde_json::from_slice::<SelfAccount>(bytes))
}

/// 从字符串解码
pub fn decode_str(text: &str) -> Result<SelfAccount> {
    decode_slice(text.as_bytes())
}

/// 从任意读取源解码（文件、标准输入等）
pub fn decode_reader<R: Read>(reader: R) -> Result<SelfAccount> {
    tracing::debug!("从读取源解码账户数据");
    finish(serde_json::from_reader::<_, SelfAccount>(reader))
}

/// 编码为紧凑的 camelCase JSON
pub fn encode(account: &SelfAccount) -> Result<String> {
    serde_json::to_string(account).map_err(AccountError::Encode)
}

/// 编码为带缩进的 camelCase JSON
pub fn encode_pretty(account: &SelfAccount) -> Result<String> {
    serde_json::to_string_pretty(account).map_err(AccountError::Encode)
}

fn finish(result: serde_json::Result<SelfAccount>) -> Result<SelfAccount> {
    match result {
        Ok(account) => {
            tracing::debug!("账户数据解码成功: {}", account.id());
            Ok(account)
        }
        Err(e) => {
            tracing::warn!("账户数据解码失败: {}", e);
            Err(AccountError::InvalidPayload(e))
        }
    }
}
