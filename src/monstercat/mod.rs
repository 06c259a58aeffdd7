//! Monstercat 账户数据
//!
//! 数据模型与响应解码边界。HTTP 传输与认证由外部客户端负责。

pub mod error;
pub mod model;
pub mod payload;

pub use error::{AccountError, Result};
pub use model::{SelfAccount, Settings, Subscription};
