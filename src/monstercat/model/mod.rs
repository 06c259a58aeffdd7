//! 平台 API 数据模型

pub mod account;
pub mod serde_ext;
pub mod settings;
pub mod subscription;

pub use account::SelfAccount;
pub use settings::Settings;
pub use subscription::Subscription;
