//! Monstercat 当前账户数据的解码与展示

pub mod logging;
pub mod model;
pub mod monstercat;
pub mod render;
