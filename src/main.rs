use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use monstercat_rs::logging;
use monstercat_rs::model::config::{Config, OutputFormat};
use monstercat_rs::monstercat::{SelfAccount, payload};
use monstercat_rs::render::{RenderOptions, render};

/// 解码并展示"获取当前用户"接口返回的账户数据
#[derive(Parser, Debug)]
#[command(name = "monstercat-rs", version, about)]
struct Args {
    /// 配置文件路径（默认 config.json，不存在时使用默认配置）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 响应数据文件，`-` 或省略时读取标准输入
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// 输出格式，覆盖配置文件
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// 摘要中对邮箱脱敏
    #[arg(long, conflicts_with = "no_mask_email")]
    mask_email: bool,

    /// 摘要中显示完整邮箱
    #[arg(long)]
    no_mask_email: bool,

    /// 日志过滤规则，覆盖配置文件
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn mask_override(&self) -> Option<bool> {
        match (self.mask_email, self.no_mask_email) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

fn main() {
    if let Err(e) = run(Args::parse()) {
        eprintln!("错误: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(Config::default_config_path()));
    let config = Config::load(&config_path)?;

    // 初始化日志
    let level = args.log_level.as_deref().unwrap_or(&config.log_level);
    let _guard = logging::init(level, config.log_file.as_deref())?;
    tracing::debug!("使用配置文件: {}", config_path.display());

    let account = read_account(args.input.as_deref())?;

    let options = RenderOptions {
        format: args.format.unwrap_or(config.output_format),
        mask_email: args.mask_override().unwrap_or(config.mask_email),
    };
    println!("{}", render(&account, &options)?);
    Ok(())
}

fn read_account(input: Option<&Path>) -> anyhow::Result<SelfAccount> {
    match input {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path)
                .with_context(|| format!("打开数据文件失败: {}", path.display()))?;
            payload::decode_reader(BufReader::new(file))
                .with_context(|| format!("解码账户数据失败: {}", path.display()))
        }
        _ => payload::decode_reader(io::stdin().lock()).context("解码标准输入中的账户数据失败"),
    }
}
