// Copyright (c) 2025 websiftrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含网络、被动源和存储等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 网络配置
    pub network: NetworkSettings,
    /// 被动源配置
    pub passive: PassiveSettings,
    /// 存储配置
    pub storage: StorageSettings,
}

/// 网络配置设置
#[derive(Debug, Deserialize)]
pub struct NetworkSettings {
    /// 连通性探测URL
    pub probe_url: String,
    /// 连通性探测超时时间（秒）
    pub probe_timeout: u64,
    /// 被动源查询超时时间（秒）
    pub lookup_timeout: u64,
    /// 内容抓取超时时间（秒）
    pub fetch_timeout: u64,
    /// HTTP请求的User-Agent
    pub user_agent: String,
}

/// 被动源配置设置
#[derive(Debug, Deserialize)]
pub struct PassiveSettings {
    /// Wayback Machine可用性API端点
    pub wayback_endpoint: String,
    /// archive.today按需存档端点
    pub archive_today_endpoint: String,
}

/// 存储配置设置
#[derive(Debug, Deserialize)]
pub struct StorageSettings {
    /// 输出目录的父路径
    pub base_path: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Default network settings
            .set_default("network.probe_url", "http://google.com")?
            .set_default("network.probe_timeout", 5)?
            .set_default("network.lookup_timeout", 5)?
            .set_default("network.fetch_timeout", 20)?
            .set_default(
                "network.user_agent",
                "Mozilla/5.0 (compatible; websiftrs/0.1)",
            )?
            // Default passive source settings
            .set_default("passive.wayback_endpoint", "http://archive.org")?
            .set_default("passive.archive_today_endpoint", "https://archive.today")?
            // Default storage settings
            .set_default("storage.base_path", ".")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("WEBSIFT").separator("__"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
