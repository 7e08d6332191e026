// Copyright (c) 2025 websiftrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::snapshot::{ArchiveSnapshot, ArchiveSource};
use crate::domain::passive::source::{PassiveSource, SnapshotLookup};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// archive.today域名变体
///
/// 最终响应URL的主机包含其中之一才视为命中快照
const KNOWN_ARCHIVE_HOSTS: [&str; 3] = ["archive.today", "archive.ph", "archive.is"];

/// archive.today 被动源
///
/// 访问按需存档端点并跟随重定向，以最终URL的主机判断
/// 是否已有快照
pub struct ArchiveTodaySource {
    client: reqwest::Client,
    endpoint: String,
}

impl ArchiveTodaySource {
    /// 创建新的archive.today被动源
    ///
    /// # 参数
    ///
    /// * `endpoint` - 存档端点（生产环境为 https://archive.today）
    /// * `timeout` - 单次查询的超时上限
    /// * `user_agent` - 请求使用的User-Agent
    pub fn new(endpoint: String, timeout: Duration, user_agent: &str) -> Self {
        // Redirects must be followed so the final URL reveals the snapshot host
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client, endpoint }
    }

    fn run_url(&self, url: &str) -> String {
        format!(
            "{}/?run=1&url={}",
            self.endpoint.trim_end_matches('/'),
            urlencoding::encode(url)
        )
    }

    /// 最终URL是否落在已知的archive.today域名变体上
    pub fn is_archive_host(final_url: &str) -> bool {
        let Ok(parsed) = Url::parse(final_url) else {
            return false;
        };
        parsed.host_str().is_some_and(|host| {
            KNOWN_ARCHIVE_HOSTS
                .iter()
                .any(|candidate| host.contains(candidate))
        })
    }
}

#[async_trait]
impl PassiveSource for ArchiveTodaySource {
    /// 查询archive.today快照
    ///
    /// 最终状态为200且主机命中已知域名变体时返回最终URL；
    /// 其余200响应与非200状态视为没有快照；传输层失败返回
    /// `Unreachable`。
    async fn lookup(&self, url: &str) -> SnapshotLookup {
        let response = match self.client.get(self.run_url(url)).send().await {
            Ok(response) => response,
            Err(e) => return SnapshotLookup::Unreachable(e.to_string()),
        };

        let status = response.status();
        let final_url = response.url().to_string();

        if status == reqwest::StatusCode::OK && Self::is_archive_host(&final_url) {
            return SnapshotLookup::Found(ArchiveSnapshot::new(
                ArchiveSource::ArchiveToday,
                final_url,
            ));
        }

        debug!(%status, %final_url, "archive.today reported no usable snapshot");
        SnapshotLookup::NotFound
    }

    /// 来源名称
    fn name(&self) -> &'static str {
        "archive-today"
    }
}

#[cfg(test)]
#[path = "archive_today_test.rs"]
mod tests;
