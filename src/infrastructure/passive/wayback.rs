// Copyright (c) 2025 websiftrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::snapshot::{ArchiveSnapshot, ArchiveSource};
use crate::domain::passive::source::{PassiveSource, SnapshotLookup};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Wayback可用性API响应
///
/// 只消费`archived_snapshots.closest`一条路径
#[derive(Debug, Deserialize)]
struct AvailabilityResponse {
    archived_snapshots: Option<ArchivedSnapshots>,
}

#[derive(Debug, Deserialize)]
struct ArchivedSnapshots {
    closest: Option<ClosestSnapshot>,
}

#[derive(Debug, Deserialize)]
struct ClosestSnapshot {
    url: Option<String>,
    timestamp: Option<String>,
}

/// Wayback Machine 被动源
///
/// 查询archive.org的可用性API获取目标URL的最近快照
pub struct WaybackSource {
    client: reqwest::Client,
    endpoint: String,
}

impl WaybackSource {
    /// 创建新的Wayback被动源
    ///
    /// # 参数
    ///
    /// * `endpoint` - API端点（生产环境为 http://archive.org）
    /// * `timeout` - 单次查询的超时上限
    /// * `user_agent` - 请求使用的User-Agent
    pub fn new(endpoint: String, timeout: Duration, user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client, endpoint }
    }

    fn availability_url(&self, url: &str) -> String {
        format!(
            "{}/wayback/available?url={}",
            self.endpoint.trim_end_matches('/'),
            urlencoding::encode(url)
        )
    }
}

#[async_trait]
impl PassiveSource for WaybackSource {
    /// 查询最近的Wayback快照
    ///
    /// 非200状态、JSON解析失败或字段缺失都视为没有快照；
    /// 传输层失败返回`Unreachable`。任何情况下都不向调用方
    /// 抛出错误。
    async fn lookup(&self, url: &str) -> SnapshotLookup {
        let response = match self.client.get(self.availability_url(url)).send().await {
            Ok(response) => response,
            Err(e) => return SnapshotLookup::Unreachable(e.to_string()),
        };

        if response.status() != reqwest::StatusCode::OK {
            debug!(status = %response.status(), "wayback availability returned non-200");
            return SnapshotLookup::NotFound;
        }

        let payload: AvailabilityResponse = match response.json().await {
            Ok(payload) => payload,
            Err(e) => {
                debug!(error = %e, "wayback availability payload was not valid JSON");
                return SnapshotLookup::NotFound;
            }
        };

        let closest = payload
            .archived_snapshots
            .and_then(|snapshots| snapshots.closest);

        match closest {
            Some(closest) => match closest.url {
                Some(snapshot_url) if !snapshot_url.is_empty() => {
                    let mut snapshot =
                        ArchiveSnapshot::new(ArchiveSource::WaybackMachine, snapshot_url);
                    if let Some(timestamp) = closest.timestamp.as_deref() {
                        snapshot = snapshot.with_wayback_timestamp(timestamp);
                    }
                    SnapshotLookup::Found(snapshot)
                }
                _ => SnapshotLookup::NotFound,
            },
            None => SnapshotLookup::NotFound,
        }
    }

    /// 来源名称
    fn name(&self) -> &'static str {
        "wayback-machine"
    }
}

#[cfg(test)]
#[path = "wayback_test.rs"]
mod tests;
