// Copyright (c) 2025 websiftrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::extraction::{ExtractionReport, ExtractionRequest};
use crate::domain::models::snapshot::ArchiveSnapshot;
use crate::domain::passive::source::{PassiveSource, SnapshotLookup};
use crate::domain::services::extraction_service::ExtractionService;
use crate::engines::traits::{FetchEngine, FetchOutcome};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// 管线错误类型
#[derive(Error, Debug)]
pub enum SiftError {
    /// 未选择任何抽取通道
    #[error("No extraction category requested")]
    NothingRequested,
    /// 未能取回任何内容
    #[error("No content fetched from {url}: {reason}")]
    NoContent { url: String, reason: String },
}

/// 抽取管线用例
///
/// 编排：被动源解析 → 内容抓取 → 选择性抽取。
/// 被动源按顺序查询、互不重叠；查询失败只降级不传播，
/// 原始URL始终是有效的兜底选择。
pub struct SiftUseCase {
    sources: Vec<Arc<dyn PassiveSource>>,
    engine: Arc<dyn FetchEngine>,
}

impl SiftUseCase {
    pub fn new(sources: Vec<Arc<dyn PassiveSource>>, engine: Arc<dyn FetchEngine>) -> Self {
        Self { sources, engine }
    }

    /// 解析目标URL的所有可用快照
    ///
    /// `Unreachable`与`NotFound`对结果的影响相同：少一个
    /// 备选项。前者额外记录警告日志，便于区分服务故障与
    /// 确实无存档。
    pub async fn resolve_sources(&self, url: &str) -> Vec<ArchiveSnapshot> {
        let mut snapshots = Vec::new();
        for source in &self.sources {
            match source.lookup(url).await {
                SnapshotLookup::Found(snapshot) => {
                    info!(
                        source = source.name(),
                        url = %snapshot.snapshot_url,
                        "snapshot resolved"
                    );
                    snapshots.push(snapshot);
                }
                SnapshotLookup::NotFound => {
                    info!(source = source.name(), "no snapshot available");
                }
                SnapshotLookup::Unreachable(cause) => {
                    warn!(source = source.name(), %cause, "passive source unreachable");
                }
            }
        }
        snapshots
    }

    /// 对选定来源执行抓取与抽取
    ///
    /// 抓取失败（非200或传输错误）时短路整个管线并返回
    /// `NoContent`，绝不把失败当作零匹配的空文档去解析。
    pub async fn run(
        &self,
        source_url: &str,
        request: &ExtractionRequest,
    ) -> Result<ExtractionReport, SiftError> {
        if request.is_empty() {
            return Err(SiftError::NothingRequested);
        }

        let document = match self.engine.fetch(source_url).await {
            FetchOutcome::Success(document) => document,
            FetchOutcome::HttpError(status) => {
                return Err(SiftError::NoContent {
                    url: source_url.to_string(),
                    reason: format!("HTTP status {}", status),
                });
            }
            FetchOutcome::Transport(cause) => {
                return Err(SiftError::NoContent {
                    url: source_url.to_string(),
                    reason: cause,
                });
            }
        };

        info!(
            engine = self.engine.name(),
            url = source_url,
            bytes = document.raw_html.len(),
            "content fetched"
        );

        Ok(ExtractionService::extract(&document.raw_html, request))
    }
}
