// Copyright (c) 2025 websiftrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::snapshot::ArchiveSnapshot;
use async_trait::async_trait;

/// 被动源查询结果
///
/// 区分"确实没有快照"与"查询未能完成"两种缺失情形，
/// 由调用方决定记录、重试还是忽略。两者对管线的影响
/// 相同：少一个备选项，原始URL始终可用。
#[derive(Debug, Clone)]
pub enum SnapshotLookup {
    /// 查询成功且存在快照
    Found(ArchiveSnapshot),
    /// 查询成功但没有快照
    NotFound,
    /// 查询未能完成（传输错误、超时）
    Unreachable(String),
}

/// 被动源特质
///
/// 第三方存档服务的统一查询接口。存档服务天然不可靠，
/// 实现必须吸收全部内部错误，绝不向调用方传播异常。
#[async_trait]
pub trait PassiveSource: Send + Sync {
    /// 查询目标URL的最近快照
    async fn lookup(&self, url: &str) -> SnapshotLookup;

    /// 来源名称
    fn name(&self) -> &'static str;
}
