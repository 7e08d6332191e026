// Copyright (c) 2025 websiftrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// 存档来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArchiveSource {
    /// Wayback Machine (archive.org)
    WaybackMachine,
    /// archive.today及其域名变体
    ArchiveToday,
}

impl ArchiveSource {
    /// 来源的显示名称
    pub fn label(&self) -> &'static str {
        match self {
            ArchiveSource::WaybackMachine => "WaybackMachine",
            ArchiveSource::ArchiveToday => "archive.today",
        }
    }
}

/// 存档快照实体
///
/// 表示被动源中某个URL的一次历史捕获。创建后不可变；
/// 查询不到快照是正常结果，不是错误。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveSnapshot {
    /// 快照来源
    pub source: ArchiveSource,
    /// 快照自身的可访问URL
    pub snapshot_url: String,
    /// 捕获时间（Wayback提供，archive.today不提供）
    pub captured_at: Option<DateTime<Utc>>,
}

impl ArchiveSnapshot {
    /// 创建一个新的存档快照
    pub fn new(source: ArchiveSource, snapshot_url: String) -> Self {
        Self {
            source,
            snapshot_url,
            captured_at: None,
        }
    }

    /// 附加Wayback可用性API返回的捕获时间戳
    ///
    /// 时间戳格式为`%Y%m%d%H%M%S`，解析失败时保持为空
    pub fn with_wayback_timestamp(mut self, timestamp: &str) -> Self {
        self.captured_at = NaiveDateTime::parse_from_str(timestamp, "%Y%m%d%H%M%S")
            .ok()
            .map(|naive| naive.and_utc());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{ArchiveSnapshot, ArchiveSource};

    #[test]
    fn test_wayback_timestamp_parsing() {
        let snapshot =
            ArchiveSnapshot::new(ArchiveSource::WaybackMachine, "http://a".to_string())
                .with_wayback_timestamp("20130919044612");
        let captured_at = snapshot.captured_at.expect("timestamp should parse");
        assert_eq!(captured_at.to_rfc3339(), "2013-09-19T04:46:12+00:00");
    }

    #[test]
    fn test_invalid_timestamp_leaves_capture_time_empty() {
        let snapshot =
            ArchiveSnapshot::new(ArchiveSource::WaybackMachine, "http://a".to_string())
                .with_wayback_timestamp("not-a-timestamp");
        assert!(snapshot.captured_at.is_none());
    }
}
