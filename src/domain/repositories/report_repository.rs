// Copyright (c) 2025 websiftrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::extraction::ExtractionReport;
use async_trait::async_trait;
use thiserror::Error;

/// 报告存储错误类型
#[derive(Error, Debug)]
pub enum ReportError {
    /// 目标已存在
    #[error("Destination already exists: {0}")]
    AlreadyExists(String),
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 报告仓库特质
///
/// 将抽取报告持久化：每个非空类别一个按码点升序、
/// 换行分隔的UTF-8文本文件，不含尾部元数据。
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// 将报告写入指定目标
    ///
    /// 目标已存在时返回`AlreadyExists`，由调用方决定换名重试
    async fn persist(
        &self,
        destination: &str,
        report: &ExtractionReport,
    ) -> Result<(), ReportError>;
}
