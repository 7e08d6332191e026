// Copyright (c) 2025 websiftrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::extraction::ExtractionReport;
use crate::domain::repositories::report_repository::{ReportError, ReportRepository};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 各类别的输出文件名
const EMAIL_FILE: &str = "email_output.txt";
const PHONE_FILE: &str = "phone_output.txt";
const LINK_FILE: &str = "social_media_output.txt";

/// 本地文件系统报告存储实现
pub struct LocalReportStorage {
    base_path: PathBuf,
}

impl LocalReportStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn destination_path(&self, destination: &str) -> PathBuf {
        self.base_path.join(destination)
    }
}

/// 将集合渲染为换行分隔的文本
///
/// BTreeSet迭代天然按码点升序，文件不含任何尾部元数据
fn render(set: &BTreeSet<String>) -> String {
    set.iter().cloned().collect::<Vec<_>>().join("\n")
}

async fn write_category(
    dir: &Path,
    file_name: &str,
    set: &BTreeSet<String>,
) -> Result<(), ReportError> {
    if set.is_empty() {
        return Ok(());
    }
    fs::write(dir.join(file_name), render(set)).await?;
    Ok(())
}

#[async_trait]
impl ReportRepository for LocalReportStorage {
    /// 持久化抽取报告
    ///
    /// 目标目录已存在时返回`AlreadyExists`，由调用方决定
    /// 换名重试；每个非空类别写一个文件，空类别不产生文件。
    async fn persist(
        &self,
        destination: &str,
        report: &ExtractionReport,
    ) -> Result<(), ReportError> {
        let dir = self.destination_path(destination);
        if fs::try_exists(&dir).await? {
            return Err(ReportError::AlreadyExists(destination.to_string()));
        }
        fs::create_dir_all(&dir).await?;

        write_category(&dir, EMAIL_FILE, &report.emails).await?;
        write_category(&dir, PHONE_FILE, &report.phones).await?;
        write_category(&dir, LINK_FILE, &report.links).await?;

        Ok(())
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
