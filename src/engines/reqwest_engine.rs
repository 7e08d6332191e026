// Copyright (c) 2025 websiftrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::document::FetchedDocument;
use crate::engines::traits::{FetchEngine, FetchOutcome};
use async_trait::async_trait;
use std::time::Duration;

/// 抓取引擎
///
/// 基于reqwest实现的单次GET抓取引擎，整个请求受一个
/// 超时上限约束
pub struct ReqwestEngine {
    client: reqwest::Client,
}

impl ReqwestEngine {
    /// 创建新的抓取引擎
    ///
    /// # 参数
    ///
    /// * `timeout` - 单次抓取的超时上限
    /// * `user_agent` - 请求使用的User-Agent
    pub fn new(timeout: Duration, user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }
}

#[async_trait]
impl FetchEngine for ReqwestEngine {
    /// 执行HTTP抓取
    ///
    /// 仅HTTP 200返回文档；其他状态码与传输层失败分别
    /// 映射为`HttpError`与`Transport`，绝不panic。
    async fn fetch(&self, url: &str) -> FetchOutcome {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => return FetchOutcome::Transport(e.to_string()),
        };

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return FetchOutcome::HttpError(status.as_u16());
        }

        match response.text().await {
            Ok(raw_html) => {
                FetchOutcome::Success(FetchedDocument::new(url.to_string(), raw_html))
            }
            Err(e) => FetchOutcome::Transport(e.to_string()),
        }
    }

    /// 获取引擎名称
    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
