// Copyright (c) 2025 websiftrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::document::FetchedDocument;
use async_trait::async_trait;

/// 抓取结果
///
/// 三种互不混淆的结束状态：成功取回文档（空白页面也是
/// 合法内容）、非200状态码、传输层失败。调用方必须把
/// 后两者当作"未取回内容"，而不是"页面没有内容"。
#[derive(Debug)]
pub enum FetchOutcome {
    /// HTTP 200，返回文档
    Success(FetchedDocument),
    /// 非200状态码
    HttpError(u16),
    /// 传输层失败（DNS、TLS、超时、连接重置）
    Transport(String),
}

/// 内容抓取引擎特质
#[async_trait]
pub trait FetchEngine: Send + Sync {
    /// 对URL执行一次GET抓取
    async fn fetch(&self, url: &str) -> FetchOutcome;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
