// Copyright (c) 2025 websiftrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 抓取到的文档
///
/// 一次成功抓取的原始结果，在单次管线执行内创建并消费，
/// 由调用方独占直至抽取完成。空的`raw_html`表示页面本身
/// 没有内容，抓取失败由引擎层单独建模。
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    /// 实际抓取的URL（快照URL或原始URL）
    pub source_url: String,
    /// 原始HTML内容
    pub raw_html: String,
}

impl FetchedDocument {
    /// 创建一个新的抓取文档
    pub fn new(source_url: String, raw_html: String) -> Self {
        Self {
            source_url,
            raw_html,
        }
    }
}
