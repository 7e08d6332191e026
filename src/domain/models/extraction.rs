// Copyright (c) 2025 websiftrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::BTreeSet;

/// 抽取请求
///
/// 指定需要运行哪些抽取通道，至少一项为true才是有效请求
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractionRequest {
    /// 是否抽取邮箱地址
    pub want_emails: bool,
    /// 是否抽取电话号码
    pub want_phones: bool,
    /// 是否抽取外部链接
    pub want_links: bool,
}

impl ExtractionRequest {
    /// 是否没有请求任何抽取通道
    pub fn is_empty(&self) -> bool {
        !(self.want_emails || self.want_phones || self.want_links)
    }
}

/// 抽取报告
///
/// 三个类别的实体集合。集合内值唯一、保留大小写，
/// 在任何边界（控制台、文件）按码点升序输出。
/// 各抽取通道完成后不再变更。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    /// 邮箱地址集合
    pub emails: BTreeSet<String>,
    /// 电话号码集合
    pub phones: BTreeSet<String>,
    /// 外部链接集合
    pub links: BTreeSet<String>,
}

impl ExtractionReport {
    /// 三个集合是否全为空
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty() && self.phones.is_empty() && self.links.is_empty()
    }
}
