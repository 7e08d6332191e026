// Copyright (c) 2025 websiftrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::extraction::{ExtractionReport, ExtractionRequest};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use std::collections::BTreeSet;

/// 邮箱匹配模式：本地部分@域名.顶级域
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")
        .expect("Failed to compile email pattern")
});

/// 可见文本中识别的电话号码格式表
///
/// 新格式在此追加即可，抽取控制流不变。不做任何归一化，
/// 同一号码的不同写法视为不同实体。
const PHONE_TEXT_FORMATS: [&str; 4] = [
    r"\d{3}-\d{3}-\d{4}",    // 555-123-4567
    r"\(\d{3}\)\d{3}-\d{4}", // (555)123-4567
    r"\b\d{10}\b",           // 5551234567
    r"\d{3} \d{3} \d{4}",    // 555 123 4567
];

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&PHONE_TEXT_FORMATS.join("|")).expect("Failed to compile phone pattern")
});

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("Failed to compile anchor selector"));

/// 实体抽取服务
///
/// 从HTML文档中抽取邮箱、电话号码和外部链接三类实体集合。
/// 三个通道相互独立，可按请求选择性运行。
pub struct ExtractionService;

impl ExtractionService {
    /// 按请求运行抽取通道
    ///
    /// 对格式错误的HTML从不报错：解析总能得到尽力而为的DOM，
    /// 最坏情况是零匹配。未请求的类别保持为空集。
    pub fn extract(html: &str, request: &ExtractionRequest) -> ExtractionReport {
        let document = Html::parse_document(html);
        let mut report = ExtractionReport::default();

        if request.want_emails {
            report.emails = Self::extract_emails(&document);
        }
        if request.want_phones {
            report.phones = Self::extract_phones(&document);
        }
        if request.want_links {
            report.links = Self::extract_links(&document);
        }

        report
    }

    /// 抽取邮箱地址
    ///
    /// 两个独立通道：对可见文本做模式匹配，以及对mailto:锚点
    /// 去掉协议前缀后的剩余部分再做同一模式匹配，结果取并集。
    pub fn extract_emails(document: &Html) -> BTreeSet<String> {
        let mut emails = BTreeSet::new();

        let text = Self::visible_text(document);
        for found in EMAIL_PATTERN.find_iter(&text) {
            emails.insert(found.as_str().to_string());
        }

        for href in Self::anchor_hrefs(document) {
            if let Some(rest) = href.strip_prefix("mailto:") {
                for found in EMAIL_PATTERN.find_iter(rest.trim()) {
                    emails.insert(found.as_str().to_string());
                }
            }
        }

        emails
    }

    /// 抽取电话号码
    ///
    /// 可见文本按`PHONE_TEXT_FORMATS`匹配；tel:锚点取协议
    /// 前缀之后的原文，不做任何重排或归一化。
    pub fn extract_phones(document: &Html) -> BTreeSet<String> {
        let mut phones = BTreeSet::new();

        let text = Self::visible_text(document);
        for found in PHONE_PATTERN.find_iter(&text) {
            phones.insert(found.as_str().trim().to_string());
        }

        for href in Self::anchor_hrefs(document) {
            if let Some(rest) = href.strip_prefix("tel:") {
                let raw = rest.trim();
                if !raw.is_empty() {
                    phones.insert(raw.to_string());
                }
            }
        }

        phones
    }

    /// 抽取外部链接
    ///
    /// 收集所有以http://或https://开头的锚点href原文，
    /// 不做归一化，仅按字符串精确去重。
    pub fn extract_links(document: &Html) -> BTreeSet<String> {
        let mut links = BTreeSet::new();
        for href in Self::anchor_hrefs(document) {
            if href.starts_with("http://") || href.starts_with("https://") {
                links.insert(href.to_string());
            }
        }
        links
    }

    /// 提取文档可见文本
    ///
    /// 跳过script/style/noscript子树下的文本节点，
    /// 避免把未渲染的代码当作内容匹配。
    fn visible_text(document: &Html) -> String {
        let mut text = String::new();
        for node in document.tree.nodes() {
            let Some(fragment) = node.value().as_text() else {
                continue;
            };
            let suppressed = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|element| {
                        matches!(element.name(), "script" | "style" | "noscript")
                    })
            });
            if !suppressed {
                text.push_str(fragment);
                text.push('\n');
            }
        }
        text
    }

    fn anchor_hrefs(document: &Html) -> impl Iterator<Item = &str> {
        document
            .select(&ANCHOR_SELECTOR)
            .filter_map(|anchor| anchor.value().attr("href"))
    }
}

#[cfg(test)]
#[path = "extraction_service_test.rs"]
mod tests;
