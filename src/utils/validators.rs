// Copyright (c) 2025 websiftrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;

/// URL语法校验模式
///
/// 接受http/https/ftp/file方案，后随非空的URL安全字符序列，
/// 匹配的末位字符排除 `.` `:` `;` `,` `~` `!` `|`。
/// 前缀匹配语义：不要求整串耗尽。
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?|ftp|file)://[-A-Za-z0-9+&@#/%?=~_|!:,.;]*[-A-Za-z0-9+&@#/%=~_|]")
        .expect("Failed to compile url pattern")
});

/// 校验URL
///
/// 纯函数，无网络访问，除返回false外没有失败模式
pub fn is_valid_url(url: &str) -> bool {
    URL_PATTERN.is_match(url)
}
