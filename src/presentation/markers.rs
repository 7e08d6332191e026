// Copyright (c) 2025 websiftrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use colored::Colorize;

/// 控制台状态标记
///
/// 无状态的格式化工具，核心抽取逻辑不依赖于此。
/// 颜色由colored按终端能力自动降级。
pub fn info() -> String {
    format!(
        "{}{}{}",
        "[".bright_white(),
        "*".bright_cyan(),
        "]".bright_white()
    )
}

/// 警告标记 [!]
pub fn warning() -> String {
    format!(
        "{}{}{}",
        "[".bright_white(),
        "!".bright_red(),
        "]".bright_white()
    )
}

/// 成功标记 [✓]
pub fn success() -> String {
    format!(
        "{}{}{}",
        "[".bright_white(),
        "✓".bright_green(),
        "]".bright_white()
    )
}
