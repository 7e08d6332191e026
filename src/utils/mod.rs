// Copyright (c) 2025 websiftrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工具模块
///
/// 提供URL校验与遥测初始化等通用辅助功能
pub mod telemetry;
pub mod validators;
