// Copyright (c) 2025 websiftrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含抽取管线的编排用例
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体、服务和仓库接口
pub mod domain;

/// 引擎模块
///
/// 实现网页内容抓取引擎
pub mod engines;

/// 基础设施模块
///
/// 提供外部服务集成，如存档服务、本地存储等
pub mod infrastructure;

/// 表示层模块
///
/// 交互式控制台：横幅、标记、提示和来源菜单
pub mod presentation;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
