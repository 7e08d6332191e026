// Copyright (c) 2025 websiftrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：核心业务实体和数据结构
/// - 被动源接口（passive）：第三方存档服务的查询抽象
/// - 仓库接口（repositories）：结果持久化抽象接口
/// - 服务（services）：实体抽取等领域服务
///
/// 领域层是系统的核心，不依赖于任何外部实现。
pub mod models;
pub mod passive;
pub mod repositories;
pub mod services;
