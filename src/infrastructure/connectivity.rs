// Copyright (c) 2025 websiftrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

/// 连通性预检
///
/// 在进入交互流程前对探测URL发起一次GET。只要拿到任何
/// HTTP响应（无论状态码）就认为网络可达。
pub async fn check_online(probe_url: &str, timeout: Duration) -> bool {
    let client = match reqwest::Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(_) => return false,
    };
    client.get(probe_url).send().await.is_ok()
}
