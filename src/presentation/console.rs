// Copyright (c) 2025 websiftrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::extraction::{ExtractionReport, ExtractionRequest};
use crate::domain::models::snapshot::ArchiveSnapshot;
use crate::domain::repositories::report_repository::{ReportError, ReportRepository};
use crate::presentation::markers;
use crate::utils::validators::is_valid_url;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::collections::BTreeSet;

/// 名称冲突时的最大重试次数
const MAX_SAVE_ATTEMPTS: usize = 3;

/// 打印横幅
pub fn banner() {
    let art = r#"
               _            _  __ _
  __      __ _| |__  ___(_)/ _| |_ _ __ ___
  \ \ /\ / / _ \ '_ \/ __| | |_| __| '__/ __|
   \ V  V /  __/ |_) \__ \ |  _| |_| |  \__ \
    \_/\_/ \___|_.__/|___/_|_|  \__|_|  |___/
"#;
    println!("{}", art.bright_green());
    println!(
        "{}",
        "* Scrapes emails, phone numbers and links from a URL".bright_cyan()
    );
    println!(
        "{}",
        "* Supports passive sources (WaybackMachine, archive.today) or the actual URL"
            .bright_green()
    );
    println!();
}

/// 提示输入目标URL
///
/// 校验失败时给出警告并重新提示，直到拿到合法URL
pub fn prompt_url() -> anyhow::Result<String> {
    loop {
        let url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter URL")
            .interact_text()?;
        if is_valid_url(&url) {
            return Ok(url);
        }
        println!(
            "{} {}",
            markers::warning(),
            "Invalid URL. Please try again.".bright_red()
        );
    }
}

/// 选择抓取来源
///
/// 菜单依次列出已解析的快照，原始URL始终是最后一项。
/// 用户取消时返回None。
pub fn choose_source(
    target_url: &str,
    snapshots: &[ArchiveSnapshot],
) -> anyhow::Result<Option<String>> {
    let mut items: Vec<String> = snapshots
        .iter()
        .map(|snapshot| {
            let mut item = format!(
                "{} latest snapshot: {}",
                snapshot.source.label(),
                snapshot.snapshot_url
            );
            if let Some(captured_at) = snapshot.captured_at {
                item.push_str(&format!(
                    " (captured {})",
                    captured_at.format("%Y-%m-%d %H:%M:%S UTC")
                ));
            }
            item
        })
        .collect();
    items.push(format!("Fetch the actual URL: {}", target_url));

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Choose how to fetch the page")
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(choice.map(|index| {
        if index < snapshots.len() {
            snapshots[index].snapshot_url.clone()
        } else {
            target_url.to_string()
        }
    }))
}

/// 逐项询问需要抽取的类别
pub fn prompt_extraction() -> anyhow::Result<ExtractionRequest> {
    let theme = ColorfulTheme::default();
    let want_emails = Confirm::with_theme(&theme)
        .with_prompt("Scrape emails from website?")
        .default(true)
        .interact()?;
    let want_phones = Confirm::with_theme(&theme)
        .with_prompt("Scrape phone numbers from website?")
        .default(true)
        .interact()?;
    let want_links = Confirm::with_theme(&theme)
        .with_prompt("Scrape social media/other links from website?")
        .default(true)
        .interact()?;

    Ok(ExtractionRequest {
        want_emails,
        want_phones,
        want_links,
    })
}

fn print_category(label: &str, values: &BTreeSet<String>) {
    if values.is_empty() {
        println!(
            "{} {}",
            markers::warning(),
            format!("No {} found.", label).bright_red()
        );
        return;
    }
    println!(
        "{} {}",
        markers::success(),
        format!("{} extracted successfully:", label).bright_green()
    );
    // BTreeSet already iterates in ascending code point order
    for value in values {
        println!("{}", value);
    }
}

/// 按请求的类别打印抽取结果
pub fn print_report(report: &ExtractionReport, request: &ExtractionRequest) {
    if request.want_emails {
        print_category("Emails", &report.emails);
    }
    if request.want_phones {
        print_category("Phone numbers", &report.phones);
    }
    if request.want_links {
        print_category("Social/other links", &report.links);
    }
}

/// 询问是否保存结果
pub fn confirm_save() -> anyhow::Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Do you want to save the output?")
        .default(false)
        .interact()?)
}

/// 保存流程
///
/// 名称冲突时重新提示，最多`MAX_SAVE_ATTEMPTS`次；
/// 其他IO错误直接放弃保存并警告。
pub async fn save_flow(
    repository: &dyn ReportRepository,
    report: &ExtractionReport,
) -> anyhow::Result<()> {
    for _ in 0..MAX_SAVE_ATTEMPTS {
        let destination: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter folder name")
            .interact_text()?;

        match repository.persist(&destination, report).await {
            Ok(()) => {
                println!(
                    "{} {}",
                    markers::success(),
                    format!("Output saved successfully in {}", destination).bright_green()
                );
                return Ok(());
            }
            Err(ReportError::AlreadyExists(_)) => {
                println!(
                    "{} {}",
                    markers::warning(),
                    "Folder already exists.".bright_red()
                );
            }
            Err(e) => {
                println!(
                    "{} {}",
                    markers::warning(),
                    format!("Could not save output: {}", e).bright_red()
                );
                return Ok(());
            }
        }
    }

    println!(
        "{} {}",
        markers::warning(),
        "Too many name collisions, output was not saved.".bright_red()
    );
    Ok(())
}
