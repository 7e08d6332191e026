// Copyright (c) 2025 websiftrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use colored::Colorize;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;
use websiftrs::application::use_cases::sift_use_case::SiftUseCase;
use websiftrs::config::settings::Settings;
use websiftrs::domain::passive::source::PassiveSource;
use websiftrs::engines::reqwest_engine::ReqwestEngine;
use websiftrs::infrastructure::connectivity;
use websiftrs::infrastructure::passive::archive_today::ArchiveTodaySource;
use websiftrs::infrastructure::passive::wayback::WaybackSource;
use websiftrs::infrastructure::storage::LocalReportStorage;
use websiftrs::presentation::{console, markers};
use websiftrs::utils::telemetry;

/// 主函数
///
/// 应用程序入口点，负责初始化组件并驱动交互式抽取流程
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();

    // 2. Load configuration
    let settings = Settings::new()?;

    console::banner();

    // 3. Connectivity pre-check
    println!(
        "{} {}",
        markers::info(),
        "Checking internet connection...".bright_cyan()
    );
    let online = connectivity::check_online(
        &settings.network.probe_url,
        Duration::from_secs(settings.network.probe_timeout),
    )
    .await;
    if !online {
        println!(
            "{} {}",
            markers::warning(),
            "No internet connection detected. Try again later.".bright_red()
        );
        std::process::exit(1);
    }
    println!(
        "{} {}",
        markers::success(),
        "Connected to the internet.".bright_green()
    );

    // 4. Build pipeline components
    let lookup_timeout = Duration::from_secs(settings.network.lookup_timeout);
    let wayback = Arc::new(WaybackSource::new(
        settings.passive.wayback_endpoint.clone(),
        lookup_timeout,
        &settings.network.user_agent,
    ));
    let archive_today = Arc::new(ArchiveTodaySource::new(
        settings.passive.archive_today_endpoint.clone(),
        lookup_timeout,
        &settings.network.user_agent,
    ));
    let sources: Vec<Arc<dyn PassiveSource>> = vec![wayback, archive_today];
    let engine = Arc::new(ReqwestEngine::new(
        Duration::from_secs(settings.network.fetch_timeout),
        &settings.network.user_agent,
    ));
    let use_case = SiftUseCase::new(sources, engine);
    let storage = LocalReportStorage::new(settings.storage.base_path.clone());

    // 5. Interactive flow
    let target_url = console::prompt_url()?;

    println!(
        "{} {}",
        markers::info(),
        "Checking passive sources...".bright_cyan()
    );
    let snapshots = use_case.resolve_sources(&target_url).await;

    let Some(chosen_url) = console::choose_source(&target_url, &snapshots)? else {
        println!(
            "{} {}",
            markers::warning(),
            "No valid choice selected. Exiting...".bright_red()
        );
        return Ok(());
    };

    let request = console::prompt_extraction()?;
    if request.is_empty() {
        println!(
            "{} {}",
            markers::warning(),
            "No scraping option selected. Exiting...".bright_red()
        );
        return Ok(());
    }

    println!("{} {}", markers::info(), "Scraping started".bright_cyan());
    let report = match use_case.run(&chosen_url, &request).await {
        Ok(report) => report,
        Err(e) => {
            warn!(error = %e, "pipeline stopped");
            println!(
                "{} {}",
                markers::warning(),
                "Failed to fetch content. Exiting...".bright_red()
            );
            return Ok(());
        }
    };

    console::print_report(&report, &request);

    if !report.is_empty() && console::confirm_save()? {
        console::save_flow(&storage, &report).await?;
    }

    Ok(())
}
