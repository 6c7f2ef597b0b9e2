//! Seed command

use super::bootstrap;

pub async fn run() -> anyhow::Result<()> {
    let (_, state) = bootstrap().await?;

    let report = state.seed_service.seed_catalog().await?;
    println!(
        "Seeded {} quota definitions ({} deactivated)",
        report.seeded, report.deactivated
    );

    Ok(())
}
