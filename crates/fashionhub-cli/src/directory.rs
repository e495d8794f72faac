//! Directory search over the seeded profiles.

use fashionhub_client::{actions, InMemoryBackend};
use fashionhub_core::{AppConfig, DirectoryCriteria, Profile, ProfileDirectoryFilter};

/// Build an in-memory backend holding the seed directory named by `config`.
///
/// # Errors
///
/// Returns an error if the seed file cannot be loaded or fails validation.
pub(crate) fn seeded_backend(config: &AppConfig) -> anyhow::Result<InMemoryBackend> {
    let seed = fashionhub_core::load_directory(&config.directory_path).map_err(|e| {
        anyhow::anyhow!(
            "failed to load seed directory {}: {e}",
            config.directory_path.display()
        )
    })?;
    tracing::debug!(
        profiles = seed.profiles.len(),
        briefs = seed.briefs.len(),
        "seed directory loaded"
    );
    Ok(InMemoryBackend::new()
        .with_profiles(seed.profiles)
        .with_briefs(seed.briefs))
}

/// Truncate `text` to `max` characters, appending `...` when cut.
pub(crate) fn clip(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_string()
    }
}

fn print_row(profile: &Profile) {
    println!(
        "{:<10}{:<38}{:<34}{}",
        profile.type_label(),
        clip(profile.display_title(), 34),
        clip(&profile.subtitle(), 30),
        profile.rate_summary().unwrap_or_default()
    );
}

/// Filter the directory and print the result.
///
/// # Errors
///
/// Returns an error if the seed cannot be loaded, the search fails, or JSON
/// output cannot be encoded.
pub(crate) async fn run_directory(
    config: &AppConfig,
    criteria: &DirectoryCriteria,
    json: bool,
) -> anyhow::Result<()> {
    let backend = seeded_backend(config)?;
    let filter = ProfileDirectoryFilter::new(config.featured_count);
    let view = actions::load_directory(&backend, criteria, &filter).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&view.profiles)?);
        return Ok(());
    }

    let stats = actions::directory_stats(&backend).await?;
    println!(
        "{} brands, {} suppliers, {} experts",
        stats.brands, stats.suppliers, stats.experts
    );

    if view.is_empty() {
        println!("no professionals match; try clearing some filters");
        return Ok(());
    }

    println!("{}", view.result_label());
    println!();
    let header = format!("{:<10}{:<38}{:<34}RATES", "TYPE", "NAME", "SPECIALTIES");
    println!("{header}");
    // Unfiltered browsing shows the featured block first.
    let browsing = !criteria.has_filters() && criteria.query_text().is_none();
    let rest = if browsing {
        for profile in view.featured() {
            print_row(profile);
        }
        println!();
        &view.profiles[view.featured().len()..]
    } else {
        &view.profiles[..]
    };
    for profile in rest {
        print_row(profile);
    }

    Ok(())
}
