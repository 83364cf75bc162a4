// Configuration and content check
//
// Usage: cargo run --bin validate_config
// Exits non-zero if the config file, an env override, or the content
// registry is invalid.

use anyhow::Context;
use portfolio_site::content::composer;
use portfolio_site::{Config, ContentRegistry};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("configuration is invalid")?;
    let addr = config.bind_addr()?;

    println!("Configuration");
    println!("  app_name:          {}", config.app_name);
    println!("  version:           {}", config.version);
    println!("  bind address:      {}", addr);
    println!("  debug:             {}", config.debug);
    println!("  service_name:      {}", config.service_name);
    println!("  static_dir:        {}", config.static_dir);
    println!("  gcp_project_id:    {}", config.gcp_project_id);
    println!("  gcp_region:        {}", config.gcp_region);
    println!("  artifact_registry: {}", config.artifact_registry);
    println!("  docker image:      {}:{}", config.docker_image_name, config.docker_tag);

    let registry = ContentRegistry::builtin();
    registry.validate().context("content registry is inconsistent")?;

    // Compose every page so dangling references surface here too
    composer::education_page(&registry)?;
    composer::certifications_page(&registry)?;
    composer::techstack_page(&registry)?;
    composer::connect_page(&registry)?;
    composer::achievements_page(&registry)?;
    composer::irl_page(&registry)?;

    let stats = registry.stats();
    println!();
    println!("Content");
    println!("  institutions:      {}", stats.institutions);
    println!("  programs:          {}", stats.programs);
    println!("  certifications:    {}", stats.certifications);
    println!("  technologies:      {}", stats.technologies);
    println!("  social links:      {}", stats.social_links);
    println!("  slides:            {}", stats.slides);
    println!();
    println!("OK");

    Ok(())
}
