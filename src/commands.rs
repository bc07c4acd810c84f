use crate::cli::Cli;
use anyhow::Context as _;
use ffprof::{get_profiles_directory, list_profiles, read_decoded, remove_profile, resolve_file};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Registry root and profile selection shared by every verb
pub struct Context {
    root: PathBuf,
    profile: Option<String>,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let root = get_profiles_directory(cli.browser, cli.profiles_dir.as_deref())
            .context("Failed to locate the profiles directory")?;
        Ok(Self {
            root,
            profile: cli.profile.clone(),
        })
    }

    fn resolve_file(&self, file: &Path) -> anyhow::Result<PathBuf> {
        resolve_file(&self.root, self.profile.as_deref(), file).with_context(|| {
            format!(
                "Failed to resolve profile in {}. Use 'ffprof list' to see available profiles.",
                self.root.display()
            )
        })
    }
}

/// Decode a profile file to stdout
pub fn extract(ctx: &Context, file: &Path) -> anyhow::Result<()> {
    let path = ctx.resolve_file(file)?;
    let content =
        read_decoded(&path).with_context(|| format!("Failed to read {}", path.display()))?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&content)?;
    stdout.flush()?;
    Ok(())
}

/// Encode stdin into a profile file
pub fn compress(ctx: &Context, file: &Path) -> anyhow::Result<()> {
    let path = ctx.resolve_file(file)?;
    let mut content = Vec::new();
    std::io::stdin()
        .lock()
        .read_to_end(&mut content)
        .context("Failed to read standard input")?;

    ffprof::write_encoded(&path, &content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Print the resolved profile directory or file path
pub fn get_path(ctx: &Context, file: Option<&Path>) -> anyhow::Result<()> {
    let path = ctx.resolve_file(file.unwrap_or(Path::new("")))?;
    println!("{}", path.display());
    Ok(())
}

/// Remove the resolved profile
pub fn remove(ctx: &Context) -> anyhow::Result<()> {
    let removed = remove_profile(&ctx.root, ctx.profile.as_deref()).with_context(|| {
        format!("Failed to remove profile from {}", ctx.root.display())
    })?;
    tracing::info!(path = %removed.display(), "profile removed");
    Ok(())
}

/// List all profiles as JSON
pub fn list(ctx: &Context) -> anyhow::Result<()> {
    let profiles = list_profiles(&ctx.root).map_err(|e| {
        anyhow::anyhow!(
            "Failed to list profiles: {}. Make sure the browser has been started once.",
            e
        )
    })?;

    let json = serde_json::to_string_pretty(&profiles)?;
    println!("{}", json);
    Ok(())
}
