//! `rw providers` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use rw_config::Config;
use rw_transforms::EmbedConfig;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the providers command.
#[derive(Args)]
pub(crate) struct ProvidersArgs {
    /// Path to configuration file (default: auto-discover rw.toml).
    #[arg(short, long, env = "RW_CONFIG")]
    config: Option<PathBuf>,
}

impl ProvidersArgs {
    /// Execute the providers command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;

        match &config.config_path {
            Some(path) => output.highlight(&format!("Providers from {}", path.display())),
            None => output.info("Built-in providers (no rw.toml found)"),
        }

        let mut stdout = std::io::stdout().lock();
        write!(stdout, "{}", render_providers(&config.pipeline.embed))?;
        Ok(())
    }
}

/// One line per provider: key, source template and classes, aligned.
fn render_providers(embed: &EmbedConfig) -> String {
    let width = embed.providers.keys().map(String::len).max().unwrap_or(0);

    embed
        .providers
        .iter()
        .map(|(key, provider)| {
            let line = format!("{key:<width$}  {}  {}", provider.src_template, provider.class_name);
            line.trim_end().to_owned() + "\n"
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rw_transforms::EmbedProvider;

    #[test]
    fn test_render_builtin_providers() {
        assert_eq!(
            render_providers(&EmbedConfig::builtin()),
            "iframe   {id}  embed embed-iframe\n\
             vimeo    https://player.vimeo.com/video/{id}  embed embed-vimeo\n\
             youtube  https://www.youtube.com/embed/{id}  embed embed-youtube\n"
        );
    }

    #[test]
    fn test_render_provider_without_class() {
        let embed = EmbedConfig {
            providers: [("x".to_owned(), EmbedProvider::new("https://x.test/{id}", ""))]
                .into_iter()
                .collect(),
        };

        assert_eq!(render_providers(&embed), "x  https://x.test/{id}\n");
    }
}
