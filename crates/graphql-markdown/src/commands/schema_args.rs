use anyhow::Context;
use graphql_markdown_core::GeneratorConfig;
use graphql_markdown_schema::Schema;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Arguments locating the schema files and the generator configuration.
#[derive(Debug, clap::Args)]
pub(crate) struct SchemaArgs {
    #[arg(
        help="Path to a TOML generator configuration file. Every setting \
             has a default, so this can be omitted.",
        long,
        short='c',
    )]
    config: Option<PathBuf>,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing them. All files are loaded into a single schema.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl SchemaArgs {
    pub(crate) fn load_config(&self) -> anyhow::Result<GeneratorConfig> {
        let Some(config_path) = self.config.as_deref() else {
            log::debug!("No configuration file given, using defaults.");
            return Ok(GeneratorConfig::default());
        };

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read configuration file {config_path:?}"))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid configuration file {config_path:?}"))
    }

    pub(crate) fn load_schema(&self) -> anyhow::Result<Schema> {
        let file_paths = self.find_schema_files()?;
        if file_paths.is_empty() {
            anyhow::bail!(
                "No schema files with extension {} found under {:?}",
                self.graphql_file_exts.join(", "),
                self.file_or_dir_paths,
            );
        }
        log::debug!("Loading {} schema files...", file_paths.len());

        let schema = Schema::builder()
            .load_files(file_paths)
            .and_then(|builder| builder.build())
            .context("Failed to build the schema")?;
        Ok(schema)
    }

    /// Every file at or under the given paths whose extension is one of
    /// `graphql_file_exts`, in a stable order.
    ///
    /// A lone file path is loaded whatever its extension: naming it is taken
    /// as a request to treat it as a schema file.
    fn find_schema_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        if let [single_path] = self.file_or_dir_paths.as_slice()
            && single_path.is_file() {
            return Ok(vec![single_path.to_path_buf()]);
        }

        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path).follow_links(true).sort_by_file_name() {
                let entry = entry
                    .with_context(|| format!("Failed to scan {path:?}"))?;
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {:?}.", entry.path());
                    continue;
                }
                if self.has_schema_extension(entry.path()) {
                    log::trace!("Found schema file at {:?}.", entry.path());
                    file_paths.push(entry.into_path());
                }
            }
        }
        Ok(file_paths)
    }

    fn has_schema_extension(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().map(|ext| ext.to_string_lossy()) else {
            return false;
        };
        self.graphql_file_exts
            .iter()
            .any(|expected| expected.trim_start_matches('.') == ext)
    }
}
