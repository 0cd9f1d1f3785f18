use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::schema_args::SchemaArgs;
use crate::output_utils;
use graphql_markdown_core::render_schema;

#[derive(Debug, clap::Args)]
pub(crate) struct RenderCmd {
    #[arg(
        help="Only print the documents of entities with these names.",
        long,
        value_delimiter = ',',
    )]
    only: Vec<String>,

    #[command(flatten)]
    schema_args: SchemaArgs,
}
impl RenderCmd {
    fn render(&self) -> anyhow::Result<String> {
        let config = self.schema_args.load_config()?;
        let schema = self.schema_args.load_schema()?;
        let documents = render_schema(&schema, &config)?;

        let selected: Vec<String> = documents.into_iter()
            .filter(|document| self.only.is_empty() || self.only.contains(&document.name))
            .map(|document| format!(
                "<!-- {}/{} -->\n{}",
                document.category,
                document.slug,
                document.body,
            ))
            .collect();
        log::info!("{} Rendered {} documents.", output_utils::GREEN_CHECK, selected.len());
        Ok(selected.join("\n"))
    }
}

#[inherent::inherent]
impl RunnableCommand for RenderCmd {
    pub async fn run(self) -> CommandResult {
        self.render().into()
    }
}
