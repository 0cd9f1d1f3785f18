use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::schema_args::SchemaArgs;
use graphql_markdown_core::render_schema;

/// Lists every document as `<category>\t<group>\t<slug>\t<name>`, with `-`
/// standing in for a missing group.
#[derive(Debug, clap::Args)]
pub(crate) struct ListCmd {
    #[command(flatten)]
    schema_args: SchemaArgs,
}
impl ListCmd {
    fn list(&self) -> anyhow::Result<String> {
        let config = self.schema_args.load_config()?;
        let schema = self.schema_args.load_schema()?;
        let lines: Vec<String> = render_schema(&schema, &config)?
            .into_iter()
            .map(|document| format!(
                "{}\t{}\t{}\t{}",
                document.category,
                document.group.as_deref().unwrap_or("-"),
                document.slug,
                document.name,
            ))
            .collect();
        Ok(lines.join("\n"))
    }
}

#[inherent::inherent]
impl RunnableCommand for ListCmd {
    pub async fn run(self) -> CommandResult {
        self.list().into()
    }
}
