use anyhow::Context;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libdatamodel::ClassifiedError;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ClassifyErrorCmd {
    #[arg(
        help="Path to a JSON file holding a backend error payload.",
        name="PAYLOAD_PATH",
    )]
    payload_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for ClassifyErrorCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let payload = std::fs::read_to_string(&self.payload_path)
            .with_context(|| format!("Failed to read {:#?}", self.payload_path));
        let payload = match payload {
            Ok(payload) => payload,
            Err(e) => return CommandResult::failure(&e),
        };

        let classified = ClassifiedError::from_json(payload.trim());
        log::debug!("Payload status: {:?}", classified.status());
        CommandResult::stdout(format_args!("{classified}"))
    }
}
