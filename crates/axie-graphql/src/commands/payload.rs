use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use axie_graphql_ops::payload::build_payload;

#[derive(Debug, clap::Args)]
pub(crate) struct PayloadCmd {
    #[arg(
        help="Name of the operation, e.g. `GetAxieDetail`.",
        name="NAME",
    )]
    name: String,

    #[arg(
        help="Overrides a variable placeholder. VALUE is parsed as JSON when \
             possible (`24`, `true`, `[\"Beast\"]`) and taken as a string \
             otherwise. May be repeated.",
        long="var",
        value_name="KEY=VALUE",
        value_parser=parse_variable_assignment,
    )]
    vars: Vec<(String, serde_json::Value)>,

    #[arg(
        help="Print the payload on a single line.",
        long,
    )]
    compact: bool,
}

#[inherent::inherent]
impl RunnableCommand for PayloadCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut payload = match build_payload(&self.name) {
            Ok(payload) => payload,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            )),
        };

        for (key, value) in self.vars {
            if !payload.variables.contains_key(&key) {
                log::warn!(
                    "`{key}` is not a declared variable of `{}`; passing it \
                    through anyway.",
                    self.name,
                );
            }
            payload.set_variable(key, value);
        }

        let json = if self.compact {
            payload.to_json_string()
        } else {
            payload.to_json_string_pretty()
        };
        match json {
            Ok(json) => CommandResult::stdout(format_args!("{json}")),
            Err(e) => CommandResult::stderr(format_args!(
                "{} Failed to serialize payload: {e}",
                output_utils::RED_X,
            )),
        }
    }
}

fn parse_variable_assignment(arg: &str) -> anyhow::Result<(String, serde_json::Value)> {
    let (key, raw_value) = arg.split_once('=').ok_or_else(|| {
        anyhow::anyhow!("expected KEY=VALUE, found `{arg}`")
    })?;
    let key = key.trim().trim_start_matches('$');
    if key.is_empty() {
        anyhow::bail!("variable name must not be empty in `{arg}`");
    }

    let value = serde_json::from_str(raw_value)
        .unwrap_or_else(|_| serde_json::Value::String(raw_value.to_string()));
    Ok((key.to_string(), value))
}
