use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use log::debug;
use recase::cli::output::{print_conversions, OutputFormat};
use recase::{apply_template, break_to_words, singular, CaseStyle, Config, Conversion, ConversionOutput};
use std::io::{self, BufRead};

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "Convert identifiers and phrases between case styles", long_about = None)]
struct Cli {
    /// Target case style (camel, pascal, snake, kebab, title, sentence, upper, lower,
    /// upper-break, lower-break, first)
    #[arg(value_name = "STYLE")]
    style: Option<CaseStyle>,

    /// Strings to convert (read from stdin, one per line, when omitted)
    #[arg(value_name = "INPUT")]
    inputs: Vec<String>,

    /// Separator for the upper-break and lower-break styles
    #[arg(long, global = true)]
    join: Option<String>,

    /// Uppercase snake and kebab case output
    #[arg(long, global = true)]
    caps: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the words a string breaks into
    Words {
        #[arg(value_name = "INPUT")]
        inputs: Vec<String>,
    },
    /// Convert plural words to singular
    Singular {
        #[arg(value_name = "WORD")]
        words: Vec<String>,
    },
    /// Fill a message template with case variants of a value
    Template {
        /// Template containing #{upperCase}, #{snakeCase}, #{upperSnakeCase},
        /// #{lowerCase}, #{sentenceCase} or #{firstCase}
        template: String,
        value: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.join.clone(), cli.caps, cli.format, cli.no_color)?;
    debug!("Effective config: {:?}", config);

    let conversions = match cli.command {
        Some(command) => handle_command(command)?,
        None => {
            let Some(style) = cli.style else {
                anyhow::bail!("No case style specified. Use --help for usage information.");
            };
            let options = config.convert_options();
            read_inputs(cli.inputs)?
                .into_iter()
                .map(|input| Conversion {
                    output: ConversionOutput::Text(style.apply(&input, &options)),
                    input,
                })
                .collect()
        }
    };

    print_conversions(&conversions, config.color, &config.format);

    Ok(())
}

fn handle_command(command: Commands) -> Result<Vec<Conversion>> {
    let conversions = match command {
        Commands::Words { inputs } => read_inputs(inputs)?
            .into_iter()
            .map(|input| Conversion {
                output: ConversionOutput::Words(break_to_words(&input)),
                input,
            })
            .collect(),
        Commands::Singular { words } => read_inputs(words)?
            .into_iter()
            .map(|word| Conversion {
                output: ConversionOutput::Text(singular(&word)),
                input: word,
            })
            .collect(),
        Commands::Template { template, value } => vec![Conversion {
            output: ConversionOutput::Text(apply_template(&template, &value)),
            input: template,
        }],
    };
    Ok(conversions)
}

/// Command-line values, or stdin lines when none were given.
fn read_inputs(args: Vec<String>) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }

    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read input from stdin")
}
