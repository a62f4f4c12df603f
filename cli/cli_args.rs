use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "rules",
    author,
    version,
    about = "Combine Markdown rule documents into an editor rules file.",
    long_about = "rules reads the .md files in the directory named by the RULES_PATH environment \nvariable and writes them, joined by blank lines, to .<EDITOR>rules in the current directory.",
    help_template = "{about-section}\nUsage: {usage}\n\n{all-args}{after-help}",
    after_help = "EXAMPLES:\n  rules cline                     # all .md files -> .clinerules\n  rules cline frontend            # frontend.md -> .clinerules\n  rules cursor frontend backend   # frontend.md + backend.md -> .cursorrules\n  rules                           # all .md files -> .rules\n  rules -l                        # list available rule files"
)]
pub struct Cli {
    #[arg(
        short = 'l',
        long,
        help = "List the available .md rule files and exit.",
        help_heading = "Listing"
    )]
    pub list: bool,

    #[arg(short = 'f', long, help = "Set the listing format.", value_name = "FORMAT", value_parser = ["text", "json"], requires = "list", help_heading = "Listing")]
    pub format: Option<String>,

    #[arg(
        value_name = "EDITOR",
        help = "Editor name used in the output file name (e.g. cline -> .clinerules)."
    )]
    pub editor: Option<String>,

    #[arg(
        value_name = "RULE",
        help = "Rule names to combine, without the .md extension [default: all]."
    )]
    pub rules: Vec<String>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase message verbosity (-v, -vv).")]
    pub verbose: u8,

    #[arg(short, long, help = "Silence informational messages and warnings.")]
    pub quiet: bool,
}

impl Cli {
    /// Positional tokens in command-line order: editor first, then rule names.
    pub fn positionals(&self) -> impl Iterator<Item = &str> {
        self.editor
            .iter()
            .chain(self.rules.iter())
            .map(String::as_str)
    }

    pub fn wants_json(&self) -> bool {
        self.format.as_deref() == Some("json")
    }
}
