use clap::{Args, Parser, ValueEnum};
use derive_more::derive::Deref;
use hellocommon::print;

/// Print a greeting
#[derive(Debug, Clone, PartialEq, Parser, Deref)]
#[clap(bin_name = "hello")]
pub struct Cli {
    /// Name to greet
    ///
    /// Defaults to "world" when absent or empty. Text starting with `-`
    /// that is not a known option is taken as the name
    #[clap(allow_hyphen_values = true)]
    pub name: Option<String>,

    /// Extra arguments after the name are ignored
    #[clap(hide = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,

    /// Name to greet, used when no positional name is given
    #[clap(long = "name", value_name = "NAME")]
    pub name_option: Option<String>,

    /// Common options
    #[deref]
    #[clap(flatten)]
    pub options: CommonOptions,
}

impl Cli {
    pub fn apply_print_options(&self) {
        if self.verbose {
            print::verbose_on();
        }

        match &self.color {
            Some(ColorOption::Never) => print::color_off(),
            Some(ColorOption::Always) => {
                // color is already on by default
            }
            None => print::auto_color(),
        }
    }

    /// The name to pass to the greeting
    ///
    /// An empty name counts as not given, so `hello ""` and
    /// `hello --name ""` still greet the default name.
    pub fn resolve_name(&self) -> Option<&str> {
        [&self.name, &self.name_option]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|name| !name.is_empty())
    }
}

/// Common options
#[derive(Debug, Clone, PartialEq, Args)]
pub struct CommonOptions {
    /// Enable verbose output
    #[clap(short = 'V', long)]
    pub verbose: bool,

    /// Enable error trace
    #[clap(short = 'T', long)]
    pub trace: bool,

    /// Set output color option
    ///
    /// By default, color is enabled when stderr is terminal
    #[clap(long)]
    pub color: Option<ColorOption>,
}

/// Color options for output
#[derive(Debug, Clone, PartialEq, ValueEnum)]
pub enum ColorOption {
    Always,
    Never,
}
