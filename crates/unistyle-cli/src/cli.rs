use clap::{Args, Parser, Subcommand};

/// Render plain text as styled Unicode
#[derive(Debug, Parser)]
#[command(name = "unistyle")]
#[command(version)]
#[command(about = "Render plain text as styled Unicode (𝐛𝐨𝐥𝐝, 𝓈𝒸𝓇𝒾𝓅𝓉, 𝕕𝕠𝕦𝕓𝕝𝕖-𝕤𝕥𝕣𝕦𝕔𝕜, ...)")]
#[command(long_about = "Render plain text as styled Unicode.\n\n\
    The output is ordinary text made of alternate Unicode letters and\n\
    combining marks, so it keeps its look wherever plain text is accepted.\n\n\
    Environment:\n  \
    UNISTYLE_STYLE     default style id (bold)\n  \
    UNISTYLE_FALLBACK  style used when an unknown id is requested\n  \
    UNISTYLE_LOG       log filter, e.g. debug (warn)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List available styles
    Styles(StylesArgs),

    /// Render text in one style
    Render(RenderArgs),

    /// Render text in every style
    Preview(PreviewArgs),
}

#[derive(Debug, Args)]
pub struct StylesArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Text to render; read from stdin when omitted
    pub text: Vec<String>,

    /// Style id (see `unistyle styles`)
    #[arg(short, long)]
    pub style: Option<String>,

    /// Style to use if the requested one does not exist
    #[arg(long)]
    pub fallback: Option<String>,

    /// Also copy the result to the clipboard
    #[arg(short, long)]
    pub copy: bool,

    /// Report length against social platform limits on stderr
    #[arg(long)]
    pub limits: bool,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Text to render; read from stdin when omitted
    pub text: Vec<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}
