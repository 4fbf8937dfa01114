use carousel_core::SameDotPolicy;
use clap::{Args, Parser, Subcommand};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "carousel")]
#[command(about = "An infinitely looping card carousel for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Load cards from a JSON file (or set CAROUSEL_FILE env var)
    #[arg(long, value_name = "PATH", env = "CAROUSEL_FILE")]
    pub file: Option<PathBuf>,

    /// Fetch cards from this URL instead of the configured one
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Configuration file (defaults to the per-user config location)
    #[arg(long, value_name = "PATH", env = "CAROUSEL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Reload when the card file changes
    #[arg(long, requires = "file")]
    pub watch: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the layout and display sequence for a card file
    Inspect(InspectArgs),
    /// Run navigation steps without a terminal and print the state after each
    Simulate(SimulateArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct InspectArgs {
    #[arg(long, value_name = "PATH")]
    pub file: PathBuf,
    #[arg(long, value_name = "PX")]
    pub viewport_width: f32,
    /// Defaults to the viewport width
    #[arg(long, value_name = "PX")]
    pub container_width: Option<f32>,
}

#[derive(Args)]
pub struct SimulateArgs {
    #[arg(long, value_name = "PATH")]
    pub file: PathBuf,
    #[arg(long, value_name = "PX")]
    pub viewport_width: f32,
    /// Defaults to the viewport width
    #[arg(long, value_name = "PX")]
    pub container_width: Option<f32>,
    /// What clicking the active dot does: animate or ignore
    #[arg(long, value_name = "POLICY")]
    pub same_dot: Option<SameDotPolicy>,
    /// next, prev, dot:<i>, drag:<offset>:<velocity> or resize:<viewport>:<container>
    #[arg(required = true, value_name = "STEP", allow_hyphen_values = true)]
    pub steps: Vec<Step>,
}

/// One input fed to the carousel by `simulate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Next,
    Prev,
    Dot(usize),
    Drag { offset: f32, velocity: f32 },
    Resize { viewport: f32, container: f32 },
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let number = |text: &str| {
            text.parse::<f32>()
                .map_err(|_| format!("'{}' is not a number in step '{}'", text, s))
        };
        match parts.as_slice() {
            ["next"] => Ok(Step::Next),
            ["prev"] => Ok(Step::Prev),
            ["dot", index] => index
                .parse()
                .map(Step::Dot)
                .map_err(|_| format!("'{}' is not a dot index in step '{}'", index, s)),
            ["drag", offset, velocity] => Ok(Step::Drag {
                offset: number(*offset)?,
                velocity: number(*velocity)?,
            }),
            ["resize", viewport, container] => Ok(Step::Resize {
                viewport: number(*viewport)?,
                container: number(*container)?,
            }),
            _ => Err(format!(
                "unknown step '{}', expected next, prev, dot:<i>, drag:<offset>:<velocity> or resize:<viewport>:<container>",
                s
            )),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Next => write!(f, "next"),
            Step::Prev => write!(f, "prev"),
            Step::Dot(index) => write!(f, "dot:{}", index),
            Step::Drag { offset, velocity } => write!(f, "drag:{}:{}", offset, velocity),
            Step::Resize {
                viewport,
                container,
            } => write!(f, "resize:{}:{}", viewport, container),
        }
    }
}
