//! Command implementations and argument parsing for the runnerup CLI.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use runnerup_core::{
    DEFAULT_ROOT, PathQuery, RunnerupBuilder, RunnerupError, SecondBest, SecondBestReport,
    TieBreak,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::input::parse_graph;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "runnerup",
    about = "Compute minimum and second-best spanning tree costs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Read a graph and print its MST and second-best spanning tree costs.
    Solve(SolveCommand),
}

/// Options accepted by the `solve` command.
#[derive(Debug, Args, Clone)]
pub struct SolveCommand {
    /// Graph file: `n m` followed by `m` lines of `u v w`. Reads stdin when
    /// omitted.
    pub path: Option<PathBuf>,

    /// Order in which equal-weight edges are considered.
    #[arg(long, value_enum, default_value_t = TieBreakArg::InputOrder)]
    pub tie_break: TieBreakArg,

    /// Strategy for heaviest-edge queries on tree paths.
    #[arg(long, value_enum, default_value_t = PathQueryArg::ParentWalk)]
    pub path_query: PathQueryArg,

    /// Vertex used as the root of the spanning tree.
    #[arg(
        long,
        default_value_t = DEFAULT_ROOT,
        value_parser = clap::value_parser!(usize),
    )]
    pub root: usize,

    /// Also print the edge swap that produces the second-best tree.
    #[arg(long)]
    pub explain: bool,
}

/// Tie-break orders selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TieBreakArg {
    /// Equal weights keep their input order.
    InputOrder,
    /// Equal weights are ordered by their endpoints.
    Endpoints,
}

impl From<TieBreakArg> for TieBreak {
    fn from(value: TieBreakArg) -> Self {
        match value {
            TieBreakArg::InputOrder => Self::InputOrder,
            TieBreakArg::Endpoints => Self::Endpoints,
        }
    }
}

/// Path-query strategies selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PathQueryArg {
    /// Walk parent pointers from both endpoints.
    ParentWalk,
    /// Jump through a binary-lifting table.
    Lifting,
}

impl From<PathQueryArg> for PathQuery {
    fn from(value: PathQueryArg) -> Self {
        match value {
            PathQueryArg::ParentWalk => Self::ParentWalk,
            PathQueryArg::Lifting => Self::Lifting,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the graph file failed.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading the graph from standard input failed.
    #[error("failed to read graph from stdin: {source}")]
    Stdin {
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input text is not a well-formed graph.
    #[error("invalid graph input on line {line}: {reason}")]
    Parse {
        /// 1-based line where the problem was found.
        line: usize,
        /// Description of the problem.
        reason: String,
    },
    /// Core computation failed.
    #[error(transparent)]
    Core(#[from] RunnerupError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Costs and swap computed by the core pipeline.
    pub report: SecondBestReport,
    /// Whether the swap should be rendered.
    pub explain: bool,
}

impl ExecutionSummary {
    /// Returns the second-best tree, failing when the graph has only one
    /// spanning tree.
    ///
    /// # Errors
    /// Returns [`CliError::Core`] wrapping
    /// [`RunnerupError::NoAlternativeTree`].
    pub fn require_second_best(&self) -> Result<SecondBest, CliError> {
        Ok(self.report.require_second_best()?)
    }
}

/// Executes the CLI command represented by `cli`, reading stdin when no
/// path is given.
///
/// # Errors
/// Returns [`CliError`] when reading, parsing or computation fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use runnerup_cli::cli::{Cli, Command, PathQueryArg, SolveCommand, TieBreakArg, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3 3\n1 2 1\n2 3 2\n1 3 5\n")?;
/// let cli = Cli {
///     command: Command::Solve(SolveCommand {
///         path: Some(file.path().to_path_buf()),
///         tie_break: TieBreakArg::InputOrder,
///         path_query: PathQueryArg::ParentWalk,
///         root: 1,
///         explain: false,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.report.mst_cost(), 3);
/// assert_eq!(summary.report.second_best_cost(), Some(6));
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Solve(solve) => {
            Span::current().record("command", field::display("solve"));
            run_solve(solve, io::stdin().lock())
        }
    }
}

#[instrument(
    name = "cli.solve",
    err,
    skip(command, stdin),
    fields(
        source = field::Empty,
        tie_break = ?command.tie_break,
        path_query = ?command.path_query,
        root = command.root,
    ),
)]
pub(super) fn run_solve(
    command: SolveCommand,
    stdin: impl Read,
) -> Result<ExecutionSummary, CliError> {
    let text = match &command.path {
        Some(path) => {
            Span::current().record("source", field::display(path.display()));
            fs::read_to_string(path).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?
        }
        None => {
            Span::current().record("source", field::display("<stdin>"));
            read_stdin(stdin)?
        }
    };

    let graph = parse_graph(&text)?;
    let report = RunnerupBuilder::new()
        .with_tie_break(command.tie_break.into())
        .with_path_query(command.path_query.into())
        .with_root(command.root)
        .build()
        .run(&graph)?;

    info!(
        vertices = graph.vertex_count(),
        mst_cost = report.mst_cost(),
        second_best_cost = report.second_best_cost(),
        "command completed"
    );
    Ok(ExecutionSummary {
        report,
        explain: command.explain,
    })
}

fn read_stdin(mut stdin: impl Read) -> Result<String, CliError> {
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .map_err(|source| CliError::Stdin { source })?;
    Ok(text)
}

/// Renders `summary` to `writer`: the MST cost, then the second-best cost
/// when one exists, then the swap when `explain` was requested.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use runnerup_cli::cli::{ExecutionSummary, render_summary};
/// # use runnerup_core::{GraphInput, Runnerup};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let graph = GraphInput::new(2, [(1, 2, 1), (1, 2, 3)]);
/// let summary = ExecutionSummary {
///     report: Runnerup::default().run(&graph)?,
///     explain: true,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "1\n3\nswap: +(1, 2, 3) -(1, 2, 1)\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "{}", summary.report.mst_cost())?;
    let Some(best) = summary.report.second_best() else {
        return Ok(());
    };
    writeln!(writer, "{}", best.cost)?;
    if summary.explain {
        let added = best.swap.added;
        let removed = best.swap.removed;
        writeln!(
            writer,
            "swap: +({}, {}, {}) -({}, {}, {})",
            added.source(),
            added.target(),
            added.weight(),
            removed.child.min(removed.parent),
            removed.child.max(removed.parent),
            removed.weight,
        )?;
    }
    Ok(())
}
