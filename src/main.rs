use bracktree::bracket::{self, BracketStyle, FromStrBracketParser};
use bracktree::edit;
use bracktree::render::TextRenderer;
use bracktree::{ParsingError, Tree, TraversalOrder};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Passes of the "delete nodes with one child" action unless configured otherwise.
const DEFAULT_NORMALIZE_PASSES: usize = 100;

/// Work with integer binary trees in bracket notation, e.g. "1 (2 (4, 5), 3)".
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Tree in bracket notation
    #[arg(conflicts_with = "file")]
    notation: Option<String>,

    /// Read the tree from this file instead
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Save the resulting tree to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print values with their levels (visitor), then the values again (iterator)
    Traverse {
        /// pre, in, post or level
        order: TraversalOrder,
    },
    /// Delete nodes with exactly one child and print the result
    Normalize {
        /// Maximum number of deletions; unbounded with --all
        #[arg(short, long, default_value_t = DEFAULT_NORMALIZE_PASSES)]
        passes: usize,
        /// Delete until no node with exactly one child is left
        #[arg(long, conflicts_with = "passes")]
        all: bool,
    },
    /// Print the tree in bracket notation
    Format {
        #[arg(long)]
        compact: bool,
    },
    /// Print the tree as an indented outline
    Render,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), ParsingError> {
    let mut parser = FromStrBracketParser::<i64>::from_str_values();
    let mut tree = match (&cli.file, &cli.notation) {
        (Some(path), _) => bracket::parse_file(path, &mut parser)?,
        (None, Some(notation)) => parser.parse_str(notation)?,
        (None, None) => Tree::new(),
    };

    let mut style = BracketStyle::Spaced;
    match cli.command {
        Command::Traverse { order } => print_traversal(&tree, order),
        Command::Normalize { passes, all } => {
            let removed = if all {
                tree.delete_one_child_nodes()
            } else {
                edit::delete_one_child_nodes_bounded(&mut tree, passes)
            };
            println!("Removed {removed} node(s)");
            println!("{}", bracket::to_bracket(&tree, style)?);
        }
        Command::Format { compact } => {
            if compact {
                style = BracketStyle::Compact;
            }
            println!("{}", bracket::to_bracket(&tree, style)?);
        }
        Command::Render => println!("{}", TextRenderer::new().with_colors().render_to_string(&tree)),
    }

    if let Some(path) = cli.output {
        bracket::write_file(path, &tree, style)?;
    }

    Ok(())
}

fn print_traversal(tree: &Tree<i64>, order: TraversalOrder) {
    println!("Visitor ({order}):");
    tree.visit(order, |value, depth| println!("{value} (level {depth})"));
    println!();
    println!("Iterator ({order}):");
    for value in tree.iter(order) {
        println!("{value}");
    }
}
