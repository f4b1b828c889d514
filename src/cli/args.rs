//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

/// Evaluate arithmetic and compare tree, array and heap behaviour
#[derive(Parser, Debug)]
#[command(name = "dsperf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Turn debugging information on (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a whitespace-separated infix expression, e.g. "( 2 + 3 ) * 4"
    Eval {
        /// The expression, quoted as a single argument
        expression: String,
    },

    /// Print the postfix form of an infix expression
    Postfix {
        /// The expression, quoted as a single argument
        expression: String,
    },

    /// Compare search trees built from sorted and shuffled keys
    Shape {
        /// Number of keys to insert
        #[arg(short, long, default_value_t = 10_000)]
        size: usize,

        /// Seed for the shuffle (random when omitted)
        #[arg(long, env = "DSPERF_SEED")]
        seed: Option<u64>,
    },

    /// Sort integers by heapifying them and dequeueing until empty
    Heapsort {
        /// Integers to sort
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}
