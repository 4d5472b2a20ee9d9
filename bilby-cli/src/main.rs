//! Bilby CLI
//!
//! Builds a CSS selector from a JSON description and prints it.
//!
//! A description is either a fragment list or a combine node:
//!
//! ```json
//! {"fragments": [{"kind": "id", "value": "main"}, {"kind": "class", "value": "nav"}]}
//! ```
//!
//! ```json
//! {"left": {"fragments": [{"kind": "id", "value": "nav"}]},
//!  "combinator": "child",
//!  "right": {"fragments": [{"kind": "element", "value": "li"}]}}
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use bilby_common::json::{from_json, to_json};
use bilby_selector::{Combinator, FragmentKind, Selector, combine, fragment};
use clap::Parser;
use serde::Deserialize;

/// Build a CSS selector from a JSON description.
#[derive(Parser)]
#[command(name = "bilby", version, about)]
struct Args {
    /// Path to the JSON description file.
    input: Option<PathBuf>,

    /// Inline JSON description instead of a file.
    #[arg(long, conflicts_with = "input")]
    json: Option<String>,

    /// Print the selector's part log as JSON instead of its CSS text.
    #[arg(long)]
    dump: bool,
}

/// One node of the description tree.
#[derive(Deserialize)]
#[serde(untagged)]
enum SelectorSpec {
    /// Two sub-descriptions joined by a combinator.
    Combine {
        /// The left-hand description.
        left: Box<SelectorSpec>,
        /// Combinator between the two sides.
        combinator: CombinatorSpec,
        /// The right-hand description.
        right: Box<SelectorSpec>,
    },
    /// A flat list of fragments, appended in order.
    Fragments {
        /// The fragments, at least one.
        fragments: Vec<FragmentSpec>,
    },
}

/// One fragment of a description, e.g. `{"kind": "class", "value": "nav"}`.
#[derive(Deserialize)]
struct FragmentSpec {
    /// The fragment kind.
    kind: FragmentKind,
    /// The raw value; punctuation is added by the builder.
    value: String,
}

/// A combinator given either by name (`"child"`) or as a raw token (`">"`).
#[derive(Deserialize)]
#[serde(untagged)]
enum CombinatorSpec {
    /// A standard combinator by name.
    Named(Combinator),
    /// A raw token, inserted verbatim.
    Token(String),
}

impl CombinatorSpec {
    /// The token text to splice between the two sides.
    fn token(&self) -> &str {
        match self {
            Self::Named(combinator) => combinator.token(),
            Self::Token(token) => token,
        }
    }
}

/// Build the selector a description tree denotes.
fn build(spec: SelectorSpec) -> Result<Selector> {
    match spec {
        SelectorSpec::Fragments { fragments } => {
            let mut specs = fragments.into_iter();
            let first = specs
                .next()
                .context("a selector needs at least one fragment")?;
            let mut selector = fragment(first.kind, &first.value);
            for FragmentSpec { kind, value } in specs {
                selector = selector.fragment(kind, &value)?;
            }
            Ok(selector)
        }
        SelectorSpec::Combine {
            left,
            combinator,
            right,
        } => Ok(combine(build(*left)?, combinator.token(), build(*right)?)),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let text = match (&args.input, &args.json) {
        (_, Some(inline)) => inline.clone(),
        (Some(path), None) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        (None, None) => bail!("pass a JSON description file or --json '<description>'"),
    };

    let spec: SelectorSpec = from_json(&text).context("parsing the selector description")?;
    let selector = build(spec)?;

    if args.dump {
        println!("{}", to_json(&selector)?);
    } else {
        println!("{selector}");
    }

    Ok(())
}
