#![warn(clippy::all, rust_2018_idioms)]

use clap::{Parser, ValueEnum};
use mergetree::{
    merger::{Max, Min, Product, Sum},
    Merger,
    RangeMergeTree,
};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum MergerKind {
    Sum,
    Product,
    Min,
    Max,
}

#[derive(Parser, Debug)]
#[clap(author, version, about = "Build a range-merge tree and run range queries against it", long_about = None)]
struct Args {
    /// Comma separated initial values
    #[clap(
        short,
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_value = "-2,0,3,-5,2,-1"
    )]
    values: Vec<i64>,
    /// Merge operation used by the tree
    #[clap(short, long, value_enum, default_value_t = MergerKind::Sum)]
    merger: MergerKind,
    /// Inclusive range to query, as `left:right`. May be repeated.
    #[clap(short, long = "query", value_parser = parse_range)]
    queries: Vec<(usize, usize)>,
    /// Point update applied after the first round of queries, as `position=value`. May be repeated.
    #[clap(short = 's', long = "set", value_parser = parse_update, allow_hyphen_values = true)]
    updates: Vec<(usize, i64)>,
    /// Print the node buffer of the tree
    #[clap(long)]
    render: bool,
}

fn parse_range(s: &str) -> Result<(usize, usize), String> {
    let (left, right) = s
        .split_once(':')
        .ok_or_else(|| format!("expected `left:right`, got `{s}`"))?;
    let left = left.trim().parse().map_err(|e| format!("{left}: {e}"))?;
    let right = right.trim().parse().map_err(|e| format!("{right}: {e}"))?;
    Ok((left, right))
}

fn parse_update(s: &str) -> Result<(usize, i64), String> {
    let (position, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected `position=value`, got `{s}`"))?;
    let position = position.trim().parse().map_err(|e| format!("{position}: {e}"))?;
    let value = value.trim().parse().map_err(|e| format!("{value}: {e}"))?;
    Ok((position, value))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stdout (if you run with `RUST_LOG=debug`).
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    match args.merger {
        MergerKind::Sum => run(&args, Sum),
        MergerKind::Product => run(&args, Product),
        MergerKind::Min => run(&args, Min),
        MergerKind::Max => run(&args, Max),
    }
}

fn run<M: Merger<i64>>(args: &Args, merger: M) -> Result<(), Box<dyn std::error::Error>> {
    let mut tree = RangeMergeTree::new(args.values.clone(), merger);
    log::info!("{:?} tree over {} values", args.merger, tree.len());

    let queries = if args.queries.is_empty() && !tree.is_empty() {
        vec![(0, tree.len() - 1)]
    } else {
        args.queries.clone()
    };

    run_queries(&tree, &queries)?;
    if args.updates.is_empty() {
        render(&tree, args.render);
        return Ok(());
    }

    for &(position, value) in &args.updates {
        let previous = tree.set(position, value)?;
        println!("set {position}: {previous} -> {value}");
    }
    run_queries(&tree, &queries)?;
    render(&tree, args.render);
    Ok(())
}

fn run_queries<M: Merger<i64>>(
    tree: &RangeMergeTree<i64, M>,
    queries: &[(usize, usize)],
) -> Result<(), Box<dyn std::error::Error>> {
    for &(left, right) in queries {
        let result = tree.query(left, right)?;
        println!("query [{left}, {right}] = {result}");
    }
    Ok(())
}

fn render<M>(tree: &RangeMergeTree<i64, M>, enabled: bool) {
    if enabled {
        println!("{tree}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_args() {
        assert_eq!(parse_range("0:2"), Ok((0, 2)));
        assert!(parse_range("0-2").is_err());
        assert_eq!(parse_update("3=-5"), Ok((3, -5)));
        assert!(parse_update("3").is_err());

        let args = Args::try_parse_from([
            "range_query",
            "--merger",
            "max",
            "-q",
            "0:2",
            "-s",
            "1=-7",
        ])
        .unwrap();
        assert_eq!(args.values, vec![-2, 0, 3, -5, 2, -1]);
        assert_eq!(args.queries, vec![(0, 2)]);
        assert_eq!(args.updates, vec![(1, -7)]);
        assert!(!args.render);
    }

    #[test]
    fn out_of_range_query_is_reported() {
        let tree = RangeMergeTree::new(vec![1i64, 2, 3], Sum);
        let err = run_queries(&tree, &[(0, 3)]).unwrap_err();
        assert_eq!(err.to_string(), "position 3 is out of range for tree of length 3");
    }
}
