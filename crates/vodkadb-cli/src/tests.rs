use super::*;

#[test]
fn parses_normalize_with_required_args() {
    let cli = Cli::try_parse_from([
        "vodkadb-cli",
        "normalize",
        "--input",
        "raw/biedronka.json",
        "--store",
        "biedronka",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Normalize {
            ref input,
            ref store,
            json: None,
            csv: None,
            no_timestamp: false,
            dry_run: false,
        } if input == &PathBuf::from("raw/biedronka.json") && store == "biedronka"
    ));
}

#[test]
fn parses_normalize_with_all_flags() {
    let cli = Cli::try_parse_from([
        "vodkadb-cli",
        "normalize",
        "--input",
        "in.json",
        "--store",
        "Lidl",
        "--json",
        "out/lidl.json",
        "--csv",
        "out/lidl.csv",
        "--no-timestamp",
        "--dry-run",
    ])
    .unwrap();

    assert!(matches!(
        cli.command,
        Commands::Normalize {
            json: Some(ref j),
            csv: Some(ref c),
            no_timestamp: true,
            dry_run: true,
            ..
        } if j == &PathBuf::from("out/lidl.json") && c == &PathBuf::from("out/lidl.csv")
    ));
}

#[test]
fn normalize_requires_store() {
    let result = Cli::try_parse_from(["vodkadb-cli", "normalize", "--input", "in.json"]);
    assert!(result.is_err());
}

#[test]
fn parses_summary_with_image() {
    let cli = Cli::try_parse_from([
        "vodkadb-cli",
        "summary",
        "Soplica Cytrynówka | 0,5L | 28%",
        "--store",
        "Dino",
        "--image",
        "http://x/y.jpg",
    ])
    .unwrap();

    assert!(matches!(
        cli.command,
        Commands::Summary {
            ref line,
            ref store,
            image: Some(ref i),
        } if line == "Soplica Cytrynówka | 0,5L | 28%" && store == "Dino" && i == "http://x/y.jpg"
    ));
}

#[test]
fn parses_stores_command() {
    let cli = Cli::try_parse_from(["vodkadb-cli", "stores"]).unwrap();
    assert!(matches!(cli.command, Commands::Stores));
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["vodkadb-cli"]).is_err());
}

#[test]
fn unknown_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["vodkadb-cli", "scrape"]).is_err());
}
