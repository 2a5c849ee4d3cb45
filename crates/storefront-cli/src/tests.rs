use super::*;

#[test]
fn parses_navigation_command() {
    let cli =
        Cli::try_parse_from(["storefront-cli", "navigation"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Navigation));
    assert!(cli.fixtures.is_none());
}

#[test]
fn parses_listing_with_query() {
    let cli = Cli::try_parse_from([
        "storefront-cli",
        "listing",
        "wood-screws",
        "--query",
        "Size=10mm&Color=Red",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Listing { handle, query } => {
            assert_eq!(handle, "wood-screws");
            assert_eq!(query, "Size=10mm&Color=Red");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn listing_query_defaults_to_empty() {
    let cli = Cli::try_parse_from(["storefront-cli", "listing", "hinges"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Listing { ref query, .. } if query.is_empty()
    ));
}

#[test]
fn fixtures_flag_is_global() {
    let cli = Cli::try_parse_from([
        "storefront-cli",
        "options",
        "hinges",
        "--fixtures",
        "/srv/fixtures",
    ])
    .expect("expected valid cli args");
    assert_eq!(cli.fixtures, Some(PathBuf::from("/srv/fixtures")));
    match cli.command {
        Commands::Options { handle, query } => {
            assert_eq!(handle, "hinges");
            assert!(query.is_empty());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_options_with_query() {
    let cli = Cli::try_parse_from([
        "storefront-cli",
        "options",
        "wood-screws",
        "-q",
        "Size=10mm",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Options { ref query, .. } if query == "Size=10mm"
    ));
}

#[test]
fn listing_requires_handle() {
    assert!(Cli::try_parse_from(["storefront-cli", "listing"]).is_err());
}

#[test]
fn report_marks_not_found_errors() {
    let err = report(CatalogError::CollectionUnresolved {
        category_handle: "fasteners".to_string(),
    });
    assert_eq!(err.to_string(), "not found");
    assert!(err.downcast_ref::<CatalogError>().is_some());
}
