use super::CliOptions;
use tracing::level_filters::LevelFilter;

use crate::models::ClassificationMode;

#[test]
fn test_missing_input_paths_yield_no_options() {
    assert_eq!(CliOptions::from_args(Vec::<String>::new()), None);
    assert_eq!(CliOptions::from_args(["charges.csv"]), None);
}

#[test]
fn test_optional_arguments_default_when_absent() {
    let options = CliOptions::from_args(["charges.csv", "payments.csv"]);

    assert_eq!(options, Some(CliOptions {
        charges_path: "charges.csv".to_string(),
        payments_path: "payments.csv".to_string(),
        log_level: LevelFilter::ERROR,
        mode: ClassificationMode::RowCumulative
    }));
}

#[test]
fn test_optional_arguments_are_case_insensitive() {
    let options = CliOptions::from_args(["c.csv", "p.csv", "DEBUG", "Booking"]);

    let options = options.map(|options| (options.log_level, options.mode));
    assert_eq!(options, Some((LevelFilter::DEBUG, ClassificationMode::BookingSum)));
}

#[test]
fn test_unknown_optional_arguments_fall_back_to_defaults() {
    for level in ["loud", "off", ""] {
        let options = CliOptions::from_args(["c.csv", "p.csv", level, "nightly"]);

        let options = options.map(|options| (options.log_level, options.mode));
        assert_eq!(options, Some((LevelFilter::ERROR, ClassificationMode::RowCumulative)), "level {level:?}");
    }
}
