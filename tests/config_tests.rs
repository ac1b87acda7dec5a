use soccer_scores_lambda_rust::config::Competitions;
use soccer_scores_lambda_rust::style::{Mirc, Style};

const SMALL_TABLE: &str = r#"{
    "EPL": { "id": "eng.1", "name": "English Premier League" },
    "mls": { "id": "usa.1", "name": "Major League Soccer" }
}"#;

#[test]
fn bundled_table_parses_and_resolves_known_keys() {
    let competitions = Competitions::bundled();
    let epl = competitions.lookup("epl").expect("epl should be bundled");
    assert_eq!(epl.id, "eng.1");
    assert!(competitions.lookup("ucl").is_some());
}

#[test]
fn lookup_is_case_insensitive() {
    let competitions = Competitions::from_json(SMALL_TABLE).expect("table should parse");
    let lower = competitions.lookup("mls").expect("lowercase lookup");
    let upper = competitions.lookup("MLS").expect("uppercase lookup");
    assert_eq!(lower.id, upper.id);

    // Keys are normalized at load time too.
    assert_eq!(competitions.lookup("epl").expect("epl").id, "eng.1");
}

#[test]
fn unknown_key_resolves_to_none() {
    let competitions = Competitions::from_json(SMALL_TABLE).expect("table should parse");
    assert!(competitions.lookup("premierleague").is_none());
}

#[test]
fn listing_is_sorted_with_bold_keys() {
    let style = Mirc;
    let competitions = Competitions::from_json(SMALL_TABLE).expect("table should parse");
    let listing = competitions.list(&style);

    assert_eq!(listing.len(), 2);
    assert_eq!(
        listing[0],
        format!("{} (English Premier League)", style.bold("epl"))
    );
    assert_eq!(
        listing[1],
        format!("{} (Major League Soccer)", style.bold("mls"))
    );
}

#[test]
fn malformed_table_is_an_error() {
    assert!(Competitions::from_json("not json").is_err());
}
