use super::*;

#[test]
fn parse_trims_and_drops_empty_entries() {
    assert_eq!(parse("a, b , c"), vec!["a", "b", "c"]);
    assert_eq!(parse("erro,, sistema ,"), vec!["erro", "sistema"]);
    assert_eq!(parse(""), Vec::<String>::new());
    assert_eq!(parse(" , ,"), Vec::<String>::new());
}

#[test]
fn join_produces_editable_form_value() {
    let tags = vec!["a".to_owned(), "b".to_owned()];
    assert_eq!(join(&tags), "a, b");
    assert_eq!(join(&[]), "");
}

#[test]
fn round_trip_is_stable() {
    let parsed = parse("a, b , c");
    assert_eq!(parse(&join(&parsed)), parsed);
}
