use soccer_scores_lambda_rust::say::pack;

fn items(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

#[test]
fn no_items_means_no_messages() {
    assert!(pack(&[], ", ", 400).is_empty());
}

#[test]
fn everything_under_budget_fits_in_one_message() {
    let messages = pack(&items(&["aaa", "bbb", "ccc"]), ", ", 400);
    assert_eq!(messages, vec!["aaa, bbb, ccc".to_string()]);
}

#[test]
fn overflow_splits_at_item_boundaries_only() {
    let input = items(&[
        "item0", "item1", "item2", "item3", "item4", "item5", "item6", "item7",
    ]);
    // Each item is 5 long, so a budget of 12 fits two items per message.
    let messages = pack(&input, ", ", 12);

    assert_eq!(messages.len(), 4);
    for message in &messages {
        assert_eq!(message.len(), "item0, item1".len(), "message was: {}", message);
    }
}

#[test]
fn packing_preserves_every_item_in_order() {
    let input = items(&[
        "item0", "item1", "item2", "item3", "item4", "item5", "item6", "item7",
    ]);
    let messages = pack(&input, ", ", 12);

    let flattened: Vec<&str> = messages
        .iter()
        .flat_map(|message| message.split(", "))
        .collect();
    assert_eq!(flattened, input.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn an_item_over_budget_is_still_emitted_whole() {
    let long = "x".repeat(50);
    let messages = pack(&items(&[&long]), ", ", 10);
    assert_eq!(messages, vec![long]);
}

#[test]
fn an_oversized_item_does_not_drop_its_neighbors() {
    let long = "x".repeat(50);
    let messages = pack(&items(&["aa", &long, "bb"]), ", ", 10);
    assert_eq!(messages, vec!["aa".to_string(), long, "bb".to_string()]);
}

#[test]
fn separators_do_not_count_toward_the_budget() {
    let wide = "w".repeat(100);
    let input = items(&[&wide, &wide, &wide, &wide]);
    let messages = pack(&input, " | ", 400);

    // Sum of item lengths is exactly the budget, so the joined message is
    // allowed to run over by the separators.
    assert_eq!(messages.len(), 1);
    assert!(messages[0].len() > 400, "length was: {}", messages[0].len());
}
