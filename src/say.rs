/// Greedy packing of display items into chat-sized messages.
///
/// Items are atomic: one never spans two messages, and an item longer than
/// the budget still goes out whole as its own message. The budget applies
/// to the sum of item lengths only; separators are not counted, matching
/// the packing boundaries downstream consumers already rely on.
pub fn pack(items: &[String], separator: &str, max_len: usize) -> Vec<String> {
    if items.is_empty() {
        return Vec::new();
    }

    let total: usize = items.iter().map(|item| item.len()).sum();
    if total < max_len {
        return vec![items.join(separator)];
    }

    let mut messages = Vec::new();
    let mut group: Vec<&str> = Vec::new();
    let mut group_len = 0;
    for item in items {
        if group_len + item.len() <= max_len {
            group.push(item.as_str());
            group_len += item.len();
        } else {
            if !group.is_empty() {
                messages.push(group.join(separator));
            }
            group.clear();
            group.push(item.as_str());
            group_len = item.len();
        }
    }
    if !group.is_empty() {
        messages.push(group.join(separator));
    }
    messages
}
