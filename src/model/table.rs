/// One standings entry, kept as the display strings the feed provides.
/// The source array order is the ranking order; rows are never re-sorted.
#[derive(Debug, Clone)]
pub struct TableRow {
    pub position: String,
    pub team: String,
    pub games_played: String,
    /// Signed as displayed: first character is '+', '-', or a digit.
    pub goal_difference: String,
    pub points: String,
}
