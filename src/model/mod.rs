pub mod fixture;
pub mod scoreboard;
pub mod standings;
pub mod table;
