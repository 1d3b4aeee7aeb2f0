use crate::domain::Player;

pub const SCORE_THRESHOLD: u32 = 70;

pub const T20_PLAYERS: [&str; 5] = ["Virat", "Rohit", "Bumrah", "Pant", "Surya"];
pub const RANJI_TROPHY_PLAYERS: [&str; 5] = ["Pujara", "Rahane", "Iyer", "Saha", "Jadeja"];

const SCORED: [(&str, u32); 11] = [
    ("Virat", 80),
    ("Rohit", 60),
    ("Rahul", 75),
    ("Gill", 50),
    ("Jadeja", 90),
    ("Bumrah", 40),
    ("Pant", 65),
    ("Ashwin", 85),
    ("Surya", 70),
    ("Shami", 55),
    ("Kohli", 95),
];

pub fn scored_players() -> Vec<Player> {
    SCORED
        .iter()
        .map(|(name, score)| Player::new(*name, *score))
        .collect()
}
