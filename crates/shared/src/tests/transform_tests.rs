use super::*;
use crate::domain::ListItem;
use crate::roster::{scored_players, RANJI_TROPHY_PLAYERS, SCORE_THRESHOLD, T20_PLAYERS};

#[test]
fn below_score_keeps_only_strictly_lower_scores_in_order() {
    let players = scored_players();
    let filtered = below_score(&players, SCORE_THRESHOLD);

    let scores: Vec<u32> = filtered.iter().map(|p| p.score).collect();
    assert_eq!(scores, vec![60, 50, 40, 65, 55]);
    let keys: Vec<String> = filtered.iter().map(ListItem::key).collect();
    assert_eq!(keys, vec!["Rohit", "Gill", "Bumrah", "Pant", "Shami"]);
}

#[test]
fn below_score_omits_nothing_that_qualifies() {
    let players = scored_players();
    let filtered = below_score(&players, SCORE_THRESHOLD);

    assert!(filtered.iter().all(|p| p.score < SCORE_THRESHOLD));
    let qualifying = players.iter().filter(|p| p.score < SCORE_THRESHOLD).count();
    assert_eq!(filtered.len(), qualifying);
}

fn roster(scores: &[u32]) -> Vec<Player> {
    scores
        .iter()
        .enumerate()
        .map(|(i, score)| Player::new(format!("p{i}"), *score))
        .collect()
}

#[test]
fn below_score_matches_predicate_on_generated_rosters() {
    let mut cases: Vec<Vec<u32>> = vec![
        vec![],
        vec![70; 6],
        vec![0, 12, 69, 45],
        vec![80, 60, 75, 50, 90, 40, 65, 85, 70, 55, 95],
        vec![100, 71, 70],
    ];
    // Deterministic pseudo-random rosters of growing length.
    let mut seed = 7u32;
    for len in 1..40 {
        let scores = (0..len)
            .map(|_| {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                (seed >> 16) % 141
            })
            .collect();
        cases.push(scores);
    }

    for scores in cases {
        let players = roster(&scores);
        let before = players.clone();
        let filtered = below_score(&players, SCORE_THRESHOLD);

        assert!(filtered.iter().all(|p| p.score < SCORE_THRESHOLD));
        let expected: Vec<Player> = players
            .iter()
            .filter(|p| p.score < SCORE_THRESHOLD)
            .cloned()
            .collect();
        assert_eq!(filtered, expected, "scores {scores:?}");
        assert_eq!(players, before);
    }
}

#[test]
fn threshold_boundary_is_excluded() {
    let players = vec![Player::new("Surya", 70), Player::new("Pant", 69)];
    let filtered = below_score(&players, 70);
    assert_eq!(filtered, vec![Player::new("Pant", 69)]);
}

#[test]
fn filter_leaves_input_untouched() {
    let input = vec![3, 8, 1, 9];
    let before = input.clone();
    let out = filter_by(&input, |n| *n > 2);
    assert_eq!(out, vec![3, 8, 9]);
    assert_eq!(input, before);
}

#[test]
fn merge_concatenates_squads() {
    let merged = merge(&T20_PLAYERS, &RANJI_TROPHY_PLAYERS);
    assert_eq!(merged.len(), 10);
    assert_eq!(merged[0], "Virat");
    assert_eq!(merged[5], "Pujara");
    assert_eq!(merged[9], "Jadeja");
}

#[test]
fn parity_split_of_merged_squads() {
    let merged = merge(&T20_PLAYERS, &RANJI_TROPHY_PLAYERS);
    let split = partition_by_parity(&merged);

    assert_eq!(split.odd, vec!["Rohit", "Pant", "Pujara", "Iyer", "Jadeja"]);
    assert_eq!(split.even, vec!["Virat", "Bumrah", "Surya", "Rahane", "Saha"]);
}

#[test]
fn parity_split_conserves_length_and_order() {
    for len in 0..9 {
        let input: Vec<usize> = (0..len).map(|n| n * 10).collect();
        let split = partition_by_parity(&input);

        assert_eq!(split.odd.len() + split.even.len(), input.len());
        assert_eq!(split.even.len(), len.div_ceil(2));
        assert_eq!(split.rejoin(), input);
    }
}

#[test]
fn parity_split_of_empty_input_is_empty() {
    let split = partition_by_parity::<u8>(&[]);
    assert!(split.odd.is_empty());
    assert!(split.even.is_empty());
}
