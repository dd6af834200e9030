use crate::domain::{Game, MetaGame};
use std::cmp::Reverse;

/// Folds a game's sub-games into its [`MetaGame`].
///
/// Missing playtime and launch times count as zero. Archived sub-games are
/// counted like active ones. The sum saturates, so the result never depends
/// on sub-game order.
pub fn summarize(game: &Game) -> MetaGame {
    let (playtime, last_launch) = game.sub_games().iter().fold(
        (0u64, 0u64),
        |(playtime, last_launch), sub_game| {
            (
                playtime.saturating_add(sub_game.playtime_or_zero()),
                last_launch.max(sub_game.last_launch_or_zero()),
            )
        },
    );

    MetaGame::new(game.id(), game.name().to_string(), playtime, last_launch)
}

/// Summaries for a whole library, most recently launched first.
///
/// Games that were never launched go last, ordered by name.
pub fn summarize_library(games: &[Game]) -> Vec<MetaGame> {
    let mut summaries: Vec<MetaGame> = games.iter().map(summarize).collect();
    summaries.sort_by(|a, b| {
        Reverse(a.last_launch())
            .cmp(&Reverse(b.last_launch()))
            .then_with(|| a.name().cmp(b.name()))
            .then_with(|| a.id().cmp(&b.id()))
    });
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SubGame;
    use crate::error::Result;
    use serde_json::json;

    fn sample_game() -> Result<Game> {
        Game::new(
            1,
            "X",
            vec![
                SubGame::new(10, "Base").with_playtime(100).with_last_launch(50),
                SubGame::new(11, "DLC").with_last_launch(200),
            ],
        )
    }

    #[test]
    fn sums_playtime_and_takes_latest_launch() -> Result<()> {
        let summary = summarize(&sample_game()?);
        assert_eq!(summary.id(), 1);
        assert_eq!(summary.name(), "X");
        assert_eq!(summary.playtime(), 100);
        assert_eq!(summary.last_launch(), 200);
        assert!(!summary.never_launched());
        Ok(())
    }

    #[test]
    fn scenario_from_json_with_null_playtime() -> Result<()> {
        let game = Game::from_json_value(json!({
            "id": 1,
            "name": "X",
            "subgames": [
                {"id": 1, "name": "a", "playtime": 100, "last_launch": 50},
                {"id": 2, "name": "b", "playtime": null, "last_launch": 200}
            ]
        }))?;
        let summary = MetaGame::from(&game);
        assert_eq!((summary.playtime(), summary.last_launch()), (100, 200));
        Ok(())
    }

    #[test]
    fn empty_game_is_zero() -> Result<()> {
        let summary = summarize(&Game::new(3, "Empty", vec![])?);
        assert_eq!(summary.playtime(), 0);
        assert_eq!(summary.last_launch(), 0);
        assert!(summary.never_launched());
        Ok(())
    }

    #[test]
    fn order_of_sub_games_does_not_matter() -> Result<()> {
        let subs = vec![
            SubGame::new(1, "a").with_playtime(30).with_last_launch(900),
            SubGame::new(2, "b"),
            SubGame::new(3, "c").with_playtime(u64::MAX).with_archived(true),
            SubGame::new(4, "d").with_playtime(12).with_last_launch(1200),
        ];
        let expected = summarize(&Game::new(9, "P", subs.clone())?);
        assert_eq!(expected.playtime(), u64::MAX);
        assert_eq!(expected.last_launch(), 1200);

        // every rotation and its reverse
        for shift in 0..subs.len() {
            let mut rotated = subs.clone();
            rotated.rotate_left(shift);
            assert_eq!(summarize(&Game::new(9, "P", rotated.clone())?), expected);
            rotated.reverse();
            assert_eq!(summarize(&Game::new(9, "P", rotated)?), expected);
        }
        Ok(())
    }

    #[test]
    fn archived_sub_games_still_count() -> Result<()> {
        let game = Game::new(
            5,
            "Archive",
            vec![
                SubGame::new(1, "old").with_playtime(500).with_last_launch(10).with_archived(true),
                SubGame::new(2, "new").with_playtime(1),
            ],
        )?;
        let summary = summarize(&game);
        assert_eq!(summary.playtime(), 501);
        assert_eq!(summary.last_launch(), 10);
        assert_eq!(summarize(&game), summary);
        Ok(())
    }

    #[test]
    fn library_is_sorted_by_recency() -> Result<()> {
        let games = vec![
            Game::new(1, "Zelda", vec![])?,
            Game::new(2, "Alpha", vec![SubGame::new(20, "a").with_last_launch(100)])?,
            Game::new(3, "Beta", vec![SubGame::new(30, "b").with_last_launch(300)])?,
            Game::new(4, "Azure", vec![])?,
        ];
        let order: Vec<i64> = summarize_library(&games).iter().map(MetaGame::id).collect();
        assert_eq!(order, vec![3, 2, 4, 1]);
        Ok(())
    }
}
