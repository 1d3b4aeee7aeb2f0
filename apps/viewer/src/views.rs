use std::io::{self, Write};

use anyhow::{Context, Result};
use client_core::{display_section, CollectionSource, ItemDisplay, ListContainer, LoadState};
use shared::{
    domain::{Post, PostId},
    roster::{scored_players, RANJI_TROPHY_PLAYERS, SCORE_THRESHOLD, T20_PLAYERS},
    transform::{below_score, merge, partition_by_parity},
};

/// One loaded post by id. A failed or pending load renders as usual; a loaded
/// collection with no post matching `id` is an error.
pub fn single_post<S>(container: &ListContainer<S>, id: PostId, out: &mut dyn Write) -> Result<()>
where
    S: CollectionSource<Item = Post>,
{
    if let LoadState::Loaded(_) = container.state() {
        let post = container
            .state()
            .find(&id)
            .with_context(|| format!("no post with id {}", id.0))?;
        post.display(out)?;
        return Ok(());
    }
    container.render(out).context("failed to render posts")
}

pub fn players(out: &mut dyn Write) -> io::Result<()> {
    let players = scored_players();
    display_section("All Players", &players, out)?;
    display_section(
        &format!("Players with score below {SCORE_THRESHOLD}"),
        &below_score(&players, SCORE_THRESHOLD),
        out,
    )
}

pub fn teams(out: &mut dyn Write) -> io::Result<()> {
    let merged = merge(&T20_PLAYERS, &RANJI_TROPHY_PLAYERS);
    let split = partition_by_parity(&merged);
    display_section("Merged Players", &merged, out)?;
    display_section("Odd Team", &split.odd, out)?;
    display_section("Even Team", &split.even, out)
}
