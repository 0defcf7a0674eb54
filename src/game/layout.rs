//! Static board data. Tile ids: ring 0..24 in travel order, finish lanes 24..32
//! (two per team, in turn order), spawn tiles 32..48.

use crate::game::{Team, TeamId, Tile, TileId, TileKind, team::{TEAM_COUNT, TEAM_SIZE}};

pub const BOARD_SIZE: f32 = 400.0;
pub const TILE_SIZE: f32 = 46.0;
pub const TILE_SPACING: f32 = 13.0;
pub const RING_LEN: usize = 24;
pub const TILE_COUNT: usize = 48;

const CELL: f32 = TILE_SIZE + TILE_SPACING;

/// Grid cell (column, row) and color of each ring tile.
const RING: [(u8, u8, TeamId); RING_LEN] = {
    use TeamId::*;
    [
        (2, 6, Red), (2, 5, Green), (2, 4, Blue), (1, 4, Yellow), (0, 4, Red), (0, 3, Green),
        (0, 2, Green), (1, 2, Blue), (2, 2, Yellow), (2, 1, Red), (2, 0, Green), (3, 0, Blue),
        (4, 0, Blue), (4, 1, Yellow), (4, 2, Red), (5, 2, Green), (6, 2, Blue), (6, 3, Yellow),
        (6, 4, Yellow), (5, 4, Red), (4, 4, Green), (4, 5, Blue), (4, 6, Yellow), (3, 6, Red),
    ]
};

struct TeamLayout {
    entry: u8,
    branch: u8,
    /// Grid cells of the finish lane, terminal last.
    lane: [(u8, u8); 2],
    /// Spawn tile ids with their board position, in fill order.
    spawns: [(u8, f32, f32); TEAM_SIZE],
}

const FAR: f32 = BOARD_SIZE - TILE_SIZE;
const NEAR: f32 = BOARD_SIZE - 2.0 * TILE_SIZE;

static TEAMS: [TeamLayout; TEAM_COUNT] = [
    TeamLayout {
        entry: 0,
        branch: 23,
        lane: [(3, 5), (3, 4)],
        spawns: [(37, 0.0, NEAR), (38, TILE_SIZE, NEAR), (32, 0.0, FAR), (36, TILE_SIZE, FAR)],
    },
    TeamLayout {
        entry: 6,
        branch: 5,
        lane: [(1, 3), (2, 3)],
        spawns: [(33, 0.0, 0.0), (39, TILE_SIZE, 0.0), (40, 0.0, TILE_SIZE), (41, TILE_SIZE, TILE_SIZE)],
    },
    TeamLayout {
        entry: 12,
        branch: 11,
        lane: [(3, 1), (3, 2)],
        spawns: [(43, NEAR, 0.0), (34, FAR, 0.0), (44, NEAR, TILE_SIZE), (42, FAR, TILE_SIZE)],
    },
    TeamLayout {
        entry: 18,
        branch: 17,
        lane: [(5, 3), (4, 3)],
        spawns: [(47, NEAR, NEAR), (46, FAR, NEAR), (45, NEAR, FAR), (35, FAR, FAR)],
    },
];

fn cell((column, row): (u8, u8)) -> (f32, f32) {
    (column as f32 * CELL, row as f32 * CELL)
}

/// Builds the tile arena (indexed by [`TileId`]) and the four teams.
pub fn build() -> (Vec<Tile>, [Team; TEAM_COUNT]) {
    let mut tiles = Vec::with_capacity(TILE_COUNT);

    for (i, &(column, row, team)) in RING.iter().enumerate() {
        let next = TileId(((i + 1) % RING_LEN) as u8);
        tiles.push(Tile::new(TileId(i as u8), TileKind::Ring, Some(next), cell((column, row)), TILE_SIZE, team.color()));
    }

    let lane_start = |team: usize| TileId((RING_LEN + 2 * team) as u8);

    for (t, layout) in TEAMS.iter().enumerate() {
        let team = TeamId::from_index(t);
        let first = lane_start(t);
        let last = TileId(first.0 + 1);
        tiles.push(Tile::new(first, TileKind::Finish, Some(last), cell(layout.lane[0]), TILE_SIZE, team.color()));
        tiles.push(Tile::new(last, TileKind::Finish, None, cell(layout.lane[1]), TILE_SIZE, team.color()));

        let branch = &mut tiles[layout.branch as usize];
        *branch = branch.with_lane(team, first);
    }

    let mut spawns = TEAMS
        .iter()
        .enumerate()
        .flat_map(|(t, layout)| {
            let team = TeamId::from_index(t);
            layout.spawns.iter().map(move |&(id, x, y)| {
                Tile::new(TileId(id), TileKind::Spawn, Some(TileId(layout.entry)), (x, y), TILE_SIZE, team.color())
            })
        })
        .collect::<Vec<_>>();
    spawns.sort_by_key(|tile| tile.id());
    tiles.extend(spawns);

    let teams = std::array::from_fn(|t| {
        let layout = &TEAMS[t];
        let first = lane_start(t);
        Team::new(
            TeamId::from_index(t),
            layout.spawns.map(|(id, _, _)| TileId(id)),
            TileId(layout.entry),
            TileId(layout.branch),
            [first, TileId(first.0 + 1)],
        )
    });

    (tiles, teams)
}
