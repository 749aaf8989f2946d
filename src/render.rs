//! Board views: the global board and the fog-of-war view of one player.

use crate::command::PrintMode;
use crate::game::Game;
use crate::geometry::Point;
use crate::player::PlayerId;
use crate::ship::ShipElement;

pub const EMPTY: char = ' ';
pub const HULL: char = '+';
pub const SENSOR: char = '@';
pub const CANNON: char = '!';
pub const ENGINE: char = '%';
pub const HIT: char = 'x';
pub const REEF: char = '#';
pub const FOG: char = '?';

/// `true` when `viewer` can see cell `p`: own hull, radar cover of a placed
/// own ship, or the 3×3 area under one of its spy planes.
pub fn is_visible_to(game: &Game, viewer: PlayerId, p: Point) -> bool {
    game.player(viewer).ships().filter(|s| s.placed).any(|ship| {
        ship.segments().any(|(_, cell)| cell == p)
            || ship.head.dist_sq(p) <= ship.radar_range_sq()
            || ship.spy_planes.iter().any(|plane| plane.chebyshev(p) <= 1)
    })
}

fn hull_glyph(game: &Game, el: &ShipElement, mode: PrintMode) -> char {
    let Some(ship) = game.ship(el.ship) else {
        return HULL;
    };
    if ship.damage.is_hit(el.offset) {
        return HIT;
    }
    if mode == PrintMode::Plain {
        return HULL;
    }
    if el.offset == 0 {
        SENSOR
    } else if el.offset == ship.size() - 1 {
        ENGINE
    } else if el.offset == 1 {
        CANNON
    } else {
        HULL
    }
}

/// Glyph grid of the whole board with nothing hidden.
pub fn board_cells(game: &Game, mode: PrintMode) -> Vec<Vec<char>> {
    let rows = game.rows.max(0) as usize;
    let cols = game.cols.max(0) as usize;
    let mut cells = vec![vec![EMPTY; cols]; rows];
    for reef in &game.reefs {
        if game.in_bounds(*reef) {
            cells[reef.row as usize][reef.col as usize] = REEF;
        }
    }
    for el in game.elements() {
        if game.in_bounds(el.pos) {
            cells[el.pos.row as usize][el.pos.col as usize] = hull_glyph(game, &el, mode);
        }
    }
    cells
}

/// Glyph grid as seen by `viewer`. Reefs are never fogged.
pub fn player_cells(game: &Game, viewer: PlayerId, mode: PrintMode) -> Vec<Vec<char>> {
    let mut cells = board_cells(game, mode);
    for (r, row) in cells.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            if *cell != REEF && !is_visible_to(game, viewer, Point::new(r as i32, c as i32)) {
                *cell = FOG;
            }
        }
    }
    cells
}

fn digits(mut n: usize) -> usize {
    let mut len = 1;
    while n >= 10 {
        n /= 10;
        len += 1;
    }
    len
}

/// Lay out a glyph grid, with coordinate headers in detailed mode.
pub fn format_grid(cells: &[Vec<char>], mode: PrintMode) -> Vec<String> {
    if mode == PrintMode::Plain {
        return cells.iter().map(|row| row.iter().collect()).collect();
    }

    let rows = cells.len();
    let cols = cells.first().map_or(0, Vec::len);
    let col_width = digits(cols.saturating_sub(1));
    let row_width = digits(rows.saturating_sub(1));
    let labels: Vec<Vec<char>> = (0..cols)
        .map(|c| format!("{:0w$}", c, w = col_width).chars().collect())
        .collect();

    let mut out = Vec::with_capacity(col_width + rows);
    for line in 0..col_width {
        let mut s = " ".repeat(row_width);
        s.extend(labels.iter().map(|label| label[line]));
        out.push(s);
    }
    for (r, row) in cells.iter().enumerate() {
        let mut s = format!("{:0w$}", r, w = row_width);
        s.extend(row.iter());
        out.push(s);
    }
    out
}

/// `PRINT` inside `[state]`: full board plus the remaining-parts summary.
pub fn state_view(game: &Game, mode: PrintMode) -> Vec<String> {
    let mut out = format_grid(&board_cells(game, mode), mode);
    out.push(format!(
        "PARTS REMAINING:: A : {} B : {}",
        game.player(PlayerId::A).remaining_parts(),
        game.player(PlayerId::B).remaining_parts()
    ));
    out
}

/// `PRINT` inside a player group: fog-of-war view.
pub fn player_view(game: &Game, viewer: PlayerId, mode: PrintMode) -> Vec<String> {
    format_grid(&player_cells(game, viewer, mode), mode)
}
