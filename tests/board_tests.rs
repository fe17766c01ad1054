use seabattle::{
    AttackBoard, AttackCell, BitGrid, BitGridError, Coord, Direction, ShipBoard, ShipCell,
};

#[test]
fn bitgrid_set_get_clear() {
    let mut grid: BitGrid<u128, 10> = BitGrid::new();
    assert!(grid.is_empty());
    assert_eq!(grid.get(0, 0), Ok(false));
    grid.set(0, 0).unwrap();
    grid.set(9, 9).unwrap();
    assert_eq!(grid.get(0, 0), Ok(true));
    assert_eq!(grid.get(9, 9), Ok(true));
    assert_eq!(grid.count_ones(), 2);
    grid.clear(0, 0).unwrap();
    assert_eq!(grid.get(0, 0), Ok(false));
    assert_eq!(grid.count_ones(), 1);
}

#[test]
fn bitgrid_rejects_out_of_bounds() {
    let mut grid: BitGrid<u128, 10> = BitGrid::new();
    assert_eq!(
        grid.get(10, 0),
        Err(BitGridError::IndexOutOfBounds { row: 10, col: 0 })
    );
    assert_eq!(
        grid.set(0, 10),
        Err(BitGridError::IndexOutOfBounds { row: 0, col: 10 })
    );
}

#[test]
fn coord_from_letter_number() {
    let coord = Coord::from_letter_number('a', 5).unwrap();
    assert_eq!((coord.row(), coord.col()), (0, 4));
    assert_eq!(coord.to_string(), "A5");

    let coord = Coord::from_letter_number('J', 10).unwrap();
    assert_eq!((coord.row(), coord.col()), (9, 9));
    assert_eq!(coord.to_string(), "J10");

    let errors = Coord::from_letter_number('K', 0).unwrap_err();
    assert_eq!(errors.len(), 2);
}

#[test]
fn coord_neighbors_respect_bounds() {
    let corner = Coord::new(0, 0).unwrap();
    assert_eq!(corner.neighbors().count(), 3);
    let edge = Coord::new(0, 5).unwrap();
    assert_eq!(edge.neighbors().count(), 5);
    let middle = Coord::new(5, 5).unwrap();
    assert_eq!(middle.neighbors().count(), 8);
}

#[test]
fn coord_offset_leaves_board() {
    let corner = Coord::new(0, 0).unwrap();
    assert_eq!(corner.offset(-1, 0), None);
    assert_eq!(corner.offset(0, 1), Coord::new(0, 1));
    assert_eq!(Coord::new(9, 9).unwrap().offset(1, 0), None);
}

#[test]
fn direction_parsing() {
    assert_eq!(Direction::from_char('r'), Some(Direction::Right));
    assert_eq!(Direction::from_char('L'), Some(Direction::Left));
    assert_eq!(Direction::from_char('d'), Some(Direction::Down));
    assert_eq!(Direction::from_char('U'), Some(Direction::Up));
    assert_eq!(Direction::from_char('Q'), None);
}

#[test]
fn ship_board_cell_read_write() {
    let mut board = ShipBoard::new();
    let coord = Coord::new(3, 4).unwrap();
    assert_eq!(board.get(coord), ShipCell::Empty);
    board.set(coord, ShipCell::Ship);
    assert_eq!(board.get(coord), ShipCell::Ship);
    assert_eq!(board.ship_cells(), 1);
    board.set(coord, ShipCell::Empty);
    assert!(board.is_empty());
}

#[test]
fn attack_board_cell_read_write() {
    let mut board = AttackBoard::new();
    let hit = Coord::new(0, 0).unwrap();
    let miss = Coord::new(9, 9).unwrap();
    board.set(hit, AttackCell::Hit);
    board.set(miss, AttackCell::Miss);
    assert_eq!(board.get(hit), AttackCell::Hit);
    assert_eq!(board.get(miss), AttackCell::Miss);
    assert_eq!(board.get(Coord::new(5, 5).unwrap()), AttackCell::Empty);
    assert_eq!(board.hit_cells(), 1);
    assert_eq!(board.attacked_cells(), 2);
}

#[test]
fn cell_glyphs_roundtrip() {
    for cell in [ShipCell::Empty, ShipCell::Ship] {
        assert_eq!(ShipCell::from_glyph(cell.glyph()), Some(cell));
    }
    for cell in [AttackCell::Empty, AttackCell::Hit, AttackCell::Miss] {
        assert_eq!(AttackCell::from_glyph(cell.glyph()), Some(cell));
    }
    assert_eq!(ShipCell::from_glyph('?'), None);
    assert_eq!(AttackCell::from_glyph('?'), None);
}
