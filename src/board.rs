const BOARD_SIZE: usize = 8;
const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;
const COLUMN_LETTERS: [char; BOARD_SIZE] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Disc color; also identifies the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opposite(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// Wire code used by the wasm DTOs: black=1, white=2.
    pub fn as_u8(self) -> u8 {
        match self {
            Self::Black => 1,
            Self::White => 2,
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Black),
            2 => Some(Self::White),
            _ => None,
        }
    }
}

/// Occupancy of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// Wire code used by the wasm DTOs: 0=empty, 1=black, 2=white.
    pub fn as_u8(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Black => 1,
            Self::White => 2,
        }
    }
}

/// A legal placement together with the discs it captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Board index, `row * 8 + col`.
    pub pos: usize,
    /// Bit mask of the captured squares; never zero for a legal move.
    pub flips: u64,
}

impl Move {
    pub fn row(&self) -> usize {
        self.pos / BOARD_SIZE
    }

    pub fn col(&self) -> usize {
        self.pos % BOARD_SIZE
    }

    pub fn flip_count(&self) -> u32 {
        self.flips.count_ones()
    }
}

/// Othello board state represented by two bitboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Board {
    /// Creates the initial board:
    /// D4=white, E4=black, D5=black, E5=white.
    pub fn new() -> Self {
        Self {
            black: bit(28) | bit(35),
            white: bit(27) | bit(36),
        }
    }

    pub fn from_bitboards(black: u64, white: u64) -> Self {
        debug_assert_eq!(black & white, 0, "a square cannot hold two discs");
        Self { black, white }
    }

    /// Flip mask for placing at `pos`. Zero when the square is occupied or
    /// no ray captures, i.e. when the placement is illegal.
    pub fn flips_for(&self, pos: usize, player: Player) -> u64 {
        let (me, opp) = self.sides(player);
        Self::collect_flips(pos, me, opp)
    }

    /// Legal placements for `player` with their flip masks, in row-major
    /// scan order. That order is the tie-break order for every selection
    /// rule downstream, so it must stay stable.
    pub fn valid_moves(&self, player: Player) -> Vec<Move> {
        let (me, opp) = self.sides(player);
        let occupied = me | opp;
        let mut moves = Vec::new();

        for pos in 0..NUM_SQUARES {
            if (occupied & bit(pos)) != 0 {
                continue;
            }
            let flips = Self::collect_flips(pos, me, opp);
            if flips != 0 {
                moves.push(Move { pos, flips });
            }
        }

        moves
    }

    pub fn has_legal_move(&self, player: Player) -> bool {
        let (me, opp) = self.sides(player);
        let occupied = me | opp;
        (0..NUM_SQUARES)
            .any(|pos| (occupied & bit(pos)) == 0 && Self::collect_flips(pos, me, opp) != 0)
    }

    /// Places one disc and flips captured discs.
    /// Returns the flip mask, which doubles as the move record `undo` takes.
    /// Returns 0 and leaves the board unchanged when the move is illegal.
    pub fn place(&mut self, pos: usize, player: Player) -> u64 {
        let (me, opp) = self.sides(player);

        let flips = Self::collect_flips(pos, me, opp);
        if flips == 0 {
            return 0;
        }

        let move_bit = bit(pos);
        let next_me = me | move_bit | flips;
        let next_opp = opp & !flips;

        match player {
            Player::Black => {
                self.black = next_me;
                self.white = next_opp;
            }
            Player::White => {
                self.white = next_me;
                self.black = next_opp;
            }
        }

        flips
    }

    /// Reverts a `place` given its move record.
    pub fn undo(&mut self, pos: usize, flips: u64, player: Player) {
        let move_bit = bit(pos);
        match player {
            Player::Black => {
                self.black &= !(move_bit | flips);
                self.white |= flips;
            }
            Player::White => {
                self.white &= !(move_bit | flips);
                self.black |= flips;
            }
        }
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.black.count_ones() as u8, self.white.count_ones() as u8)
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        let (black_count, white_count) = self.count();
        NUM_SQUARES as u8 - black_count - white_count
    }

    /// Occupancy of one square by board index.
    pub fn cell(&self, pos: usize) -> Cell {
        let square = bit(pos);
        if (self.black & square) != 0 {
            Cell::Black
        } else if (self.white & square) != 0 {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (pos, cell) in board.iter_mut().enumerate() {
            *cell = self.cell(pos).as_u8();
        }
        board
    }

    fn sides(&self, player: Player) -> (u64, u64) {
        match player {
            Player::Black => (self.black, self.white),
            Player::White => (self.white, self.black),
        }
    }

    fn collect_flips(pos: usize, me: u64, opp: u64) -> u64 {
        if pos >= NUM_SQUARES {
            return 0;
        }

        let move_bit = bit(pos);
        if ((me | opp) & move_bit) != 0 {
            return 0;
        }

        let (row, col) = pos_to_row_col(pos);
        let mut flips = 0u64;

        for (dr, dc) in DIRECTIONS {
            let mut r = row + dr;
            let mut c = col + dc;
            let mut line = 0u64;
            let mut has_opponent = false;

            while in_bounds(r, c) {
                let square = bit((r as usize) * BOARD_SIZE + c as usize);
                if (opp & square) != 0 {
                    has_opponent = true;
                    line |= square;
                } else if (me & square) != 0 {
                    if has_opponent {
                        flips |= line;
                    }
                    break;
                } else {
                    break;
                }

                r += dr;
                c += dc;
            }
        }

        flips
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Chess-style label of a square: column letter then 1-based row,
/// so index 0 is "A1" and index 63 is "H8".
pub fn square_label(pos: usize) -> String {
    let row = pos / BOARD_SIZE;
    let col = pos % BOARD_SIZE;
    format!("{}{}", COLUMN_LETTERS[col], row + 1)
}

fn bit(pos: usize) -> u64 {
    if pos < NUM_SQUARES { 1u64 << pos } else { 0 }
}

fn pos_to_row_col(pos: usize) -> (i32, i32) {
    ((pos / BOARD_SIZE) as i32, (pos % BOARD_SIZE) as i32)
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}
