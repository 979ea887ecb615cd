/// Side length of the square field. Both peers must agree on it out of band.
pub const FIELD_SIZE: usize = 8;

/// Ship lengths of the classic fleet, largest first.
pub const CLASSIC_FLEET: [usize; 10] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total number of ship cells in the classic fleet.
pub const CLASSIC_FLEET_CELLS: usize = 4 + 3 * 2 + 2 * 3 + 4;

/// Length in bytes of a move frame (`[col letter][row digit]`).
pub const MOVE_FRAME_LEN: usize = 2;

/// Length in bytes of a result frame.
pub const RESULT_FRAME_LEN: usize = 1;

// A move frame encodes the row as one ASCII digit starting at '1'.
const _: () = assert!(FIELD_SIZE >= 1 && FIELD_SIZE <= 9);

/// Sum of the ship lengths of `fleet`.
pub const fn fleet_cells(fleet: &[usize]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i];
        i += 1;
    }
    total
}

const _: () = assert!(fleet_cells(&CLASSIC_FLEET) == CLASSIC_FLEET_CELLS);
