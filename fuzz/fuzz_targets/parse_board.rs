#![no_main]
use libfuzzer_sys::fuzz_target;
use noughts::game::board::Board;
use pretty_assertions::assert_eq;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(board) = Board::try_from(input) else {
        return;
    };
    // Printing the board back produces the canonical notation.
    assert_eq!(Board::from_notation(&board.to_string()).unwrap(), board);
});
