#![no_main]
use libfuzzer_sys::fuzz_target;
use noughts::game::board::Board;
use noughts::search;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(board) = Board::try_from(input) else {
        return;
    };
    match search::minimax(&board) {
        Some(action) => {
            assert!(!board.is_terminal());
            assert!(board.actions().contains(&action));
            assert!(board.result(action).is_ok());
        },
        None => assert!(board.is_terminal() || board.player().is_none()),
    }
});
