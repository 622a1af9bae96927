//! Commands of the line-based text protocol. The shape is borrowed from the
//! [Universal Chess Interface]: a handshake, board setup, a search request and
//! an answer in the form of `bestmove`.
//!
//! [Universal Chess Interface]: https://www.chessprogramming.org/UCI

#[derive(Debug, PartialEq, Eq)]
pub(super) enum Command {
    Id,
    IsReady,
    NewGame,
    SetPosition {
        board: Option<String>,
        moves: Vec<String>,
    },
    Play {
        action: String,
    },
    Go,
    Show,
    Quit,
    Unknown(String),
}

fn parse_setposition(parts: &[&str]) -> Command {
    let moves_index = parts.iter().position(|&x| x == "moves");
    let setup = &parts[1..moves_index.unwrap_or(parts.len())];
    let board = match setup {
        ["startpos"] => None,
        [notation] => Some((*notation).to_string()),
        _ => return Command::Unknown(parts.join(" ")),
    };
    let moves = moves_index.map_or_else(Vec::new, |moves_index| {
        parts[moves_index + 1..]
            .iter()
            .map(|s| (*s).to_string())
            .collect()
    });
    Command::SetPosition { board, moves }
}

impl Command {
    pub(super) fn parse(input: &str) -> Self {
        let parts: Vec<&str> = input.split_whitespace().collect();

        let Some(&command) = parts.first() else {
            return Self::Unknown(input.trim().to_string());
        };

        match command {
            "id" => Self::Id,
            "isready" => Self::IsReady,
            "new" => Self::NewGame,
            "position" => parse_setposition(&parts),
            "play" if parts.len() > 1 => Self::Play {
                action: parts[1..].join(" "),
            },
            "go" => Self::Go,
            "show" | "d" => Self::Show,
            "quit" => Self::Quit,
            _ => Self::Unknown(input.trim().to_string()),
        }
    }
}
