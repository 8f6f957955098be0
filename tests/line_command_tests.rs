//! Line front-end: the real game loop fed from an in-memory input.

use std::io::Cursor;

use tui_klondike::core::{GameState, Pile};
use tui_klondike::engine::GameSession;
use tui_klondike::input::{parse_command, ParseError};
use tui_klondike::journal::{Finish, Journal};
use tui_klondike::line_game;
use tui_klondike::types::{Card, Rank, Suit, NUM_COLUMNS, RANKS_PER_SUIT};

struct Transcript {
    finish: Finish,
    /// Status shown in each prompt after the first.
    statuses: Vec<String>,
    text: String,
}

fn play_with(session: &mut GameSession, journal: &mut Journal, input: &[u8]) -> Transcript {
    let mut out = Vec::new();
    let finish = line_game::run(&mut Cursor::new(input), &mut out, session, journal).unwrap();
    let text = String::from_utf8(out).unwrap();

    let statuses = text
        .split("[Turn #")
        .skip(2)
        .filter_map(|chunk| chunk.split_once("> "))
        .filter_map(|(prompt, _)| prompt.split_once("] "))
        .map(|(_, status)| status.to_string())
        .collect();
    Transcript {
        finish,
        statuses,
        text,
    }
}

fn play(session: &mut GameSession, input: &[u8]) -> Transcript {
    play_with(session, &mut Journal::disabled(), input)
}

#[test]
fn buy_and_blank_line_repeat() {
    let mut session = GameSession::new(4);
    let run = play(&mut session, b"buy\n\n   \n");

    assert_eq!(run.finish, Finish::Quit);
    assert_eq!(run.statuses, vec!["", "", ""]);
    assert_eq!(session.state().poll().len(), 9);
    assert_eq!(session.state().deck().len(), 15);
    assert_eq!(session.turns(), 3);
}

#[test]
fn errors_show_on_the_prompt() {
    let mut session = GameSession::new(4);
    let input = [
        "dance",
        "collect col 9",
        "move fnd 1 to col 1",
        "move seq ZZ to col 1",
        "collect poll",
    ]
    .join("\n");
    let run = play(&mut session, input.as_bytes());

    assert_eq!(
        run.statuses,
        vec![
            "Unknown command!",
            "Invalid column number!",
            "That foundation is empty!",
            "Invalid card!",
            "Poll is empty!",
        ]
    );
    assert!(run.text.contains("[Turn #0] Poll is empty!> "));
    assert_eq!(session.turns(), 0);
}

#[test]
fn bytes_that_are_not_utf8_are_an_unknown_command() {
    let mut session = GameSession::new(5);
    let run = play(&mut session, b"buy\n\xff\xfe\nbuy\nquit\n");

    assert_eq!(run.finish, Finish::Quit);
    assert_eq!(run.statuses, vec!["", "Unknown command!", ""]);
    assert_eq!(session.turns(), 2);
}

#[test]
fn quit_stops_processing() {
    let mut session = GameSession::new(4);
    let run = play(&mut session, b"quit\nbuy\n");

    assert_eq!(run.finish, Finish::Quit);
    assert!(run.statuses.is_empty());
    assert_eq!(session.turns(), 0);
}

#[test]
fn end_of_input_quits() {
    let mut session = GameSession::new(4);
    let run = play(&mut session, b"");
    assert_eq!(run.finish, Finish::Quit);
    assert!(run.text.ends_with("[Turn #0] > \n"));
}

#[test]
fn one_based_columns_reach_the_right_pile() {
    let mut columns: [Pile; NUM_COLUMNS] = Default::default();
    columns[6] = [Card::parse("AS").unwrap()].into_iter().collect();
    columns[0] = [Card::parse("8C").unwrap()].into_iter().collect();
    columns[3] = [Card::parse("9D").unwrap()].into_iter().collect();
    let state = GameState::from_piles(Pile::new(), Pile::new(), Default::default(), columns);
    let mut session = GameSession::from_state(state, 0);

    let run = play(
        &mut session,
        b"collect col 7\nmove seq 8c to col 4\nmove fnd 3 to col 1\n",
    );
    assert_eq!(run.statuses, vec!["", "", "Ranks or Suites not matching!"]);
    assert_eq!(session.state().foundations()[2].len(), 1);
    assert_eq!(session.state().columns()[3].len(), 2);
    assert!(session.state().columns()[0].is_empty());
}

#[test]
fn last_card_wins_and_prints_the_victory_message() {
    let mut foundations = Suit::ALL.map(|suit| {
        (0..RANKS_PER_SUIT)
            .filter_map(Rank::new)
            .map(|rank| Card::new(rank, suit))
            .collect::<Pile>()
    });
    let king = foundations[1].pop().unwrap();
    let state = GameState::from_piles(
        Pile::new(),
        [king].into_iter().collect(),
        foundations,
        Default::default(),
    );
    let mut session = GameSession::from_state(state, 0);

    let run = play(&mut session, b"collect poll\nbuy\n");
    assert_eq!(run.finish, Finish::Won);
    assert!(run.text.ends_with("Congratulations! You solved it in 1 turns.\n"));
    assert!(run.statuses.is_empty());
}

#[test]
fn journal_gets_only_commands_that_reached_the_engine() {
    let path = std::env::temp_dir().join(format!(
        "klondike-line-{}-{:?}.jsonl",
        std::process::id(),
        std::thread::current().id()
    ));
    let _ = std::fs::remove_file(&path);
    let mut journal = Journal::open(&path).unwrap();
    let mut session = GameSession::new(4);

    play_with(
        &mut session,
        &mut journal,
        b"buy\ncollect col 9\nmove fnd 1 to col 1\n",
    );
    drop(journal);

    let lines: Vec<serde_json::Value> = std::fs::read_to_string(&path)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    let _ = std::fs::remove_file(&path);

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["action"], "draw");
    assert_eq!(lines[0]["ok"], true);
    assert_eq!(lines[1]["action"], "move_foundation_to_column");
    assert_eq!(lines[1]["error"], "empty_foundation");
    assert_eq!(lines[1]["turn"], 1);
}

#[test]
fn parse_errors_have_codes() {
    assert_eq!(parse_command("move poll to col 0"), Err(ParseError::InvalidColumn));
    assert_eq!(ParseError::InvalidColumn.code(), "invalid_column");
    assert_eq!(ParseError::InvalidCard.code(), "invalid_card");
}
